//! Generates `include/profile_ffi.h` for native hosts.

use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    println!("cargo:rerun-if-changed=src");

    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some("PROFILE_FFI_H".to_string()),
        ..Default::default()
    };

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            let include_dir = crate_dir.join("include");
            if let Err(err) = std::fs::create_dir_all(&include_dir) {
                println!("cargo:warning=cannot create {}: {err}", include_dir.display());
                return;
            }
            bindings.write_to_file(include_dir.join("profile_ffi.h"));
        }
        Err(err) => println!("cargo:warning=skipping C header generation: {err}"),
    }
}
