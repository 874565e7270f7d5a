//! C-ABI wrapper around `profile-core`.
//!
//! # Overview
//! Exposes the user lookup through `extern "C"` functions so a native host
//! (a mobile app, typically) can build the request, execute it with its own
//! networking stack, and hand the response back for decoding.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `build_*` / `parse_*` mirror the core API 1:1.
//! - `FfiLookupResult` conveys the decoded profile or the error kind, with
//!   the HTTP status for `InvalidResponse`.
//! - The C caller owns all returned pointers and must call the matching
//!   `profile_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use profile_core::{HttpResponse, ProfileClient};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `ProfileClient` bound to `base_url`.
///
/// A null `base_url` selects the public GitHub API. Returns null if
/// `base_url` is not valid UTF-8 or if an internal panic occurs.
/// The caller must free the returned pointer with `profile_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn profile_client_new(base_url: *const c_char) -> *mut FfiProfileClient {
    catch_unwind(|| {
        let client = if base_url.is_null() {
            ProfileClient::default()
        } else {
            match unsafe { CStr::from_ptr(base_url) }.to_str() {
                Ok(url) => ProfileClient::new(url),
                Err(_) => return std::ptr::null_mut(),
            }
        };
        Box::into_raw(Box::new(FfiProfileClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `ProfileClient` created by `profile_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn profile_client_free(client: *mut FfiProfileClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request
// ---------------------------------------------------------------------------

/// Build the request that looks up `username`.
///
/// Returns null on failure and, when `error_code` is non-null, stores why:
/// `NullArg` if `client` or `username` is null, `InvalidUrl` if `username`
/// is not valid UTF-8 or cannot form a valid lookup URL (empty, or
/// containing characters that would need escaping), `Panic` on an internal
/// panic. On success `error_code` receives `Ok`.
/// The caller must free the returned pointer with `profile_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn profile_build_fetch_user(
    client: *const FfiProfileClient,
    username: *const c_char,
    error_code: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    let outcome = catch_unwind(|| {
        if client.is_null() || username.is_null() {
            return Err(FfiErrorCode::NullArg);
        }
        let client = unsafe { &*client };
        let Ok(username) = unsafe { CStr::from_ptr(username) }.to_str() else {
            return Err(FfiErrorCode::InvalidUrl);
        };
        client
            .inner
            .build_fetch_user(username)
            .map(FfiHttpRequest::from_core)
            .map_err(|e| FfiErrorCode::from(&e))
    })
    .unwrap_or(Err(FfiErrorCode::Panic));

    let (code, req) = match outcome {
        Ok(req) => (FfiErrorCode::Ok, req),
        Err(code) => (code, std::ptr::null_mut()),
    };
    if !error_code.is_null() {
        unsafe { *error_code = code };
    }
    req
}

// ---------------------------------------------------------------------------
// Parse response
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`.
///
/// A null body reads as empty; invalid UTF-8 is replaced, which makes the
/// decode fail with `InvalidData` rather than silently succeed.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_string_lossy()
            .into_owned()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Decode the response to a `profile_build_fetch_user` request.
///
/// Never returns null. The caller must free the result with
/// `profile_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn profile_parse_fetch_user(
    client: *const FfiProfileClient,
    response: *const FfiHttpResponse,
) -> *mut FfiLookupResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiLookupResult::null_arg("client");
        }
        if response.is_null() {
            return FfiLookupResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_fetch_user(ffi_response_to_core(resp)) {
            Ok(profile) => FfiLookupResult::ok(profile),
            Err(e) => FfiLookupResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiLookupResult::panic("panic in profile_parse_fetch_user"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `profile_build_fetch_user`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn profile_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiLookupResult` returned by `profile_parse_fetch_user`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn profile_free_result(result: *mut FfiLookupResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        free_c_string(result.user_message);
        if !result.profile.is_null() {
            let profile = unsafe { Box::from_raw(result.profile) };
            profile.free_fields();
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
