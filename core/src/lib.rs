//! Synchronous core of the GitHub user lookup.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and models the lookup screen
//! as a state machine that the host drives.
//!
//! # Design
//! - `ProfileClient` is stateless; it holds only `base_url`.
//! - The lookup is split into `build_fetch_user` (produces request) and
//!   `parse_fetch_user` (consumes response), so the I/O boundary is explicit.
//! - `Shell` owns the screen state and hands out `Submission`s; the host runs
//!   them and reports back with the matching `Ticket`.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - `UserProfile` is defined independently from the mock-server fixtures;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod shell;
pub mod types;
pub mod view;

pub use client::{ProfileClient, GITHUB_API_BASE_URL};
pub use error::LookupError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use shell::{Phase, Shell, Submission, Ticket};
pub use types::UserProfile;
pub use view::View;
