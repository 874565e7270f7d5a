//! Asynchronous host for `profile-core`.
//!
//! # Overview
//! Executes the core's plain-data requests over HTTP and drives its `Shell`
//! from a terminal, standing in for the single lookup screen.
//!
//! # Design
//! - `Transport` is the only place that touches the network.
//! - `fetch_user_profile` is build, execute once, parse.
//! - `Session` serializes searches by cancelling the lookup in flight.
//! - `cli` runs the binary's modes over any reader and writer.

pub mod cli;
pub mod config;
pub mod lookup;
pub mod session;
pub mod transport;

pub use config::Config;
pub use lookup::fetch_user_profile;
pub use session::Session;
pub use transport::{ReqwestTransport, Transport};
