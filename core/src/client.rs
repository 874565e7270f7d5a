//! Stateless HTTP request builder and response parser for the user lookup.
//!
//! # Design
//! `ProfileClient` holds only a `base_url` and carries no mutable state
//! between calls. The lookup is split into `build_fetch_user`, which produces
//! an `HttpRequest`, and `parse_fetch_user`, which consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use url::Url;

use crate::error::LookupError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::UserProfile;

/// Base URL of the public GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Synchronous, stateless client for the user-lookup endpoint.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The endpoint root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `GET {base_url}/users/{username}`.
    ///
    /// Fails with `InvalidUrl` when the username is empty or would not
    /// survive as a single, unescaped path segment.
    pub fn build_fetch_user(&self, username: &str) -> Result<HttpRequest, LookupError> {
        if username.is_empty() {
            return Err(LookupError::InvalidUrl("empty username".to_string()));
        }
        let raw = format!("{}/users/{username}", self.base_url);
        let url = Url::parse(&raw).map_err(|e| LookupError::InvalidUrl(format!("{raw}: {e}")))?;
        if !addresses_user(&url, username) {
            return Err(LookupError::InvalidUrl(format!(
                "{raw}: username is not a plain path segment"
            )));
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
        })
    }

    pub fn parse_fetch_user(&self, response: HttpResponse) -> Result<UserProfile, LookupError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| LookupError::InvalidData(e.to_string()))
    }
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new(GITHUB_API_BASE_URL)
    }
}

/// True if `url` ends in `/users/{username}` exactly as typed, with no query
/// or fragment. Parsing percent-encodes or normalizes anything that is not a
/// plain segment, which makes the comparison fail.
fn addresses_user(url: &Url, username: &str) -> bool {
    if username.contains('%') || url.query().is_some() || url.fragment().is_some() {
        return false;
    }
    let Some(segments) = url.path_segments() else {
        return false;
    };
    let segments: Vec<&str> = segments.collect();
    matches!(segments.as_slice(), [.., "users", last] if *last == username)
}

/// Map any status other than `expected` to `InvalidResponse`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), LookupError> {
    if response.status == expected {
        return Ok(());
    }
    Err(LookupError::InvalidResponse {
        status: response.status,
        body: response.body.clone(),
    })
}
