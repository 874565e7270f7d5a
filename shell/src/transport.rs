//! Executes the plain-data requests built by `profile-core`.
//!
//! # Design
//! `Transport` is the seam between the deterministic core and the network.
//! Production code uses `ReqwestTransport`; tests substitute fakes that never
//! open a socket. A transport only reports failures that happen before a
//! response exists. Status codes and bodies, good or bad, are returned as
//! data for `ProfileClient::parse_fetch_user` to judge.

use std::time::Duration;

use async_trait::async_trait;
use profile_core::{HttpMethod, HttpRequest, HttpResponse, LookupError};

/// Sent on every request; the provider rejects requests without one.
pub const USER_AGENT: &str = concat!("profile-lookup/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, LookupError>;
}

/// `reqwest`-backed transport with a per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, LookupError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        // Decoding reads only status and body.
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Transport(format!("request timed out: {err}"))
    } else {
        LookupError::Transport(err.to_string())
    }
}
