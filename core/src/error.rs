//! Error types for the profile lookup.
//!
//! # Design
//! The three provider-facing kinds (`InvalidUrl`, `InvalidResponse`,
//! `InvalidData`) come from `ProfileClient` itself. `Transport` is produced by
//! whoever executes the request and covers everything else that can go wrong
//! on the wire, timeouts included. All variants are terminal for the lookup
//! that raised them; nothing is retried.
//!
//! `LookupError` is `Clone` so the shell can keep the last failure in its
//! state while also logging it.

use thiserror::Error;

/// Errors produced while looking up a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The endpoint URL could not be composed from the username.
    #[error("invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a status other than 200.
    #[error("unexpected HTTP status {status}")]
    InvalidResponse { status: u16, body: String },

    /// The response body is not a valid user profile.
    #[error("invalid profile data: {0}")]
    InvalidData(String),

    /// The request never produced a response (connect error, timeout, ...).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl LookupError {
    /// Short message suitable for showing to the person who typed the username.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::InvalidUrl(_) => "That username is not valid.".to_string(),
            LookupError::InvalidResponse { status: 404, .. } => "User not found.".to_string(),
            LookupError::InvalidResponse { status, .. } => {
                format!("The server responded with status {status}.")
            }
            LookupError::InvalidData(_) => {
                "The server sent a profile we could not read.".to_string()
            }
            LookupError::Transport(_) => "Could not reach the server.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_dedicated_message() {
        let err = LookupError::InvalidResponse {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "User not found.");
        assert_eq!(err.to_string(), "unexpected HTTP status 404");
    }

    #[test]
    fn other_statuses_mention_the_code() {
        let err = LookupError::InvalidResponse {
            status: 403,
            body: String::new(),
        };
        assert_eq!(err.user_message(), "The server responded with status 403.");
    }
}
