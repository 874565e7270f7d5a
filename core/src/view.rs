//! Render model derived from the shell's phase.
//!
//! A `View` is what a front end draws: a terminal prints its `Display` form,
//! a native host reads the fields.

use std::fmt;

use crate::shell::Phase;

pub const USERNAME_PLACEHOLDER: &str = "Username Placeholder";
pub const BIO_PLACEHOLDER: &str = "Bio Placeholder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub loading: bool,
    pub avatar_url: Option<String>,
    /// Login of the displayed user, or the placeholder.
    pub title: String,
    pub name: Option<String>,
    /// Bio of the displayed user, or the placeholder.
    pub bio: String,
    /// Message for the last failed lookup, if the last lookup failed.
    pub error: Option<String>,
}

impl View {
    pub fn from_phase(phase: &Phase) -> Self {
        let profile = phase.profile();
        let error = match phase {
            Phase::Failure { error, .. } => Some(error.user_message()),
            _ => None,
        };
        Self {
            loading: matches!(phase, Phase::Loading { .. }),
            avatar_url: profile.map(|p| p.avatar_url.clone()),
            title: profile
                .map(|p| p.login.clone())
                .unwrap_or_else(|| USERNAME_PLACEHOLDER.to_string()),
            name: profile.and_then(|p| p.name.clone()),
            bio: profile
                .and_then(|p| p.bio.clone())
                .unwrap_or_else(|| BIO_PLACEHOLDER.to_string()),
            error,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            return write!(f, "Loading...");
        }
        if let Some(error) = &self.error {
            writeln!(f, "error: {error}")?;
        }
        match &self.avatar_url {
            Some(url) => writeln!(f, "avatar: {url}")?,
            None => writeln!(f, "avatar: (none)")?,
        }
        match &self.name {
            Some(name) => writeln!(f, "{} ({name})", self.title)?,
            None => writeln!(f, "{}", self.title)?,
        }
        write!(f, "{}", self.bio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::types::UserProfile;

    fn octocat() -> UserProfile {
        UserProfile {
            login: "octocat".to_string(),
            avatar_url: "https://example.com/octocat.png".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
        }
    }

    #[test]
    fn idle_shows_placeholders() {
        let view = View::from_phase(&Phase::Idle);
        assert!(!view.loading);
        assert_eq!(view.title, USERNAME_PLACEHOLDER);
        assert_eq!(view.bio, BIO_PLACEHOLDER);
        assert!(view.avatar_url.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn loading_renders_indicator_only() {
        let view = View::from_phase(&Phase::Loading {
            previous: Some(octocat()),
        });
        assert!(view.loading);
        assert_eq!(view.to_string(), "Loading...");
    }

    #[test]
    fn success_with_null_bio_uses_bio_placeholder() {
        let view = View::from_phase(&Phase::Success(octocat()));
        assert_eq!(view.title, "octocat");
        assert_eq!(view.bio, BIO_PLACEHOLDER);
        assert_eq!(
            view.to_string(),
            "avatar: https://example.com/octocat.png\noctocat (The Octocat)\nBio Placeholder"
        );
    }

    #[test]
    fn failure_shows_error_over_previous_record() {
        let view = View::from_phase(&Phase::Failure {
            error: LookupError::InvalidResponse {
                status: 404,
                body: String::new(),
            },
            previous: Some(octocat()),
        });
        assert_eq!(view.error.as_deref(), Some("User not found."));
        assert_eq!(view.title, "octocat");
        assert!(view.to_string().starts_with("error: User not found.\n"));
    }
}
