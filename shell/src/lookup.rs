//! The asynchronous user lookup: build, execute once, parse.

use profile_core::{LookupError, ProfileClient, UserProfile};
use tracing::debug;

use crate::transport::Transport;

/// Fetch the profile for `username` with exactly one request.
///
/// No retries and no caching; every error is terminal for this call.
pub async fn fetch_user_profile<T>(
    transport: &T,
    client: &ProfileClient,
    username: &str,
) -> Result<UserProfile, LookupError>
where
    T: Transport + ?Sized,
{
    let request = client.build_fetch_user(username)?;
    debug!(url = %request.url, "fetching user profile");
    let response = transport.execute(request).await?;
    debug!(status = response.status, bytes = response.body.len(), "user profile response");
    client.parse_fetch_user(response)
}
