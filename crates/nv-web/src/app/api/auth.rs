//! Authentication client.

use nv_types::auth::{LoginRequest, LoginResponse};
use tokio_util::sync::CancellationToken;

use super::{fetch_json, ApiClient};
use crate::error::ApiError;

/// Exchange credentials for a session.
///
/// The caller composes the response into a [`nv_types::session::Session`]
/// and installs it with a single replace; this function does not touch
/// storage itself.
pub async fn login(
    api: &ApiClient,
    request: &LoginRequest,
    cancel: &CancellationToken,
) -> Result<LoginResponse, ApiError> {
    let url = api.url(&["auth", "login"]);
    fetch_json(api.post(url).json(request), "Invalid email or password", cancel).await
}
