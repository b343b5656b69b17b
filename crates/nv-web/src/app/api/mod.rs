//! REST clients for the marketplace backend.
//!
//! Every function in the submodules issues exactly one HTTP request: no
//! retries, no timeouts. Non-2xx statuses collapse into an endpoint-specific
//! message ([`ApiError::Status`]); the one exception is appointment
//! creation, where a 409 body is surfaced verbatim. Each call takes a
//! [`CancellationToken`] so a view can abort its in-flight requests when it
//! unmounts.

pub mod appointments;
pub mod auth;
pub mod messages;
pub mod properties;
pub mod reviews;

use std::future::Future;

use dioxus::prelude::*;
use futures::future::{select, Either};
use nv_types::session::Session;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::app::config::ApiConfig;
use crate::app::session::use_session;
use crate::error::ApiError;

/// Handle carrying everything a resource call needs: transport, base
/// address, and the bearer token of the session it was built from.
///
/// Cheap to construct; call sites build one per operation so the token is
/// always the current one.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: reqwest::Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: &Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.base_url.clone(),
            token: session.token.clone(),
        }
    }

    /// Join `segments` onto the base address. Each segment is
    /// percent-encoded, so emails and free-text identifiers are safe.
    pub(crate) fn url(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(url))
    }

    pub(crate) fn post(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(url))
    }

    pub(crate) fn put(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        self.authorize(self.http.put(url))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Client bound to the configured base address and the current session.
pub fn use_api() -> ApiClient {
    let config = use_context::<ApiConfig>();
    let session = use_session();
    ApiClient::new(&config, &session.session())
}

/// Token cancelled when the calling component unmounts.
pub fn use_cancel_on_unmount() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    use_drop({
        let token = token.clone();
        move || token.cancel()
    });
    token
}

/// Map a non-2xx status onto the endpoint's generic error message.
pub(crate) fn status_error(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.to_string(),
    }
}

/// 409 surfaces the body verbatim; any other non-2xx collapses into
/// `fallback`.
pub(crate) fn conflict_error(status: u16, body: String, fallback: &str) -> ApiError {
    if status == 409 {
        ApiError::Conflict(body)
    } else {
        status_error(status, fallback)
    }
}

/// Race `operation` against the caller's cancellation token.
pub(crate) async fn with_cancel<T, F>(cancel: &CancellationToken, operation: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let operation = std::pin::pin!(operation);
    let cancelled = std::pin::pin!(cancel.cancelled());
    match select(operation, cancelled).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Cancelled),
    }
}

/// Issue the request; transport-level failures (no response at all)
/// propagate as [`ApiError::Transport`].
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    cancel: &CancellationToken,
) -> Result<reqwest::Response, ApiError> {
    with_cancel(cancel, async move {
        request.send().await.map_err(|e| ApiError::Transport(e.to_string()))
    })
    .await
}

/// Read the response body as text, honoring cancellation.
pub(crate) async fn read_text(response: reqwest::Response, cancel: &CancellationToken) -> Result<String, ApiError> {
    with_cancel(cancel, async move {
        response.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    })
    .await
}

/// Run `request`, mapping any non-2xx status onto `fallback` and decoding a
/// 2xx body as JSON.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    fallback: &str,
    cancel: &CancellationToken,
) -> Result<T, ApiError> {
    let response = send(request, cancel).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), fallback));
    }
    with_cancel(cancel, async move {
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    })
    .await
}

/// Run `request` for endpoints that return no body on success.
pub(crate) async fn fetch_unit(
    request: reqwest::RequestBuilder,
    fallback: &str,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    let response = send(request, cancel).await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(status_error(status.as_u16(), fallback))
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
