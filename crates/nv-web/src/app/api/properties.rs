//! Property listing client.

use nv_types::properties::{Property, PropertySearch};
use tokio_util::sync::CancellationToken;

use super::{fetch_json, ApiClient};
use crate::error::ApiError;

/// Search the listing catalogue. `filters` fields that are `None` are not
/// sent, so an empty search returns everything.
pub async fn search(
    api: &ApiClient,
    filters: &PropertySearch,
    cancel: &CancellationToken,
) -> Result<Vec<Property>, ApiError> {
    let url = api.url(&["properties"]);
    fetch_json(api.get(url).query(filters), "Failed to fetch properties", cancel).await
}

/// Fetch one listing by id.
pub async fn get(api: &ApiClient, id: i64, cancel: &CancellationToken) -> Result<Property, ApiError> {
    let url = api.url(&["properties", &id.to_string()]);
    fetch_json(api.get(url), "Failed to fetch property", cancel).await
}
