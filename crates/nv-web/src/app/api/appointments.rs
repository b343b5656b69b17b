//! Appointment scheduling client.

use nv_types::appointments::{Appointment, AppointmentStatus, CreateAppointmentRequest};
use tokio_util::sync::CancellationToken;

use super::{conflict_error, fetch_json, read_text, send, with_cancel, ApiClient};
use crate::error::ApiError;

/// Appointments booked by a client.
pub async fn for_client(
    api: &ApiClient,
    client_email: &str,
    cancel: &CancellationToken,
) -> Result<Vec<Appointment>, ApiError> {
    let url = api.url(&["appointments", "client", client_email]);
    fetch_json(api.get(url), "Failed to fetch appointments", cancel).await
}

/// Appointments on an agent's calendar.
pub async fn for_agent(
    api: &ApiClient,
    agent_email: &str,
    cancel: &CancellationToken,
) -> Result<Vec<Appointment>, ApiError> {
    let url = api.url(&["appointments", "agent", agent_email]);
    fetch_json(api.get(url), "Failed to fetch appointments", cancel).await
}

/// Appointments scheduled against one property.
pub async fn for_property(
    api: &ApiClient,
    property_id: i64,
    cancel: &CancellationToken,
) -> Result<Vec<Appointment>, ApiError> {
    let url = api.url(&["appointments", "property", &property_id.to_string()]);
    fetch_json(api.get(url), "Failed to fetch appointments", cancel).await
}

/// Book a viewing. Returns `true` on success.
///
/// A scheduling conflict comes back as HTTP 409 with a human-readable body;
/// that body is surfaced verbatim as the error message so the user sees
/// which slot collided. Other failures collapse into a generic message.
pub async fn create(
    api: &ApiClient,
    request: &CreateAppointmentRequest,
    cancel: &CancellationToken,
) -> Result<bool, ApiError> {
    let url = api.url(&["appointments"]);
    let response = send(api.post(url).json(request), cancel).await?;
    let status = response.status();

    if status.is_success() {
        return with_cancel(cancel, async move {
            response.json::<bool>().await.map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await;
    }

    let body = read_text(response, cancel).await.unwrap_or_default();
    Err(conflict_error(status.as_u16(), body, "Failed to create appointment"))
}

/// Agent-side status transition, with an optional comment for the client.
/// Returns the updated appointment.
pub async fn update_status(
    api: &ApiClient,
    id: i64,
    status: AppointmentStatus,
    comment: Option<&str>,
    cancel: &CancellationToken,
) -> Result<Appointment, ApiError> {
    let mut url = api.url(&["appointments", &id.to_string(), "status"]);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("status", status.as_str());
        if let Some(comment) = comment {
            pairs.append_pair("comment", comment);
        }
    }
    fetch_json(api.put(url), "Failed to update appointment", cancel).await
}
