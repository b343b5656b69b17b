//! Review client.

use nv_types::reviews::{CreateReviewRequest, Review, ReviewEnvelope};
use tokio_util::sync::CancellationToken;

use super::{fetch_json, ApiClient};
use crate::error::ApiError;

/// Reviews posted against one property.
pub async fn property_reviews(
    api: &ApiClient,
    property_id: i64,
    cancel: &CancellationToken,
) -> Result<Vec<Review>, ApiError> {
    let url = api.url(&["reviews", "property", &property_id.to_string()]);
    fetch_json(api.get(url), "Error while fetching reviews", cancel).await
}

/// Average rating across an agent's property listings.
pub async fn property_rating(api: &ApiClient, agent_email: &str, cancel: &CancellationToken) -> Result<f64, ApiError> {
    let url = api.url(&["reviews", "property", agent_email, "rating"]);
    fetch_json(api.get(url), "Error while fetching rating", cancel).await
}

/// Average rating of the agent directly.
pub async fn agent_rating(api: &ApiClient, agent_email: &str, cancel: &CancellationToken) -> Result<f64, ApiError> {
    let url = api.url(&["reviews", "agent", agent_email, "rating"]);
    fetch_json(api.get(url), "Error while fetching rating", cancel).await
}

/// Number of reviews an agent has received.
pub async fn agent_review_count(
    api: &ApiClient,
    agent_email: &str,
    cancel: &CancellationToken,
) -> Result<u64, ApiError> {
    let url = api.url(&["reviews", "agent", agent_email, "count"]);
    fetch_json(api.get(url), "Error while fetching review count", cancel).await
}

/// Submit a review; id and review date are assigned by the backend.
///
/// The backend wraps this one endpoint in a `{success, data, error}`
/// envelope; it is unwrapped here so callers get the same `Result` shape as
/// every other client.
pub async fn create(
    api: &ApiClient,
    request: &CreateReviewRequest,
    cancel: &CancellationToken,
) -> Result<Review, ApiError> {
    let url = api.url(&["reviews"]);
    let envelope: ReviewEnvelope = fetch_json(api.post(url).json(request), "Failed to submit review", cancel).await?;
    unwrap_envelope(envelope)
}

fn unwrap_envelope(envelope: ReviewEnvelope) -> Result<Review, ApiError> {
    if envelope.success {
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("review envelope missing data".to_string()))
    } else {
        Err(ApiError::Rejected(
            envelope.error.unwrap_or_else(|| "Failed to submit review".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn review() -> Review {
        Review {
            id: 1,
            property_id: 2,
            agent_email: "agent@example.com".into(),
            reviewer_email: "client@example.com".into(),
            rating: 5,
            comment: "great visit".into(),
            review_date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn successful_envelope_unwraps_to_the_review() {
        let envelope = ReviewEnvelope {
            success: true,
            data: Some(review()),
            error: None,
        };
        assert_eq!(unwrap_envelope(envelope), Ok(review()));
    }

    #[test]
    fn failed_envelope_surfaces_the_backend_error() {
        let envelope = ReviewEnvelope {
            success: false,
            data: None,
            error: Some("You already reviewed this property".into()),
        };
        assert_eq!(
            unwrap_envelope(envelope).unwrap_err().to_string(),
            "You already reviewed this property"
        );
    }

    #[test]
    fn failed_envelope_without_a_message_gets_the_generic_one() {
        let envelope = ReviewEnvelope {
            success: false,
            data: None,
            error: None,
        };
        assert_eq!(unwrap_envelope(envelope).unwrap_err().to_string(), "Failed to submit review");
    }

    #[test]
    fn successful_envelope_without_data_is_a_decode_failure() {
        let envelope = ReviewEnvelope {
            success: true,
            data: None,
            error: None,
        };
        assert!(matches!(unwrap_envelope(envelope), Err(ApiError::Decode(_))));
    }
}
