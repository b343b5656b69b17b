//! Review DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub property_id: i64,
    pub agent_email: String,
    pub reviewer_email: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    pub review_date: DateTime<Utc>,
}

/// Submitted without id or review date; the backend assigns both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub property_id: i64,
    pub agent_email: String,
    pub reviewer_email: String,
    pub rating: u8,
    pub comment: String,
}

/// Wire envelope the backend wraps review submissions in.
///
/// The resource client unwraps this into a plain `Result`; no other endpoint
/// uses an envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Review>,
    #[serde(default)]
    pub error: Option<String>,
}
