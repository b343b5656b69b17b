//! Appointment scheduling DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Declined,
    Completed,
}

impl AppointmentStatus {
    /// Wire form used in the status-update query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Declined => "DECLINED",
            AppointmentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub property_id: i64,
    pub client_email: String,
    pub agent_email: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    /// Set by the agent when confirming or declining.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Payload for booking a viewing; the backend assigns id and initial status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub property_id: i64,
    pub client_email: String,
    pub agent_email: String,
    pub scheduled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_wire_form() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
        assert_eq!(
            serde_json::from_str::<AppointmentStatus>("\"DECLINED\"").unwrap(),
            AppointmentStatus::Declined
        );
        assert_eq!(AppointmentStatus::Pending.as_str(), "PENDING");
    }
}
