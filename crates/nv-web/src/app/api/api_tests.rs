//! Unit tests for URL construction and status-to-error mapping.
//!
//! The async halves of the clients are thin wrappers over these pure pieces
//! plus reqwest, so the contract-bearing logic is all testable without a
//! network.

use super::*;
use crate::app::config::ApiConfig;

fn client() -> ApiClient {
    let config = ApiConfig::with_base(reqwest::Url::parse("http://backend.test/api/").unwrap());
    ApiClient::new(&config, &Session::anonymous())
}

#[test]
fn url_joins_segments_onto_base() {
    let api = client();
    let url = api.url(&["messages", "conversations", "user@example.com"]);
    assert_eq!(
        url.as_str(),
        "http://backend.test/api/messages/conversations/user@example.com"
    );
}

#[test]
fn url_segments_cannot_introduce_path_structure() {
    let api = client();
    let url = api.url(&["properties", "1/../../admin"]);
    // The slashes arrive encoded; the segment stays one segment.
    assert_eq!(url.as_str(), "http://backend.test/api/properties/1%2F..%2F..%2Fadmin");
}

#[test]
fn url_percent_encodes_hostile_segments() {
    let api = client();
    let url = api.url(&["reviews", "property", "agent+spam me@example.com", "rating"]);
    // '@', '+', and spaces survive as data, not as URL structure.
    assert!(url.as_str().ends_with("/reviews/property/agent+spam%20me@example.com/rating"));
    assert_eq!(url.path_segments().unwrap().count(), 5);
}

#[test]
fn query_pairs_encode_values() {
    let api = client();
    let mut url = api.url(&["messages", "conversation"]);
    url.query_pairs_mut()
        .append_pair("user1Email", "a b@example.com")
        .append_pair("user2Email", "c&d@example.com")
        .append_pair("propertyId", "7");
    let query = url.query().unwrap();
    assert!(query.contains("user1Email=a+b%40example.com"));
    assert!(query.contains("user2Email=c%26d%40example.com"));
    assert!(query.contains("propertyId=7"));
}

#[test]
fn status_error_displays_the_generic_message_only() {
    let err = status_error(500, "Error while fetching reviews");
    assert_eq!(err.to_string(), "Error while fetching reviews");
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "Error while fetching reviews".to_string()
        }
    );
}

#[test]
fn conflict_surfaces_the_body_verbatim() {
    let err = conflict_error(409, "Slot already booked".to_string(), "Failed to create appointment");
    assert_eq!(err, ApiError::Conflict("Slot already booked".to_string()));
    assert_eq!(err.to_string(), "Slot already booked");
}

#[test]
fn non_conflict_statuses_collapse_into_the_fallback() {
    let err = conflict_error(500, "stack trace".to_string(), "Failed to create appointment");
    assert_eq!(err.to_string(), "Failed to create appointment");

    let err = conflict_error(400, String::new(), "Failed to create appointment");
    assert_eq!(err.to_string(), "Failed to create appointment");
}

#[test]
fn cancelled_error_is_detectable() {
    assert!(ApiError::Cancelled.is_cancelled());
    assert!(!status_error(404, "missing").is_cancelled());
}

#[test]
fn cancelled_token_short_circuits_the_operation() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = futures::executor::block_on(with_cancel(&cancel, std::future::pending::<Result<(), ApiError>>()));
    assert_eq!(result, Err(ApiError::Cancelled));
}

#[test]
fn live_token_lets_the_operation_finish() {
    let cancel = CancellationToken::new();
    let result = futures::executor::block_on(with_cancel(&cancel, async { Ok::<_, ApiError>(42) }));
    assert_eq!(result, Ok(42));
}
