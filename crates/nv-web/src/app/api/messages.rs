//! Messaging client.

use nv_types::messages::{Conversation, Message, SendMessageRequest};
use tokio_util::sync::CancellationToken;

use super::{fetch_json, fetch_unit, ApiClient};
use crate::error::ApiError;

/// All conversation threads involving `user_email`.
pub async fn conversations(
    api: &ApiClient,
    user_email: &str,
    cancel: &CancellationToken,
) -> Result<Vec<Conversation>, ApiError> {
    let url = api.url(&["messages", "conversations", user_email]);
    fetch_json(api.get(url), "Failed to fetch conversations", cancel).await
}

/// Full message thread between two users about one property.
pub async fn conversation(
    api: &ApiClient,
    user1_email: &str,
    user2_email: &str,
    property_id: i64,
    cancel: &CancellationToken,
) -> Result<Vec<Message>, ApiError> {
    let mut url = api.url(&["messages", "conversation"]);
    url.query_pairs_mut()
        .append_pair("user1Email", user1_email)
        .append_pair("user2Email", user2_email)
        .append_pair("propertyId", &property_id.to_string());
    fetch_json(api.get(url), "Failed to fetch conversation", cancel).await
}

/// Send a message; the backend returns no body on success.
pub async fn send_message(
    api: &ApiClient,
    request: &SendMessageRequest,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    let url = api.url(&["messages", "send"]);
    fetch_unit(api.post(url).json(request), "Failed to send message", cancel).await
}

/// Mark everything `sender_email` sent to `receiver_email` about one
/// property as read.
pub async fn mark_read(
    api: &ApiClient,
    receiver_email: &str,
    sender_email: &str,
    property_id: i64,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    let mut url = api.url(&["messages", "read"]);
    url.query_pairs_mut()
        .append_pair("receiverEmail", receiver_email)
        .append_pair("senderEmail", sender_email)
        .append_pair("propertyId", &property_id.to_string());
    fetch_unit(api.put(url), "Failed to mark conversation read", cancel).await
}
