use serde::{Deserialize, Serialize};

/// A direct message. Conversations are derived server-side by querying all
/// messages between two user ids; the client relies on the returned array
/// order and adds no threading of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    #[serde(default)]
    pub sent_at: String,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

/// Marks everything the counterpart sent to `user_id` as read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadDto {
    pub user_id: String,
    pub counterpart_id: String,
}
