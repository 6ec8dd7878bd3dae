use contracts::domain::a005_message::{MarkReadDto, Message, SendMessageDto};
use urlencoding::encode;

use crate::shared::http;

/// Send a message. The caller appends it locally only after this resolves.
pub async fn send_message(dto: SendMessageDto) -> Result<Message, String> {
    http::post_json("/api/messages/send", &dto).await
}

/// Mark everything the counterpart sent us as read.
pub async fn mark_read(user_id: &str, counterpart_id: &str) -> Result<(), String> {
    let dto = MarkReadDto {
        user_id: user_id.to_string(),
        counterpart_id: counterpart_id.to_string(),
    };
    http::post_ack("/api/messages/read", &dto).await
}

/// All messages involving one user, used to derive the conversation list.
pub async fn fetch_user_messages(user_id: &str) -> Result<Vec<Message>, String> {
    http::get_json(&format!("/api/messages/user/{}", user_id)).await
}

/// Full conversation between two users, in server order.
pub async fn fetch_conversation(user_a: &str, user_b: &str) -> Result<Vec<Message>, String> {
    http::get_json(&format!(
        "/api/messages/conversation?userId1={}&userId2={}",
        encode(user_a),
        encode(user_b)
    ))
    .await
}
