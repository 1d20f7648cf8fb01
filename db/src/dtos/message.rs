use uuid::Uuid;

use crate::models::message::MessageType;

pub struct MessageCreateRequest {
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub content: String,
    pub message_type: MessageType,
}
