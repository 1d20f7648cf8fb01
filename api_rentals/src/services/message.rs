use common::error::{AppError, Res};
use db::{
    dtos::message::MessageCreateRequest,
    models::message::{Message, MessageType},
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dtos::message::MessageCreateBody;

pub async fn list_messages(pool: &SqlitePool, user_id: Uuid) -> Res<Vec<Message>> {
    db::message::get_messages_for_user(pool, user_id).await
}

pub async fn send_message(pool: &SqlitePool, sender_id: Uuid, body: MessageCreateBody) -> Res<Message> {
    if body.content.trim().is_empty() {
        return Err(AppError::BadRequest("Message content is required".to_string()));
    }

    db::message::insert_message(
        pool,
        MessageCreateRequest {
            sender_id,
            recipient_id: body.recipient_id,
            content: body.content,
            message_type: MessageType::Sent,
        },
    )
    .await
}

pub async fn mark_read(pool: &SqlitePool, message_id: Uuid, user_id: Uuid) -> Res<()> {
    db::message::mark_message_read(pool, message_id, user_id).await
}
