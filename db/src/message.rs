use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::{dtos::message::MessageCreateRequest, models::message::Message};

/// Messages the user sent or received, newest first.
pub async fn get_messages_for_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Message>> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT * FROM messages
        WHERE sender_id = $1 OR recipient_id = $1
        ORDER BY timestamp DESC, rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_message<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: MessageCreateRequest,
) -> Res<Message> {
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, sender_id, recipient_id, content, timestamp, read_status, type)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.sender_id)
    .bind(data.recipient_id)
    .bind(&data.content)
    .bind(Utc::now().naive_utc())
    .bind(data.message_type)
    .fetch_one(executor)
    .await
    .map_err(|e| AppError::from_constraint(e, "message"))
}

/// Marks a message read. Only its recipient may do so; anyone else gets
/// `NotFound`.
pub async fn mark_message_read<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    message_id: Uuid,
    recipient_id: Uuid,
) -> Res<()> {
    let result =
        sqlx::query("UPDATE messages SET read_status = TRUE WHERE id = $1 AND recipient_id = $2")
            .bind(message_id)
            .bind(recipient_id)
            .execute(executor)
            .await
            .map_err(AppError::from)?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("message {}", message_id)));
    }
    Ok(())
}
