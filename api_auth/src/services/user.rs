use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Looks up the account behind a token. Tokens outlive deleted accounts, so a
/// missing row is reported as `NotFound` rather than a token error.
pub async fn get_user_by_id(pool: &SqlitePool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))
}
