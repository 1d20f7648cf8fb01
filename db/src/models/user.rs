use chrono::NaiveDateTime;
use common::misc::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of an account. The password hash lives in [`AuthCredentials`]
/// and never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthCredentials {
    pub user_id: Uuid,
    pub password_hash: String,
}
