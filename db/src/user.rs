use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::{
    dtos::user::UserCreateRequest,
    models::user::{AuthCredentials, User},
};

const USER_COLUMNS: &str = "id, email, first_name, last_name, role, avatar, created_at";

pub async fn exists_user_by_email<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn count_users<'e, E: Executor<'e, Database = Sqlite>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts the account and its password hash. A second account with the same
/// email is rejected by the unique index and surfaces as `DuplicateEmail`.
pub async fn insert_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    let now = Utc::now().naive_utc();
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, email, password_hash, first_name, last_name, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&data.email)
    .bind(&data.password_hash)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(data.role)
    .bind(now)
    .fetch_one(executor)
    .await
    .map_err(|e| AppError::from_constraint(e, &data.email))
}

pub async fn get_user_with_password_hash<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    email: &str,
) -> Res<Option<(User, AuthCredentials)>> {
    #[derive(sqlx::FromRow)]
    struct Record {
        #[sqlx(flatten)]
        user: User,
        password_hash: String,
    }

    sqlx::query_as::<_, Record>(&format!(
        "SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(executor)
    .await
    .map(|record| {
        record.map(|record| {
            let credentials = AuthCredentials {
                user_id: record.user.id,
                password_hash: record.password_hash,
            };
            (record.user, credentials)
        })
    })
    .map_err(AppError::from)
}
