use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::auth::{LoginRequest, RegisterRequest};
use crate::services;

/// Registers a new user with email and password authentication.
///
/// # Input
/// - `req`: JSON payload `{firstName, lastName, email, password, role}`
///
/// # Output
/// - Success: 201 Created with `{user, token}`
/// - Error: 400 Bad Request if the email already exists
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/signup', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     firstName: 'Jane',
///     lastName: 'Doe',
///     email: 'jane@example.com',
///     password: 'Passw0rd!',
///     role: 'manager'
///   })
/// });
/// const { user, token } = await response.json();
/// ```
#[post("/signup")]
async fn post_signup(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<SqlitePool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let response = services::auth::sign_up(&pool, req.into_inner(), &config.jwt_config).await?;
    Success::created(response)
}

/// Authenticates a user with email and password.
///
/// # Output
/// - Success: 200 with `{user, token}`
/// - Error: 401 Unauthorized for an unknown email or a wrong password
///   (same body for both)
#[post("/signin")]
async fn post_signin(
    login_data: web::Json<LoginRequest>,
    pool: web::Data<Arc<SqlitePool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let response =
        services::auth::sign_in(&pool, login_data.into_inner(), &config.jwt_config).await?;
    Success::ok(response)
}
