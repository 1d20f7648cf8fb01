use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::{
    env_config::JwtConfig,
    error::{AppError, Res},
    jwt::{self, ClaimsSpec},
};
use db::{dtos::user::UserCreateRequest, models::user::User};
use sqlx::SqlitePool;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};

/// Hashes a password with a fresh random salt. Argon2 runs with its default
/// (fixed) cost parameters; the PHC string embeds salt and parameters.
pub fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch; a malformed stored hash is an internal error.
pub fn verify_password(password: &str, password_hash: &str) -> Res<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!("Password verification failed: {}", e))),
    }
}

fn issue_token(user: &User, config: &JwtConfig) -> Res<String> {
    jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        },
        config,
    )
}

fn validate_registration(req: &RegisterRequest) -> Res<()> {
    if !req.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(AppError::BadRequest("First and last name are required".to_string()));
    }
    Ok(())
}

/// Registers a new account and signs it in.
/// Fails with `DuplicateEmail` when the email is taken; nothing is written then.
pub async fn sign_up(pool: &SqlitePool, req: RegisterRequest, config: &JwtConfig) -> Res<AuthResponse> {
    validate_registration(&req)?;

    if db::user::exists_user_by_email(pool, &req.email).await? {
        return Err(AppError::DuplicateEmail(req.email));
    }

    let password_hash = hash_password(&req.password)?;

    // the unique index still guards against a concurrent signup
    let user = db::user::insert_user(
        pool,
        UserCreateRequest {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password_hash,
            role: req.role,
        },
    )
    .await?;

    let token = issue_token(&user, config)?;
    log::info!("Registered user {} as {}", user.id, user.role);
    Ok(AuthResponse { user, token })
}

/// Authenticates existing user and issues a fresh token.
/// Unknown email and wrong password both yield `InvalidCredentials`.
/// Earlier tokens for the same user stay valid.
pub async fn sign_in(pool: &SqlitePool, login_data: LoginRequest, config: &JwtConfig) -> Res<AuthResponse> {
    let (user, credentials) = db::user::get_user_with_password_hash(pool, &login_data.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&login_data.password, &credentials.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&user, config)?;
    Ok(AuthResponse { user, token })
}
