use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::SqlitePool;

use crate::services;

/// Endpoint to retrieve the current authenticated user's information.
///
/// This is the server half of the client's explicit session verification:
/// the bearer token is checked by the middleware, then the account it names
/// is fetched.
///
/// # Output
/// - Success: Returns the user's profile
/// - Error: 401 without a token, 403 for an invalid or expired token,
///   404 if the account no longer exists
#[get("/me")]
async fn get_me(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let user = services::user::get_user_by_id(&pool, claims.user_id).await?;
    Success::ok(user)
}
