use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{dtos::message::MessageCreateBody, services};

/// Messages the caller sent or received, newest first.
#[get("")]
async fn get_messages(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let messages = services::message::list_messages(&pool, claims.user_id).await?;
    Success::ok(messages)
}

/// Sends a message from the caller to `recipientId`.
#[post("")]
async fn post_message(
    claims: web::ReqData<JwtClaims>,
    body: web::Json<MessageCreateBody>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let message = services::message::send_message(&pool, claims.user_id, body.into_inner()).await?;
    Success::created(message)
}

/// Marks a message read. Only its recipient may do so; anyone else gets 404.
#[post("/{id}/read")]
async fn post_mark_read(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = path.into_inner();
    services::message::mark_read(&pool, id, claims.user_id).await?;
    Success::ok_id(id, "Message marked as read")
}
