use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use sqlx::SqlitePool;

use crate::{dtos::payment::PaymentCreateBody, services};

/// Lists payments with the tenant's name and the property's name attached,
/// latest due date first.
#[get("")]
async fn get_payments(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let payments = services::payment::list_payments(&pool).await?;
    Success::ok(payments)
}

#[post("")]
async fn post_payment(
    body: web::Json<PaymentCreateBody>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = services::payment::create_payment(&pool, body.into_inner()).await?;
    Success::created_id(id, "Payment recorded successfully")
}
