use common::error::{AppError, Res};
use db::{dtos::payment::PaymentCreateRequest, models::payment::PaymentWithNames};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dtos::payment::PaymentCreateBody;

pub async fn list_payments(pool: &SqlitePool) -> Res<Vec<PaymentWithNames>> {
    db::payment::get_payments_with_names(pool).await
}

/// Records a payment as given. The status is whatever the caller sends
/// (default `pending`); nothing is inferred from the dates.
pub async fn create_payment(pool: &SqlitePool, body: PaymentCreateBody) -> Res<Uuid> {
    if !(body.amount > 0.0) {
        return Err(AppError::BadRequest("Payment amount must be positive".to_string()));
    }

    let id = db::payment::insert_payment(
        pool,
        PaymentCreateRequest {
            tenant_id: body.tenant_id,
            property_id: body.property_id,
            amount: body.amount,
            due_date: body.due_date,
            paid_date: body.paid_date,
            status: body.status.unwrap_or_default(),
            method: body.method,
        },
    )
    .await?;
    log::info!("Recorded payment {} for tenant {}", id, body.tenant_id);
    Ok(id)
}
