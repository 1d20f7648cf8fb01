use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::{
    dtos::payment::PaymentCreateRequest,
    models::payment::PaymentWithNames,
};

/// Payments joined with tenant and property names, latest due date first.
pub async fn get_payments_with_names<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<PaymentWithNames>> {
    sqlx::query_as::<_, PaymentWithNames>(
        r#"
        SELECT p.*, t.first_name AS tenant_first_name, t.last_name AS tenant_last_name,
            pr.name AS property_name
        FROM payments p
        JOIN tenants t ON p.tenant_id = t.id
        JOIN properties pr ON p.property_id = pr.id
        ORDER BY p.due_date DESC, p.created_at DESC, p.rowid DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Fails with `NotFound` when the tenant or property does not exist.
pub async fn insert_payment<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: PaymentCreateRequest,
) -> Res<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO payments (id, tenant_id, property_id, amount, due_date, paid_date, status, method, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(data.tenant_id)
    .bind(data.property_id)
    .bind(data.amount)
    .bind(data.due_date)
    .bind(data.paid_date)
    .bind(data.status)
    .bind(&data.method)
    .bind(Utc::now().naive_utc())
    .execute(executor)
    .await
    .map_err(|e| AppError::from_constraint(e, "payment"))?;

    Ok(id)
}
