use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::{dtos::tenant::TenantCreateRequest, models::tenant::Tenant};

/// All tenants, newest first.
pub async fn get_tenants<'e, E: Executor<'e, Database = Sqlite>>(executor: E) -> Res<Vec<Tenant>> {
    sqlx::query_as::<_, Tenant>("SELECT * FROM tenants ORDER BY created_at DESC, rowid DESC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_tenant_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    tenant_id: Uuid,
) -> Res<Option<Tenant>> {
    sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
        .bind(tenant_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Tenant emails are unique among tenants only; they may coincide with a
/// user account's email.
pub async fn insert_tenant<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: TenantCreateRequest,
) -> Res<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now().naive_utc();
    sqlx::query(
        r#"
        INSERT INTO tenants (id, first_name, last_name, email, phone, emergency_contact, emergency_phone,
            property_id, unit, lease_start, lease_end, rent, deposit, status, notes, avatar, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $17)
        "#,
    )
    .bind(id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.emergency_contact)
    .bind(&data.emergency_phone)
    .bind(data.property_id)
    .bind(&data.unit)
    .bind(data.lease_start)
    .bind(data.lease_end)
    .bind(data.rent)
    .bind(data.deposit)
    .bind(data.status)
    .bind(&data.notes)
    .bind(&data.avatar)
    .bind(now)
    .execute(executor)
    .await
    .map_err(|e| AppError::from_constraint(e, &data.email))?;

    Ok(id)
}

/// Deletes the tenant together with its payments.
pub async fn delete_tenant<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    tenant_id: Uuid,
) -> Res<()> {
    let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
        .bind(tenant_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("tenant {}", tenant_id)));
    }
    Ok(())
}
