use common::error::{AppError, Res};
use db::{dtos::tenant::TenantCreateRequest, models::tenant::Tenant};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dtos::tenant::TenantCreateBody;

pub async fn list_tenants(pool: &SqlitePool) -> Res<Vec<Tenant>> {
    db::tenant::get_tenants(pool).await
}

pub fn resolve_tenant(body: TenantCreateBody) -> Res<TenantCreateRequest> {
    if !body.email.contains('@') {
        return Err(AppError::BadRequest("A valid tenant email is required".to_string()));
    }
    if let (Some(start), Some(end)) = (body.lease_start, body.lease_end) {
        if end < start {
            return Err(AppError::BadRequest("Lease cannot end before it starts".to_string()));
        }
    }

    Ok(TenantCreateRequest {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        emergency_contact: body.emergency_contact,
        emergency_phone: body.emergency_phone,
        property_id: body.property_id,
        unit: body.unit,
        lease_start: body.lease_start,
        lease_end: body.lease_end,
        rent: body.rent,
        deposit: body.deposit,
        status: body.status.unwrap_or_default(),
        notes: body.notes,
        avatar: body.avatar,
    })
}

/// Fails with `BadRequest` when another tenant has the email and with
/// `NotFound` when `propertyId` names no property.
pub async fn create_tenant(pool: &SqlitePool, body: TenantCreateBody) -> Res<Uuid> {
    let id = db::tenant::insert_tenant(pool, resolve_tenant(body)?)
        .await
        .map_err(|e| match e {
            AppError::DuplicateEmail(email) => {
                AppError::BadRequest(format!("A tenant with email {} already exists", email))
            }
            other => other,
        })?;
    log::info!("Created tenant {}", id);
    Ok(id)
}

pub async fn delete_tenant(pool: &SqlitePool, tenant_id: Uuid) -> Res<()> {
    db::tenant::delete_tenant(pool, tenant_id).await?;
    log::info!("Deleted tenant {}", tenant_id);
    Ok(())
}
