use std::sync::Arc;

use actix_web::{Responder, delete, get, post, web};
use common::{error::Res, http::Success};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{dtos::tenant::TenantCreateBody, services};

#[get("")]
async fn get_tenants(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let tenants = services::tenant::list_tenants(&pool).await?;
    Success::ok(tenants)
}

/// Creates a tenant.
///
/// # Output
/// - Success: 201 with `{id, message}`
/// - Error: 400 if the email is taken or the lease dates are inverted,
///   404 if `propertyId` names no property
#[post("")]
async fn post_tenant(
    body: web::Json<TenantCreateBody>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = services::tenant::create_tenant(&pool, body.into_inner()).await?;
    Success::created_id(id, "Tenant created successfully")
}

#[delete("/{id}")]
async fn delete_tenant(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = path.into_inner();
    services::tenant::delete_tenant(&pool, id).await?;
    Success::ok_id(id, "Tenant deleted successfully")
}
