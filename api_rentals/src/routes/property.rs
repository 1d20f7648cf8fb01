use std::sync::Arc;

use actix_web::{Responder, delete, get, post, web};
use common::{error::Res, http::Success};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{dtos::property::PropertyCreateBody, services};

/// Lists every property, newest first.
#[get("")]
async fn get_properties(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let properties = services::property::list_properties(&pool).await?;
    Success::ok(properties)
}

/// Creates a property.
///
/// # Input
/// - JSON `{name, address, city, state, zipCode, type, bedrooms, bathrooms,
///   sqft, rent, deposit?, status?, description?, amenities?, images?, tenantId?}`
///
/// # Output
/// - Success: 201 with `{id, message}`
/// - Error: 400 for invalid fields
///
/// `tenantId` is stored as given; it is not checked against the tenants table.
#[post("")]
async fn post_property(
    body: web::Json<PropertyCreateBody>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = services::property::create_property(&pool, body.into_inner()).await?;
    Success::created_id(id, "Property created successfully")
}

/// Deletes a property. Tenants that referenced it keep existing with no
/// property; its payments are removed.
#[delete("/{id}")]
async fn delete_property(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let id = path.into_inner();
    services::property::delete_property(&pool, id).await?;
    Success::ok_id(id, "Property deleted successfully")
}
