use common::error::{AppError, Res};
use db::{dtos::property::PropertyCreateRequest, models::property::Property};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dtos::property::PropertyCreateBody;

pub async fn list_properties(pool: &SqlitePool) -> Res<Vec<Property>> {
    db::property::get_properties(pool).await
}

/// Amenities form a set: duplicates are dropped, first occurrence wins.
fn dedup_amenities(amenities: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    amenities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty() && seen.insert(a.clone()))
        .collect()
}

/// Validates the body and fills in creation defaults.
pub fn resolve_property(body: PropertyCreateBody) -> Res<PropertyCreateRequest> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("Property name is required".to_string()));
    }
    if body.rent < 0.0 || body.deposit.is_some_and(|d| d < 0.0) {
        return Err(AppError::BadRequest("Rent and deposit must not be negative".to_string()));
    }
    if body.bedrooms < 0 || body.bathrooms < 0.0 || body.sqft < 0 {
        return Err(AppError::BadRequest("Room counts and area must not be negative".to_string()));
    }

    Ok(PropertyCreateRequest {
        deposit: body.deposit.unwrap_or(body.rent),
        status: body.status.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        amenities: dedup_amenities(body.amenities),
        name: body.name,
        address: body.address,
        city: body.city,
        state: body.state,
        zip_code: body.zip_code,
        property_type: body.property_type,
        bedrooms: body.bedrooms,
        bathrooms: body.bathrooms,
        sqft: body.sqft,
        rent: body.rent,
        images: body.images,
        tenant_id: body.tenant_id,
    })
}

pub async fn create_property(pool: &SqlitePool, body: PropertyCreateBody) -> Res<Uuid> {
    let id = db::property::insert_property(pool, resolve_property(body)?).await?;
    log::info!("Created property {}", id);
    Ok(id)
}

pub async fn delete_property(pool: &SqlitePool, property_id: Uuid) -> Res<()> {
    db::property::delete_property(pool, property_id).await?;
    log::info!("Deleted property {}", property_id);
    Ok(())
}
