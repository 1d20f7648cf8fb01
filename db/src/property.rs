use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite, types::Json};
use uuid::Uuid;

use crate::{dtos::property::PropertyCreateRequest, models::property::Property};

/// All properties, newest first.
pub async fn get_properties<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<Property>> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at DESC, rowid DESC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_property_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    property_id: Uuid,
) -> Res<Option<Property>> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
        .bind(property_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_property<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: PropertyCreateRequest,
) -> Res<Uuid> {
    let id = Uuid::new_v4();
    let now = Utc::now().naive_utc();
    sqlx::query(
        r#"
        INSERT INTO properties (id, name, address, city, state, zip_code, type, bedrooms, bathrooms,
            sqft, rent, deposit, status, description, amenities, images, tenant_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $18)
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.zip_code)
    .bind(data.property_type)
    .bind(data.bedrooms)
    .bind(data.bathrooms)
    .bind(data.sqft)
    .bind(data.rent)
    .bind(data.deposit)
    .bind(data.status)
    .bind(&data.description)
    .bind(Json(&data.amenities))
    .bind(Json(&data.images))
    .bind(data.tenant_id)
    .bind(now)
    .execute(executor)
    .await
    .map_err(|e| AppError::from_constraint(e, "property"))?;

    Ok(id)
}

/// Deletes the property. Tenants pointing at it keep their row with a null
/// `property_id`; its payments are removed by the cascade.
pub async fn delete_property<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    property_id: Uuid,
) -> Res<()> {
    let result = sqlx::query("DELETE FROM properties WHERE id = $1")
        .bind(property_id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("property {}", property_id)));
    }
    Ok(())
}
