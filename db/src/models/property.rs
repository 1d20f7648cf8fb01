use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Townhouse,
    Condo,
    Loft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
    pub rent: f64,
    pub deposit: f64,
    pub status: PropertyStatus,
    pub description: String,
    pub amenities: Json<Vec<String>>,
    pub images: Json<Vec<String>>,
    pub tenant_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
