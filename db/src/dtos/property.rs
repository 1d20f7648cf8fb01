use crate::models::property::{PropertyStatus, PropertyType};

/// Fully resolved insert; defaults have already been applied by the caller.
pub struct PropertyCreateRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
    pub rent: f64,
    pub deposit: f64,
    pub status: PropertyStatus,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub tenant_id: Option<uuid::Uuid>,
}
