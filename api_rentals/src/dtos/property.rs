use db::models::property::{PropertyStatus, PropertyType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCreateBody {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub sqft: i64,
    pub rent: f64,
    /// Defaults to `rent` when omitted.
    pub deposit: Option<f64>,
    pub status: Option<PropertyStatus>,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub tenant_id: Option<Uuid>,
}
