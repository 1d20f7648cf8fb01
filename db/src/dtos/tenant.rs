use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::tenant::TenantStatus;

pub struct TenantCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub property_id: Option<Uuid>,
    pub unit: Option<String>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub rent: Option<f64>,
    pub deposit: Option<f64>,
    pub status: TenantStatus,
    pub notes: Option<String>,
    pub avatar: Option<String>,
}
