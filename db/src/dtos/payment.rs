use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::payment::PaymentStatus;

pub struct PaymentCreateRequest {
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub method: Option<String>,
}
