use chrono::NaiveDate;
use db::models::payment::PaymentStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreateBody {
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
    pub method: Option<String>,
}
