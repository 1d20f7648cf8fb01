use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored as-is; never derived from `due_date`/`paid_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub method: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payment row joined with the names the payments view displays.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub payment: Payment,
    pub tenant_first_name: String,
    pub tenant_last_name: String,
    pub property_name: String,
}
