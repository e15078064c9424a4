//! Financial transaction records used by report aggregation

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Refunded => "REFUNDED",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(TransactionStatus::Pending),
            "COMPLETED" => Ok(TransactionStatus::Completed),
            "FAILED" => Ok(TransactionStatus::Failed),
            "REFUNDED" => Ok(TransactionStatus::Refunded),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid transaction status: {}",
                s
            ))),
        }
    }
}

/// A payment record, optionally linked to a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub booking_id: Option<Uuid>,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    pub reference_number: Option<String>,
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(amount: Decimal, payment_method: &str, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id: None,
            amount,
            payment_method: payment_method.to_string(),
            status: TransactionStatus::Pending,
            date,
            reference_number: None,
            note: None,
        }
    }

    pub fn for_booking(mut self, booking_id: Uuid) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }
}
