//! Report aggregation pipeline
//!
//! Pure functions over booking views and transaction records. Fetching the
//! records for a date range is the service layer's job; everything here is
//! deterministic grouping and summation with no I/O.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::booking::{BookingStatus, BookingView};
use crate::transaction::Transaction;

/// A named monetary total, e.g. revenue attributed to one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub name: String,
    pub value: Decimal,
}

/// A named count, e.g. bookings holding one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub name: String,
    pub value: u64,
}

/// Revenue for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

/// A retention cohort share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionBucket {
    pub name: String,
    pub value: u64,
}

/// Computed summary over a date range. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Caller-supplied label, not computed.
    pub period: String,
    pub total_revenue: Decimal,
    pub total_bookings: u64,
    pub completed_bookings: u64,
    pub cancelled_bookings: u64,
    /// Completed share of all bookings in range, as a percentage.
    pub completion_rate: f64,
    pub revenue_by_service: Vec<NamedAmount>,
    pub bookings_by_status: Vec<StatusCount>,
    pub daily_revenue: Vec<DailyRevenue>,
    pub customer_retention: Vec<RetentionBucket>,
}

/// Aggregate bookings and transactions into a report.
///
/// `revenue_by_service` attributes each booking's service *list price* to
/// that service regardless of booking status or any matching transaction;
/// bookings whose service reference no longer resolves are skipped there.
/// `total_revenue` and `daily_revenue` come from the transaction records
/// alone. The two inputs are independent; no join is attempted.
pub fn build_report(period: &str, bookings: &[BookingView], transactions: &[Transaction]) -> Report {
    let total_revenue: Decimal = transactions.iter().map(|t| t.amount).sum();

    let total_bookings = bookings.len() as u64;
    let completed_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count() as u64;
    let cancelled_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Cancelled)
        .count() as u64;

    let completion_rate = if total_bookings > 0 {
        completed_bookings as f64 / total_bookings as f64 * 100.0
    } else {
        0.0
    };

    let mut service_revenue: HashMap<String, Decimal> = HashMap::new();
    for booking in bookings {
        if let (Some(name), Some(price)) = (&booking.service_name, booking.service_price) {
            *service_revenue.entry(name.clone()).or_insert(Decimal::ZERO) += price;
        }
    }
    let revenue_by_service = service_revenue
        .into_iter()
        .map(|(name, value)| NamedAmount { name, value })
        .collect();

    let mut status_count: HashMap<BookingStatus, u64> = HashMap::new();
    for booking in bookings {
        *status_count.entry(booking.status).or_insert(0) += 1;
    }
    let bookings_by_status = status_count
        .into_iter()
        .map(|(status, value)| StatusCount {
            name: status.as_str().to_string(),
            value,
        })
        .collect();

    Report {
        period: period.to_string(),
        total_revenue,
        total_bookings,
        completed_bookings,
        cancelled_bookings,
        completion_rate,
        revenue_by_service,
        bookings_by_status,
        daily_revenue: daily_revenue(transactions),
        customer_retention: retention_breakdown(),
    }
}

/// Transactions grouped by calendar day, sorted ascending by date.
pub fn daily_revenue(transactions: &[Transaction]) -> Vec<DailyRevenue> {
    let mut per_day: HashMap<NaiveDate, Decimal> = HashMap::new();
    for transaction in transactions {
        *per_day.entry(transaction.date).or_insert(Decimal::ZERO) += transaction.amount;
    }
    let mut days: Vec<DailyRevenue> = per_day
        .into_iter()
        .map(|(date, revenue)| DailyRevenue { date, revenue })
        .collect();
    days.sort_by_key(|d| d.date);
    days
}

/// Transactions grouped by payment method.
pub fn revenue_by_payment_method(transactions: &[Transaction]) -> Vec<NamedAmount> {
    let mut per_method: HashMap<String, Decimal> = HashMap::new();
    for transaction in transactions {
        *per_method
            .entry(transaction.payment_method.clone())
            .or_insert(Decimal::ZERO) += transaction.amount;
    }
    per_method
        .into_iter()
        .map(|(name, value)| NamedAmount { name, value })
        .collect()
}

/// Fixed retention cohort shares.
///
/// Placeholder values, deliberately isolated from the data-driven pipeline
/// above so a real cohort computation can replace this function without
/// touching the rest of the aggregator.
pub fn retention_breakdown() -> Vec<RetentionBucket> {
    vec![
        RetentionBucket {
            name: "Returning".to_string(),
            value: 65,
        },
        RetentionBucket {
            name: "New".to_string(),
            value: 35,
        },
    ]
}
