//! Report aggregator over booking and transaction history

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use serene_booking::report::{
    build_report, revenue_by_payment_method, NamedAmount, Report, StatusCount,
};
use serene_booking::Result;
use tracing::debug;

use super::project_bookings;
use crate::state::AppState;

/// Revenue summary grouped by payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub total_revenue: Decimal,
    pub by_payment_method: Vec<NamedAmount>,
}

/// Booking-count summary grouped by status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsBreakdown {
    pub total_bookings: u64,
    pub by_status: Vec<StatusCount>,
}

/// Batch, read-only aggregation over stored bookings and transactions.
pub struct ReportingService {
    state: Arc<AppState>,
}

impl ReportingService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Build the full report for an inclusive date range.
    ///
    /// Bookings and transactions are fetched independently; no join is
    /// attempted. A start after the end is not an error, just an empty
    /// result set.
    pub async fn generate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        period: &str,
    ) -> Result<Report> {
        let bookings = self.state.bookings.find_by_date_range(start, end).await?;
        let transactions = self
            .state
            .transactions
            .find_by_date_range(start, end)
            .await?;
        debug!(
            bookings = bookings.len(),
            transactions = transactions.len(),
            %start,
            %end,
            "aggregating report"
        );

        let views = project_bookings(&self.state, bookings).await?;
        Ok(build_report(period, &views, &transactions))
    }

    /// Revenue totals grouped by payment method for the range.
    pub async fn revenue_breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RevenueBreakdown> {
        let transactions = self
            .state
            .transactions
            .find_by_date_range(start, end)
            .await?;
        let total_revenue = transactions.iter().map(|t| t.amount).sum();
        Ok(RevenueBreakdown {
            total_revenue,
            by_payment_method: revenue_by_payment_method(&transactions),
        })
    }

    /// Booking counts grouped by status for the range.
    pub async fn bookings_breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BookingsBreakdown> {
        let bookings = self.state.bookings.find_by_date_range(start, end).await?;
        let mut by_status: Vec<StatusCount> = Vec::new();
        for booking in &bookings {
            let token = booking.status.as_str();
            match by_status.iter_mut().find(|s| s.name == token) {
                Some(entry) => entry.value += 1,
                None => by_status.push(StatusCount {
                    name: token.to_string(),
                    value: 1,
                }),
            }
        }
        Ok(BookingsBreakdown {
            total_bookings: bookings.len() as u64,
            by_status,
        })
    }
}
