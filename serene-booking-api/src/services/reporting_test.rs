//! Tests for the report aggregator

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use serene_booking::catalog::{Service, Specialist};
    use serene_booking::customer::{Customer, Role};
    use serene_booking::transaction::{Transaction, TransactionStatus};
    use uuid::Uuid;

    use crate::services::booking::{BookingService, CreateBookingRequest};
    use crate::services::reporting::ReportingService;
    use crate::state::AppState;

    struct Fixture {
        state: Arc<AppState>,
        bookings: BookingService,
        reports: ReportingService,
        customer_id: Uuid,
        specialist_id: Uuid,
    }

    async fn setup() -> Fixture {
        let state = Arc::new(AppState::new());
        let customer = Customer::registered(
            "user@example.com".to_string(),
            "$2b$12$test".to_string(),
            "user@example.com".to_string(),
            "Regular User".to_string(),
            None,
            Role::Customer,
        );
        state.customers.create(&customer).await.unwrap();
        let specialist = Specialist::new("Staff Member");
        state.catalog.add_specialist(&specialist).await.unwrap();

        Fixture {
            bookings: BookingService::new(state.clone()),
            reports: ReportingService::new(state.clone()),
            state,
            customer_id: customer.id,
            specialist_id: specialist.id,
        }
    }

    async fn book(f: &Fixture, service_id: Uuid, date: NaiveDate, status: &str) {
        let view = f
            .bookings
            .create(CreateBookingRequest {
                customer_id: f.customer_id,
                service_id,
                specialist_id: f.specialist_id,
                date,
                time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                note: None,
                status: None,
            })
            .await
            .unwrap();
        if status != "PENDING" {
            f.bookings.set_status(view.id, status).await.unwrap();
        }
    }

    #[tokio::test]
    async fn report_over_mixed_bookings_and_transactions() {
        let f = setup().await;
        let d1 = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();

        let a = Service::new("A", Decimal::from(50));
        let b = Service::new("B", Decimal::from(80));
        f.state.catalog.add_service(&a).await.unwrap();
        f.state.catalog.add_service(&b).await.unwrap();

        book(&f, a.id, d1, "COMPLETED").await;
        book(&f, a.id, d1, "CANCELLED").await;
        book(&f, b.id, d1, "COMPLETED").await;

        for amount in [50, 80] {
            let paid = Transaction::new(Decimal::from(amount), "cash", d1)
                .with_status(TransactionStatus::Completed);
            f.state.transactions.create(&paid).await.unwrap();
        }

        let report = f.reports.generate(d1, d1, "July week 2").await.unwrap();

        assert_eq!(report.period, "July week 2");
        assert_eq!(report.total_revenue, Decimal::from(130));
        assert_eq!(report.total_bookings, 3);
        assert_eq!(report.completed_bookings, 2);
        assert_eq!(report.cancelled_bookings, 1);
        assert!((report.completion_rate - 66.6666).abs() < 0.01);

        let revenue_a = report
            .revenue_by_service
            .iter()
            .find(|s| s.name == "A")
            .unwrap();
        assert_eq!(revenue_a.value, Decimal::from(100));
        let revenue_b = report
            .revenue_by_service
            .iter()
            .find(|s| s.name == "B")
            .unwrap();
        assert_eq!(revenue_b.value, Decimal::from(80));

        let cancelled = report
            .bookings_by_status
            .iter()
            .find(|s| s.name == "CANCELLED")
            .unwrap();
        assert_eq!(cancelled.value, 1);

        assert_eq!(report.daily_revenue.len(), 1);
        assert_eq!(report.daily_revenue[0].date, d1);
        assert_eq!(report.daily_revenue[0].revenue, Decimal::from(130));

        assert_eq!(report.customer_retention[0].name, "Returning");
        assert_eq!(report.customer_retention[0].value, 65);
        assert_eq!(report.customer_retention[1].name, "New");
        assert_eq!(report.customer_retention[1].value, 35);
    }

    #[tokio::test]
    async fn empty_range_produces_a_zeroed_report() {
        let f = setup().await;
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        let report = f.reports.generate(start, end, "January").await.unwrap();
        assert_eq!(report.total_bookings, 0);
        assert_eq!(report.completion_rate, 0.0);
        assert_eq!(report.total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn inverted_range_is_empty_not_an_error() {
        let f = setup().await;
        let report = f
            .reports
            .generate(
                NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                "Backwards",
            )
            .await
            .unwrap();
        assert_eq!(report.total_bookings, 0);
        assert_eq!(report.total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn revenue_breakdown_groups_by_payment_method() {
        let f = setup().await;
        let d1 = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();

        for (amount, method) in [(50, "cash"), (80, "card"), (20, "cash")] {
            let paid = Transaction::new(Decimal::from(amount), method, d1)
                .with_status(TransactionStatus::Completed);
            f.state.transactions.create(&paid).await.unwrap();
        }

        let breakdown = f.reports.revenue_breakdown(d1, d1).await.unwrap();
        assert_eq!(breakdown.total_revenue, Decimal::from(150));
        let cash = breakdown
            .by_payment_method
            .iter()
            .find(|m| m.name == "cash")
            .unwrap();
        assert_eq!(cash.value, Decimal::from(70));
    }

    #[tokio::test]
    async fn bookings_breakdown_counts_per_status() {
        let f = setup().await;
        let d1 = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
        let facial = Service::new("Basic Facial", Decimal::from(50));
        f.state.catalog.add_service(&facial).await.unwrap();

        book(&f, facial.id, d1, "PENDING").await;
        book(&f, facial.id, d1, "CONFIRMED").await;
        book(&f, facial.id, d1, "CONFIRMED").await;

        let breakdown = f.reports.bookings_breakdown(d1, d1).await.unwrap();
        assert_eq!(breakdown.total_bookings, 3);
        let confirmed = breakdown
            .by_status
            .iter()
            .find(|s| s.name == "CONFIRMED")
            .unwrap();
        assert_eq!(confirmed.value, 2);
    }
}
