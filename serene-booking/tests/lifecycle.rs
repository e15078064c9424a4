//! Tests for the booking lifecycle through the public API

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serene_booking::booking::{Booking, BookingStatus, BookingView};
use serene_booking::report::build_report;
use serene_booking::transaction::{Transaction, TransactionStatus};
use uuid::Uuid;

fn view_of(booking: &Booking, service: &str, price: i64) -> BookingView {
    BookingView {
        id: booking.id,
        customer_id: booking.customer_id,
        customer_name: Some("Regular User".to_string()),
        customer_email: Some("user@example.com".to_string()),
        customer_phone: Some("0987654321".to_string()),
        service_id: booking.service_id,
        service_name: Some(service.to_string()),
        service_price: Some(Decimal::from(price)),
        specialist_id: booking.specialist_id,
        specialist_name: Some("Staff Member".to_string()),
        date: booking.date,
        time: booking.time,
        status: booking.status,
        note: booking.note.clone(),
        created_at: booking.created_at,
        updated_at: booking.updated_at,
    }
}

#[test]
fn booking_flows_from_pending_to_completed_report() {
    let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    let time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();

    let mut booking = Booking::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        date,
        time,
        Some("First time trying this service".to_string()),
    );
    assert_eq!(booking.status, BookingStatus::Pending);

    booking.transition(BookingStatus::Confirmed);
    booking.transition(BookingStatus::Completed);

    let payment = Transaction::new(Decimal::from(70), "cash", date)
        .for_booking(booking.id)
        .with_status(TransactionStatus::Completed);

    let views = vec![view_of(&booking, "Swedish Massage", 70)];
    let report = build_report("April week 1", &views, &[payment]);

    assert_eq!(report.total_bookings, 1);
    assert_eq!(report.completed_bookings, 1);
    assert_eq!(report.total_revenue, Decimal::from(70));
    assert_eq!(report.completion_rate, 100.0);
    assert_eq!(report.daily_revenue.len(), 1);
    assert_eq!(report.daily_revenue[0].revenue, Decimal::from(70));
}

#[test]
fn cancellation_is_a_terminal_status_not_a_removal() {
    let mut booking = Booking::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        None,
    );
    booking.transition(BookingStatus::Cancelled);
    assert!(booking.status.is_terminal());

    // Re-cancelling stays at the same terminal state.
    booking.transition(BookingStatus::Cancelled);
    assert_eq!(booking.status, BookingStatus::Cancelled);
}
