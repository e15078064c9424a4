//! Booking service implementations

pub mod booking;
pub mod identity;
pub mod reporting;

#[cfg(test)]
pub mod reporting_test;

use std::sync::Arc;

use serene_booking::booking::{Booking, BookingView};
use serene_booking::Result;

use crate::state::AppState;

/// Read-time join producing the flattened booking view.
///
/// Denormalized fields are resolved fresh on every call and never written
/// back; a reference that no longer resolves leaves its fields empty so a
/// listing survives a deleted service or specialist.
pub(crate) async fn project_booking(state: &Arc<AppState>, booking: Booking) -> Result<BookingView> {
    let customer = state.customers.get(booking.customer_id).await?;
    let service = state.catalog.service(booking.service_id).await?;
    let specialist = state.catalog.specialist(booking.specialist_id).await?;

    Ok(BookingView {
        id: booking.id,
        customer_id: booking.customer_id,
        customer_name: customer.as_ref().map(|c| c.full_name.clone()),
        customer_email: customer.as_ref().map(|c| c.email.clone()),
        customer_phone: customer.and_then(|c| c.phone),
        service_id: booking.service_id,
        service_name: service.as_ref().map(|s| s.name.clone()),
        service_price: service.map(|s| s.price),
        specialist_id: booking.specialist_id,
        specialist_name: specialist.map(|s| s.display_name),
        date: booking.date,
        time: booking.time,
        status: booking.status,
        note: booking.note,
        created_at: booking.created_at,
        updated_at: booking.updated_at,
    })
}

pub(crate) async fn project_bookings(
    state: &Arc<AppState>,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingView>> {
    let mut views = Vec::with_capacity(bookings.len());
    for booking in bookings {
        views.push(project_booking(state, booking).await?);
    }
    Ok(views)
}
