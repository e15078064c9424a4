//! Demo data seeding for local validation

use serene_booking::catalog::{Service, Specialist};
use serene_booking::customer::{Customer, Role};
use serene_booking::Result;
use rust_decimal::Decimal;
use tracing::info;

use crate::state::AppState;

/// Load a small demo catalog and staff roster into the repositories.
///
/// Mirrors the shape of a real spa: a handful of services with list prices
/// and durations, specialists with free-text availability windows, and an
/// admin plus one registered customer.
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let services = [
        Service::new("Basic Facial", Decimal::from(50))
            .with_description("A gentle cleansing facial suitable for all skin types")
            .with_duration(30),
        Service::new("Deluxe Facial", Decimal::from(80))
            .with_description("Advanced facial with anti-aging and deep cleansing benefits")
            .with_duration(60),
        Service::new("Swedish Massage", Decimal::from(70))
            .with_description("Classic relaxation massage to reduce tension")
            .with_duration(60),
        Service::new("Deep Tissue Massage", Decimal::from(90))
            .with_description("Intense massage focusing on relieving chronic muscle tension")
            .with_duration(60),
        Service::new("Detox Body Wrap", Decimal::from(120))
            .with_description("Full body detoxifying treatment")
            .with_duration(90),
    ];
    for service in &services {
        state.catalog.add_service(service).await?;
    }

    let weekdays = vec![
        "Monday: 9:00-17:00".to_string(),
        "Tuesday: 9:00-17:00".to_string(),
        "Wednesday: 9:00-17:00".to_string(),
        "Thursday: 9:00-17:00".to_string(),
        "Friday: 9:00-17:00".to_string(),
    ];
    let specialists = [
        Specialist::new("Staff Member")
            .with_title("Senior Therapist")
            .with_availability(weekdays),
        Specialist::new("Specialist 1")
            .with_title("Therapist")
            .with_availability(vec![
                "Monday: 9:00-17:00".to_string(),
                "Wednesday: 9:00-17:00".to_string(),
                "Friday: 9:00-17:00".to_string(),
            ]),
        Specialist::new("Specialist 2").with_title("Therapist"),
    ];
    for specialist in &specialists {
        state.catalog.add_specialist(specialist).await?;
    }

    let admin = Customer::registered(
        "admin@example.com".to_string(),
        serene_booking::customer::hash_password("admin123")?,
        "admin@example.com".to_string(),
        "Admin User".to_string(),
        Some("0123456789".to_string()),
        Role::Admin,
    );
    state.customers.create(&admin).await?;

    let customer = Customer::registered(
        "user@example.com".to_string(),
        serene_booking::customer::hash_password("user123")?,
        "user@example.com".to_string(),
        "Regular User".to_string(),
        Some("0987654321".to_string()),
        Role::Customer,
    );
    state.customers.create(&customer).await?;

    info!(
        services = services.len(),
        specialists = specialists.len(),
        "seeded demo data"
    );
    Ok(())
}
