//! Serene Booking API - service layer over the booking core
//!
//! Wires repository-backed state to the booking lifecycle manager, the
//! guest identity resolver, and the report aggregator. Transport (HTTP
//! routing, authentication tokens) lives above this crate.

pub mod error;
pub mod models;
pub mod observability;
pub mod seed;
pub mod services;
pub mod state;

pub use state::AppState;
