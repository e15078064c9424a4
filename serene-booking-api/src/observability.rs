//! Tracing setup for the booking services

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from `RUST_LOG`, defaulting to
/// `info`. Later calls are no-ops, so embedding applications and tests can
/// both call this freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
