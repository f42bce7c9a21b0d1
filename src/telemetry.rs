//! Tracing initialization for host shells.
//!
//! The crate itself only emits `tracing` events; whoever embeds it decides
//! where they go. This helper wires the standard fmt subscriber with
//! `RUST_LOG`-style filtering for shells that have no subscriber of their
//! own.

use tracing_subscriber::EnvFilter;

/// Initializes the fmt subscriber with env-filter support.
///
/// Safe to call more than once; later calls are no-ops if a global
/// subscriber is already installed.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
