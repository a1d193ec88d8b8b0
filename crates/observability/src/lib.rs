//! Tracing/logging (shared setup).

/// Environment-driven settings for the subscriber.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing/logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing/logging with explicit settings.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
