//! Process-wide tracing/logging setup.

pub mod config;
pub mod subscriber;

pub use config::{LogFormat, ObservabilityConfig};
pub use subscriber::init_with;

/// Initialize tracing from the environment (`RUST_LOG`, `BRENOERP_LOG_FORMAT`).
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}
