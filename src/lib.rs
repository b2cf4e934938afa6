//! Pressure Sim - strength feedback for sculpt brushes based on mouse speed.
//!
//! Emulates pressure-sensitive input on non-pressure devices: the host's
//! timer delivers pointer positions at a fixed rate, and the plugin turns
//! recent pointer speed into a smoothed, curve-shaped brush strength written
//! back into the host's paint settings. The host owns event delivery, UI,
//! and property storage; this crate owns the estimation core and the
//! activation state machine.

pub mod config;
pub mod estimator;
pub mod input;
pub mod plugin;
pub mod session;

pub use config::{ConfigError, PressureConfig};
pub use estimator::PressureEstimator;
pub use input::{PointerSample, ToolMode, TICK_RATE_HZ};
pub use plugin::PressurePlugin;
pub use session::{PressureSession, StrengthSink, TickOutcome};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for hosts that don't install their own
/// subscriber
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pressure_sim=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Pressure Sim v{}", env!("CARGO_PKG_VERSION"));
}
