//! Host-boundary handle
//!
//! The host's command dispatch and timer both talk to the plugin through one
//! shared handle. Calls arrive on the host's single event loop, so the mutex
//! is uncontended by contract; it only lets the handle be cloned into the
//! host's command table and timer callback at the same time.

use crate::config::PressureConfig;
use crate::input::PointerSample;
use crate::session::{PressureSession, StrengthSink, TickOutcome};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared plugin state handed to the host on registration
#[derive(Clone, Default)]
pub struct PressurePlugin {
    session: Arc<Mutex<PressureSession>>,
}

impl PressurePlugin {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(PressureSession::new())),
        }
    }

    /// Activation command: flip enabled state, returning the new value
    pub fn toggle(&self) -> bool {
        self.session.lock().toggle()
    }

    /// Observable enabled flag for the host/UI
    pub fn is_enabled(&self) -> bool {
        self.session.lock().is_enabled()
    }

    /// Label for the panel's start/stop button
    pub fn button_label(&self) -> &'static str {
        self.session.lock().button_label()
    }

    /// Deliver one host timer tick
    pub fn tick(
        &self,
        sample: PointerSample,
        config: &PressureConfig,
        sink: &mut dyn StrengthSink,
    ) -> TickOutcome {
        self.session.lock().tick(sample, config, sink)
    }

    /// Force-disable, e.g. when the host tears the plugin down
    pub fn shutdown(&self) {
        self.session.lock().disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ToolMode;

    #[derive(Default)]
    struct NullSink;

    impl StrengthSink for NullSink {
        fn use_unified_strength(&self) -> bool {
            false
        }
        fn set_unified_strength(&mut self, _strength: f64) {}
        fn set_brush_strength(&mut self, _strength: f64) {}
    }

    #[test]
    fn test_clones_share_one_session() {
        let plugin = PressurePlugin::new();
        let timer_handle = plugin.clone();

        assert!(plugin.toggle());
        assert!(timer_handle.is_enabled());

        timer_handle.shutdown();
        assert!(!plugin.is_enabled());
    }

    #[test]
    fn test_tick_through_handle() {
        let plugin = PressurePlugin::new();
        plugin.toggle();

        let sample = PointerSample {
            x: 1.0,
            y: 2.0,
            mode: ToolMode::Sculpt,
        };
        let outcome = plugin.tick(sample, &PressureConfig::default(), &mut NullSink);
        assert!(matches!(outcome, TickOutcome::Applied(_)));
    }
}
