//! Activation state machine and strength routing
//!
//! A session owns one [`PressureEstimator`] and decides, per tick, whether
//! the estimator runs at all: the plugin must be enabled and the host must be
//! in sculpt mode. Effective ticks write the shaped strength into the host's
//! brush settings through the [`StrengthSink`] trait.

use crate::config::PressureConfig;
use crate::estimator::PressureEstimator;
use crate::input::{PointerSample, ToolMode};

/// The host's brush/paint-settings surface
///
/// The host decides whether brush strength is a single shared ("unified")
/// setting or per-brush; the session writes whichever field that flag
/// selects, once per effective tick.
pub trait StrengthSink {
    /// Whether the host's unified-strength flag is set
    fn use_unified_strength(&self) -> bool;

    /// Write the shared strength setting
    fn set_unified_strength(&mut self, strength: f64);

    /// Write the active brush's own strength setting
    fn set_brush_strength(&mut self, strength: f64);
}

/// What a delivered tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Estimator ran and the strength was written to the sink
    Applied(f64),
    /// Session is disabled; nothing happened
    Disabled,
    /// Session is enabled but the host is not in sculpt mode; estimator
    /// state was not advanced
    OutsideSculptMode,
}

/// One enabled-session's worth of plugin state
///
/// Two states, `Disabled` and `Enabled`. Enabling resets the estimator so a
/// fresh session never averages against stale samples. Disabling is
/// idempotent and succeeds even when the host has no active brush.
#[derive(Debug, Clone, Default)]
pub struct PressureSession {
    enabled: bool,
    in_sculpt: bool,
    estimator: PressureEstimator,
}

impl PressureSession {
    pub fn new() -> Self {
        Self {
            enabled: false,
            in_sculpt: false,
            estimator: PressureEstimator::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable the session, resetting estimator state
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.estimator.reset();
        self.in_sculpt = false;
        self.enabled = true;
        tracing::info!("Pressure simulation enabled");
    }

    /// Disable the session
    ///
    /// Always succeeds; disabling an already-disabled session (or one whose
    /// host state is inconsistent) is a no-op.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        tracing::info!("Pressure simulation disabled");
    }

    /// Flip the enabled state, returning the new value
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
        self.enabled
    }

    /// Text for the panel's toggle button
    pub fn button_label(&self) -> &'static str {
        if self.enabled {
            "stop pressure simulation"
        } else {
            "start pressure simulation"
        }
    }

    /// Process one host timer tick
    ///
    /// Ticks delivered outside sculpt mode do not advance the estimator, so
    /// pointer travel in other modes never shows up as a speed sample. On
    /// re-entering sculpt mode, last-position resyncs to the current pointer
    /// and the first sample back measures zero displacement.
    pub fn tick(
        &mut self,
        sample: PointerSample,
        config: &PressureConfig,
        sink: &mut dyn StrengthSink,
    ) -> TickOutcome {
        if !self.enabled {
            return TickOutcome::Disabled;
        }

        if sample.mode != ToolMode::Sculpt {
            if self.in_sculpt {
                tracing::debug!("Left sculpt mode, pausing estimation");
            }
            self.in_sculpt = false;
            return TickOutcome::OutsideSculptMode;
        }

        if !self.in_sculpt {
            self.estimator.rebase(sample.x, sample.y);
            self.in_sculpt = true;
        }

        let strength = self.estimator.ingest(sample.x, sample.y, config);

        if sink.use_unified_strength() {
            sink.set_unified_strength(strength);
        } else {
            sink.set_brush_strength(strength);
        }

        TickOutcome::Applied(strength)
    }
}
