//! Speed-to-pressure estimation
//!
//! Converts per-tick pointer displacement into a brush strength value:
//! windowed moving average of displacement magnitudes, normalized by the
//! attenuation divisor, shifted, floored at zero, shaped by a power curve,
//! and clamped into the configured output range.

use crate::config::PressureConfig;
use crate::estimator::window::SampleWindow;

/// Per-session estimator state
///
/// Created on activation and thrown away on deactivation. Holds no reference
/// to host state; the config is passed in fresh on every tick.
#[derive(Debug, Clone, Default)]
pub struct PressureEstimator {
    window: SampleWindow,
    last_pos: Option<(f64, f64)>,
    last_sample_count: Option<usize>,
}

impl PressureEstimator {
    pub fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            last_pos: None,
            last_sample_count: None,
        }
    }

    /// Clear the window and position tracking
    ///
    /// Called on activation so a new session never averages against samples
    /// from a previous one.
    pub fn reset(&mut self) {
        self.window.clear();
        self.last_pos = None;
        self.last_sample_count = None;
    }

    /// Resync position tracking without ingesting a sample
    ///
    /// Used when the pointer was out of the estimator's sight (e.g. the user
    /// left sculpt mode): the next [`ingest`](Self::ingest) then measures a
    /// zero displacement instead of the whole distance traveled while away.
    pub fn rebase(&mut self, x: f64, y: f64) {
        self.last_pos = Some((x, y));
    }

    /// Ingest one pointer position and return the shaped strength
    ///
    /// The first tick after a reset measures a zero displacement (last
    /// position is taken to be the current position). Changing
    /// `config.sample_count` between ticks clears the window before the new
    /// sample is appended, so samples from different averaging horizons never
    /// mix.
    ///
    /// Division-by-zero policy: `attenuation == 0` is rejected by
    /// [`PressureConfig::validate`], but if an unvalidated config reaches
    /// this method, IEEE semantics apply — a moving pointer produces `+inf`
    /// which the clamp saturates at `max_output`, and a stationary one
    /// produces NaN which the zero floor turns into `min_output`.
    pub fn ingest(&mut self, x: f64, y: f64, config: &PressureConfig) -> f64 {
        if self.last_sample_count != Some(config.sample_count) {
            self.window.clear();
        }

        let (last_x, last_y) = self.last_pos.unwrap_or((x, y));
        let dx = x - last_x;
        let dy = y - last_y;
        let magnitude = (dx * dx + dy * dy).sqrt();

        self.window.push(magnitude, config.sample_count);
        let average = self.window.mean();

        let mut mix = (average / config.attenuation - config.subtract).max(0.0);
        mix = mix.powf(config.falloff);
        // min-then-max order so an inverted range degrades to min_output
        // instead of panicking like f64::clamp would
        mix = mix.min(config.max_output).max(config.min_output);

        self.last_pos = Some((x, y));
        self.last_sample_count = Some(config.sample_count);

        mix
    }

    /// Number of samples currently held in the window
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(update: impl FnOnce(&mut PressureConfig)) -> PressureConfig {
        let mut config = PressureConfig::default();
        update(&mut config);
        config
    }

    /// Unity config: output equals the windowed average, unclamped below 1
    fn passthrough_config() -> PressureConfig {
        config_with(|c| {
            c.sample_count = 1;
            c.attenuation = 1.0;
            c.subtract = 0.0;
            c.falloff = 1.0;
            c.min_output = 0.0;
            c.max_output = 1.0;
        })
    }

    #[test]
    fn test_first_tick_measures_zero_displacement() {
        let mut estimator = PressureEstimator::new();
        let strength = estimator.ingest(500.0, 300.0, &passthrough_config());
        assert_eq!(strength, 0.0);
    }

    #[test]
    fn test_output_always_within_configured_range() {
        let config = PressureConfig::default();
        let mut estimator = PressureEstimator::new();

        // Erratic path with tiny and huge jumps
        let path = [
            (0.0, 0.0),
            (0.1, 0.0),
            (5000.0, 5000.0),
            (5000.0, 5000.0),
            (-300.0, 200.0),
            (0.0, 0.0),
        ];
        for (x, y) in path {
            let strength = estimator.ingest(x, y, &config);
            assert!(
                strength >= config.min_output && strength <= config.max_output,
                "strength {} escaped [{}, {}]",
                strength,
                config.min_output,
                config.max_output
            );
        }
    }

    #[test]
    fn test_stationary_pointer_settles_at_min_output() {
        let config = PressureConfig::default();
        let mut estimator = PressureEstimator::new();

        // Same position every tick: every sample is 0, so the pre-clamp mix
        // is 0 and the floor lifts it to min_output (0.1 by default)
        let mut strength = 0.0;
        for _ in 0..40 {
            strength = estimator.ingest(800.0, 600.0, &config);
        }
        assert!((strength - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_sample_count_change_clears_window() {
        let mut config = passthrough_config();
        config.sample_count = 30;
        config.max_output = f64::INFINITY;

        let mut estimator = PressureEstimator::new();

        // Five large-magnitude samples (dx = 100 each tick)
        for i in 0..=5 {
            estimator.ingest(i as f64 * 100.0, 0.0, &config);
        }
        assert!(estimator.window_len() > 2);

        // Shrinking the horizon must discard the stale samples: the next
        // tick's average reflects only the one post-change sample
        config.sample_count = 2;
        let strength = estimator.ingest(510.0, 0.0, &config);
        assert_eq!(estimator.window_len(), 1);
        assert!((strength - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_eviction_matches_fifo_horizon() {
        let mut config = passthrough_config();
        config.sample_count = 3;
        config.max_output = f64::INFINITY;

        let mut estimator = PressureEstimator::new();

        // Horizontal moves with magnitudes 10, 20, 30, 40
        let mut x = 0.0;
        estimator.ingest(x, 0.0, &config);
        // first real window after this is [0]; feed the four magnitudes
        let mut last = 0.0;
        for step in [10.0, 20.0, 30.0, 40.0] {
            x += step;
            last = estimator.ingest(x, 0.0, &config);
        }

        // Window holds [20, 30, 40] when the 4th average is taken
        assert!((last - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_falloff_monotonicity_below_one() {
        // Fixed displacement giving a pre-power mix of 0.25
        let base = config_with(|c| {
            c.sample_count = 1;
            c.attenuation = 4.0;
            c.subtract = 0.0;
            c.min_output = 0.0;
            c.max_output = 1.0;
        });

        let strength_at = |falloff: f64| {
            let mut config = base.clone();
            config.falloff = falloff;
            let mut estimator = PressureEstimator::new();
            estimator.ingest(0.0, 0.0, &config);
            estimator.ingest(1.0, 0.0, &config)
        };

        // For mix in (0, 1), shrinking the exponent raises the output
        let mut previous = 0.0;
        for falloff in [5.0, 2.0, 1.0, 0.5, 0.1] {
            let strength = strength_at(falloff);
            assert!(
                strength >= previous,
                "strength {} at falloff {} should not drop below {}",
                strength,
                falloff,
                previous
            );
            previous = strength;
        }
    }

    #[test]
    fn test_fast_move_saturates_at_max_output() {
        let config = passthrough_config();
        let mut estimator = PressureEstimator::new();

        estimator.ingest(0.0, 0.0, &config);
        // (0,0) -> (3,4): magnitude 5, mix 5, clamped to max_output = 1
        let strength = estimator.ingest(3.0, 4.0, &config);
        assert_eq!(strength, 1.0);
    }

    #[test]
    fn test_zero_attenuation_saturates_for_moving_pointer() {
        let config = config_with(|c| c.attenuation = 0.0);
        let mut estimator = PressureEstimator::new();

        estimator.ingest(0.0, 0.0, &config);
        let strength = estimator.ingest(50.0, 50.0, &config);
        assert_eq!(strength, config.max_output);
    }

    #[test]
    fn test_zero_attenuation_stationary_floors_at_min_output() {
        let config = config_with(|c| c.attenuation = 0.0);
        let mut estimator = PressureEstimator::new();

        // 0/0 is NaN; the zero floor absorbs it and the clamp yields min
        let strength = estimator.ingest(10.0, 10.0, &config);
        assert_eq!(strength, config.min_output);
    }

    #[test]
    fn test_rebase_suppresses_travel_delta() {
        let config = passthrough_config();
        let mut estimator = PressureEstimator::new();

        estimator.ingest(0.0, 0.0, &config);
        estimator.rebase(900.0, 900.0);
        let strength = estimator.ingest(900.0, 900.0, &config);
        assert_eq!(strength, 0.0);
    }

    #[test]
    fn test_reset_forgets_position_and_samples() {
        let config = passthrough_config();
        let mut estimator = PressureEstimator::new();

        estimator.ingest(0.0, 0.0, &config);
        estimator.ingest(100.0, 0.0, &config);
        estimator.reset();

        assert_eq!(estimator.window_len(), 0);
        // Post-reset first tick is a zero-displacement sample again
        let strength = estimator.ingest(400.0, 400.0, &config);
        assert_eq!(strength, 0.0);
    }

    #[test]
    fn test_deterministic_for_fixed_input_sequence() {
        let config = PressureConfig::default();
        let path: Vec<(f64, f64)> = (0..50).map(|i| (i as f64 * 7.0, i as f64 * 3.0)).collect();

        let run = || {
            let mut estimator = PressureEstimator::new();
            path.iter()
                .map(|&(x, y)| estimator.ingest(x, y, &config))
                .collect::<Vec<f64>>()
        };

        assert_eq!(run(), run());
    }
}
