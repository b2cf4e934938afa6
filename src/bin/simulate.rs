//! Headless host simulator
//!
//! Drives the plugin the way the host's timer would, over a synthetic
//! pointer path: a slow drag, a fast stroke, and a stationary hold. Useful
//! for eyeballing how a config shapes the strength curve without loading the
//! plugin into the host.
//!
//! Usage: `simulate [config.json]`

use anyhow::Context;
use pressure_sim::{PointerSample, PressureConfig, PressurePlugin, StrengthSink, TickOutcome};

/// Stand-in for the host's paint settings
#[derive(Debug, Default)]
struct LoggingBrushSettings {
    strength: f64,
}

impl StrengthSink for LoggingBrushSettings {
    fn use_unified_strength(&self) -> bool {
        false
    }

    fn set_unified_strength(&mut self, strength: f64) {
        self.strength = strength;
    }

    fn set_brush_strength(&mut self, strength: f64) {
        self.strength = strength;
    }
}

fn load_config() -> anyhow::Result<PressureConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path))?
        }
        None => PressureConfig::default(),
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// One stretch of synthetic pointer movement
struct Phase {
    name: &'static str,
    ticks: usize,
    step: (f64, f64),
}

fn main() -> anyhow::Result<()> {
    pressure_sim::init_tracing();

    let config = load_config()?;
    tracing::info!(
        "Simulating with sampleCount={}, attenuation={}, falloff={}",
        config.sample_count,
        config.attenuation,
        config.falloff
    );

    let plugin = PressurePlugin::new();
    plugin.toggle();

    let mut sink = LoggingBrushSettings::default();
    let mut x = 0.0;
    let mut y = 0.0;

    let phases = [
        Phase {
            name: "slow drag",
            ticks: 120,
            step: (2.0, 1.0),
        },
        Phase {
            name: "fast stroke",
            ticks: 60,
            step: (25.0, 18.0),
        },
        Phase {
            name: "hold still",
            ticks: 60,
            step: (0.0, 0.0),
        },
    ];

    for phase in &phases {
        let mut min_strength = f64::INFINITY;
        let mut max_strength = f64::NEG_INFINITY;

        for _ in 0..phase.ticks {
            x += phase.step.0;
            y += phase.step.1;

            match plugin.tick(PointerSample::sculpt(x, y), &config, &mut sink) {
                TickOutcome::Applied(strength) => {
                    min_strength = min_strength.min(strength);
                    max_strength = max_strength.max(strength);
                }
                outcome => anyhow::bail!("unexpected tick outcome {:?}", outcome),
            }
        }

        tracing::info!(
            "{}: {} ticks, strength {:.3}..{:.3}, settled at {:.3}",
            phase.name,
            phase.ticks,
            min_strength,
            max_strength,
            sink.strength
        );
    }

    plugin.shutdown();
    Ok(())
}
