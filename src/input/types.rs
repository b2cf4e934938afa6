use serde::{Deserialize, Serialize};

/// Nominal rate of the host timer driving the estimator, in ticks per second
pub const TICK_RATE_HZ: f64 = 60.0;

/// The host's active tool mode at the moment a tick was delivered
///
/// Only [`ToolMode::Sculpt`] ticks advance the estimator; everything else is
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolMode {
    Sculpt,
    Object,
    Edit,
    Paint,
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolMode::Sculpt => write!(f, "sculpt"),
            ToolMode::Object => write!(f, "object"),
            ToolMode::Edit => write!(f, "edit"),
            ToolMode::Paint => write!(f, "paint"),
        }
    }
}

/// One timer tick's pointer reading, in screen-space units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub mode: ToolMode,
}

impl PointerSample {
    pub fn sculpt(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            mode: ToolMode::Sculpt,
        }
    }
}
