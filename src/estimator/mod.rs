//! Pressure estimation core
//!
//! This module turns raw per-tick pointer displacement into a smoothed,
//! curve-shaped brush strength. It is the only computational content of the
//! plugin; everything else is host plumbing.

pub mod pressure;
pub mod window;

pub use pressure::PressureEstimator;
pub use window::SampleWindow;
