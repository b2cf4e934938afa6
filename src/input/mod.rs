//! Pointer tick input delivered by the host
//!
//! The host's timer fires at a fixed nominal rate and hands the plugin the
//! current pointer position together with the active tool mode. This module
//! defines that payload; the delivery mechanism itself belongs to the host.

pub mod types;

pub use types::{PointerSample, ToolMode, TICK_RATE_HZ};
