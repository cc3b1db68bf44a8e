//! chart-host: lifecycle and tooltip-positioning engine for declarative charts.
//!
//! A `ChartHost` binds a chart-option document to a native drawing surface,
//! keeps the document current across data refreshes and pointer interaction,
//! and releases the surface's render context exactly once.

pub mod api;
pub mod core;
pub mod data_source;
pub mod error;
pub mod interaction;
pub mod presets;
pub mod render;
pub mod telemetry;

pub use api::{ChartHost, ChartHostConfig};
pub use error::{ChartError, ChartResult};
