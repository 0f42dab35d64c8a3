//! legend-rs: deterministic interactive legend synthesis for charts.
//!
//! This crate reconciles a declarative legend configuration with the live
//! state of chart series into an ordered set of symbol+label entries, wires
//! each entry to selection/highlight intents, and hands the result to a list
//! layout engine. Shape geometry, spatial arrangement beyond the built-in
//! flow layout, and application state all stay behind trait seams.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    FlowListLayout, LegendConfig, LegendEntryDeclaration, LegendScene, ListLayout, render_legend,
};
pub use error::{LegendError, LegendResult};
