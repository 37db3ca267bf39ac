//! Drawing engine for the dashboard's three surfaces.
//!
//! - [`GaugeRenderer`]: semicircular CPU gauge
//! - [`SparklineRenderer`]: compact CPU history
//! - [`ChartRenderer`]: throughput line/area chart with hover highlight
//! - [`HoverResolver`]: pointer → sample, sharing the chart's geometry
//!
//! Renderers emit a [`Scene`]; [`canvas::SceneCanvas`] puts it on screen.

pub mod canvas;
pub mod chart;
pub mod gauge;
pub mod geometry;
pub mod hover;
pub mod scene;
pub mod sparkline;

pub use chart::ChartRenderer;
pub use gauge::GaugeRenderer;
pub use geometry::{index_to_x, x_to_index, Padding, Surface};
pub use hover::{Hover, HoverResolver};
pub use scene::Scene;
pub use sparkline::SparklineRenderer;
