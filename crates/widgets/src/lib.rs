pub mod chart;
pub mod gauge;
pub mod process;
pub mod stats;
pub mod status;
pub mod tooltip;

pub use chart::ChartPanel;
pub use gauge::{GaugePanel, GAUGE_SIZE, SPARKLINE_SIZE};
