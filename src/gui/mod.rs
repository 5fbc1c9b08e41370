//! GUI module - Chart window

mod app;
mod chart_viewer;

pub use app::AnomalyApp;
pub use chart_viewer::ChartViewer;
