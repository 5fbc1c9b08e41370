//! Charts module - Chart description and layout

mod plotter;

pub use plotter::{ChartData, ChartPlotter, LinePattern};
