//! Anomaly Plotter - Ocean Temperature Anomaly Chart Viewer
//!
//! Reads `output.csv` and shows historical and forecasted anomalies in one chart.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;

use anyhow::{anyhow, Context};
use eframe::egui;
use gui::AnomalyApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let chart = pipeline::build_chart(config::INPUT_PATH)
        .with_context(|| format!("Cannot plot {}", config::INPUT_PATH))?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE)
            .with_title(config::CHART_TITLE),
        ..Default::default()
    };

    // Blocks until the window is closed
    eframe::run_native(
        config::CHART_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AnomalyApp::new(cc, chart)))),
    )
    .map_err(|e| anyhow!("Failed to open chart window: {e}"))
}
