//! Anomaly Plotter Main Application
//! Single window showing the anomaly chart.

use crate::charts::ChartData;
use crate::gui::ChartViewer;

/// Main application window.
pub struct AnomalyApp {
    chart_viewer: ChartViewer,
}

impl AnomalyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: ChartData) -> Self {
        Self {
            chart_viewer: ChartViewer::new(chart),
        }
    }
}

impl eframe::App for AnomalyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
