//! Chart Plotter Module
//! Turns partitioned anomaly records into a chart description for the viewer.

use crate::config::{
    BASELINE_LABEL, BASELINE_VALUE, CHART_TITLE, COMBINED_LABEL, FORECAST_LABEL,
    X_AXIS_LABEL, X_LABEL_ROTATION_DEG, Y_AXIS_LABEL, Y_TICK_COUNT,
};
use crate::data::Partition;
use egui::Color32;

pub const COMBINED_COLOR: Color32 = Color32::BLUE;
pub const FORECAST_COLOR: Color32 = Color32::RED;
pub const BASELINE_COLOR: Color32 = Color32::BLACK;

/// Line dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
}

/// A single plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub label: &'static str,
    /// `[year, anomaly]` pairs, drawn in this order
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub pattern: LinePattern,
    pub markers: bool,
}

/// Horizontal reference line
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub value: f64,
    pub label: &'static str,
    pub color: Color32,
    pub pattern: LinePattern,
}

/// Everything the viewer needs to draw the anomaly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Drawn in order, later series on top
    pub series: Vec<SeriesData>,
    pub baseline: Baseline,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_label_rotation_deg: f32,
    pub show_grid: bool,
}

/// Builds the anomaly chart description.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Build the chart for a partition. Returns `None` when there is nothing
    /// to plot, since the y ticks have no range to span.
    pub fn build(partition: &Partition) -> Option<ChartData> {
        if partition.is_empty() {
            return None;
        }

        let years = partition.combined_years();
        let anomalies = partition.combined_anomalies();
        let (y_min, y_max) = Self::value_range(&anomalies)?;
        let (x_min, x_max) = Self::value_range(&years)?;

        let mut series = vec![SeriesData {
            label: COMBINED_LABEL,
            points: years
                .iter()
                .zip(anomalies.iter())
                .map(|(&x, &y)| [x, y])
                .collect(),
            color: COMBINED_COLOR,
            pattern: LinePattern::Solid,
            markers: true,
        }];

        if !partition.forecasted.is_empty() {
            series.push(SeriesData {
                label: FORECAST_LABEL,
                points: partition
                    .forecasted
                    .iter()
                    .map(|r| [r.year, r.anomaly])
                    .collect(),
                color: FORECAST_COLOR,
                pattern: LinePattern::Dashed,
                markers: false,
            });
        }

        Some(ChartData {
            title: CHART_TITLE,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            series,
            baseline: Baseline {
                value: BASELINE_VALUE,
                label: BASELINE_LABEL,
                color: BASELINE_COLOR,
                pattern: LinePattern::Dashed,
            },
            x_ticks: Self::year_ticks(x_min, x_max, 10),
            y_ticks: Self::linspace(y_min, y_max, Y_TICK_COUNT),
            x_label_rotation_deg: X_LABEL_ROTATION_DEG,
            show_grid: true,
        })
    }

    /// `count` evenly spaced values from `start` to `end`, both included.
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            end
                        } else {
                            start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

    /// Round-numbered year ticks covering `[min, max]`, at most
    /// `2 * target_steps + 1` of them.
    pub fn year_ticks(min: f64, max: f64, target_steps: usize) -> Vec<f64> {
        let range = max - min;
        if range <= 0.0 {
            return vec![min];
        }

        let step = Self::nice_step(range, target_steps).max(1.0);
        let first = (min / step).ceil() * step;

        // Step lost to float resolution at this magnitude, or no round year inside
        if first + step == first || first > max {
            return vec![min, max];
        }

        let limit = target_steps * 2 + 1;
        let count = (((max - first) / step).floor() as usize + 1).min(limit);
        (0..count).map(|i| first + i as f64 * step).collect()
    }

    fn nice_step(range: f64, target_steps: usize) -> f64 {
        let raw_step = range / target_steps.max(1) as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let normalized = raw_step / magnitude;

        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

        nice * magnitude
    }

    fn value_range(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        Some(
            values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
