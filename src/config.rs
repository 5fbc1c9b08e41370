//! Chart configuration constants.

/// Input file, relative to the working directory.
pub const INPUT_PATH: &str = "output.csv";

/// Column names assigned to the first two CSV columns.
pub const YEAR_COLUMN: &str = "Year";
pub const ANOMALY_COLUMN: &str = "Anomaly";

/// First forecasted year. Records before it are historical.
pub const SPLIT_YEAR: f64 = 2024.0;

/// Number of evenly spaced y-axis ticks between min and max anomaly.
pub const Y_TICK_COUNT: usize = 10;

/// Rotation of the year tick labels, degrees counter-clockwise.
pub const X_LABEL_ROTATION_DEG: f32 = 45.0;

pub const BASELINE_VALUE: f64 = 0.0;
pub const BASELINE_LABEL: &str = "Baseline (1951-1980)";

pub const COMBINED_LABEL: &str = "Historical and Forecasted Anomalies";
pub const FORECAST_LABEL: &str = "Forecasted Anomalies";

pub const CHART_TITLE: &str = "Ocean Temperature Anomalies Relative to the Baseline";
pub const X_AXIS_LABEL: &str = "Year";
pub const Y_AXIS_LABEL: &str = "Temperature Anomaly (°F)";

/// Window size in points (14x7 inch figure at 100 dpi)
pub const WINDOW_SIZE: [f32; 2] = [1400.0, 700.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [800.0, 450.0];
