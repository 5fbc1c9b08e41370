//! Load, clean, split and describe the anomaly chart.

use crate::charts::{ChartData, ChartPlotter};
use crate::config::SPLIT_YEAR;
use crate::data::{DataLoader, DataProcessor, LoaderError, Partition, ProcessorError};
use polars::prelude::DataFrame;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Process(#[from] ProcessorError),
    #[error("No data to plot: every row is empty or non-numeric")]
    EmptyData,
}

/// Run the whole pipeline over a CSV file.
pub fn build_chart(path: impl AsRef<Path>) -> Result<ChartData, PipelineError> {
    let df = DataLoader::load_csv(path)?;
    build_chart_from_frame(&df)
}

/// Sanitize and partition a loaded table, then build its chart.
/// Fails with [`PipelineError::EmptyData`] when no row survives sanitization.
pub fn build_chart_from_frame(df: &DataFrame) -> Result<ChartData, PipelineError> {
    let records = DataProcessor::sanitize(df)?;
    let partition = Partition::split(&records, SPLIT_YEAR);
    ChartPlotter::build(&partition).ok_or(PipelineError::EmptyData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::LinePattern;
    use std::io::Cursor;

    fn run(text: &str) -> Result<ChartData, PipelineError> {
        let df = DataLoader::load_reader(Cursor::new(text.as_bytes().to_vec()))?;
        build_chart_from_frame(&df)
    }

    #[test]
    fn scenario_a() {
        let chart = run("Year,Anomaly\n2020,0.5\n2021,0.6\n2024,0.9\n2025,1.0\n").unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(
            chart.series[0].points,
            vec![[2020.0, 0.5], [2021.0, 0.6], [2024.0, 0.9], [2025.0, 1.0]]
        );
        assert_eq!(chart.series[1].points, vec![[2024.0, 0.9], [2025.0, 1.0]]);
        assert_eq!(chart.series[1].pattern, LinePattern::Dashed);
    }

    #[test]
    fn scenario_b_drops_bad_anomaly() {
        let chart = run("Year,Anomaly\n2020,bad\n2021,0.6\n").unwrap();
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].points, vec![[2021.0, 0.6]]);
    }

    #[test]
    fn scenario_c_header_only_is_empty_data() {
        let err = run("Year,Anomaly\n").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyData));
    }

    #[test]
    fn all_rows_invalid_is_empty_data() {
        let err = run("Year,Anomaly\nabc,0.1\n2020,\n,\n").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyData));
    }

    #[test]
    fn header_row_is_never_data() {
        // Numeric header is still skipped
        let chart = run("1999,0.1\n2000,0.2\n").unwrap();
        assert_eq!(chart.series[0].points, vec![[2000.0, 0.2]]);
    }

    #[test]
    fn ragged_rows_are_dropped() {
        let chart = run("Year,Anomaly\n2019\n2020,0.5\n").unwrap();
        assert_eq!(chart.series[0].points, vec![[2020.0, 0.5]]);
    }

    #[test]
    fn rerun_gives_same_chart() {
        let text = "Year,Anomaly\n2022,0.7\nx,1\n2023,0.8\n2030,1.4\n";
        assert_eq!(run(text).unwrap(), run(text).unwrap());
    }

    #[test]
    fn missing_file_fails_before_charting() {
        let err = build_chart("no/such/dir/output.csv").unwrap_err();
        assert!(matches!(err, PipelineError::Load(LoaderError::FileAccess { .. })));
    }
}
