//! Data Processor Module
//! Numeric coercion of the raw table and the historical/forecast split.

use crate::config::{ANOMALY_COLUMN, YEAR_COLUMN};
use crate::data::AnomalyRecord;
use log::{debug, info};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Parse a single cell as a finite number.
///
/// Blank, unparseable and non-finite cells are treated as missing.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Coerce `Year` and `Anomaly` to numbers, dropping every row where
    /// either one is missing. File order is preserved.
    pub fn sanitize(df: &DataFrame) -> Result<Vec<AnomalyRecord>, ProcessorError> {
        let years = df.column(YEAR_COLUMN)?.str()?;
        let anomalies = df.column(ANOMALY_COLUMN)?.str()?;

        let mut records = Vec::with_capacity(df.height());
        for (i, (year, anomaly)) in years.iter().zip(anomalies.iter()).enumerate() {
            match (year.and_then(parse_cell), anomaly.and_then(parse_cell)) {
                (Some(year), Some(anomaly)) => records.push(AnomalyRecord::new(year, anomaly)),
                _ => debug!("Dropping row {}: year={:?} anomaly={:?}", i + 1, year, anomaly),
            }
        }

        let dropped = df.height() - records.len();
        if dropped > 0 {
            info!("Dropped {} of {} rows with non-numeric values", dropped, df.height());
        }

        Ok(records)
    }
}

/// Historical and forecasted views over sanitized records.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    pub historical: Vec<&'a AnomalyRecord>,
    pub forecasted: Vec<&'a AnomalyRecord>,
}

impl<'a> Partition<'a> {
    /// Split at `split_year`: `year < split_year` is historical, the rest is
    /// forecasted. Relative order inside each group is kept.
    pub fn split(records: &'a [AnomalyRecord], split_year: f64) -> Self {
        let (historical, forecasted): (Vec<_>, Vec<_>) =
            records.iter().partition(|r| r.year < split_year);

        info!(
            "Partitioned {} historical and {} forecasted records at {}",
            historical.len(),
            forecasted.len(),
            split_year
        );

        Self {
            historical,
            forecasted,
        }
    }

    /// Historical records followed by forecasted records.
    pub fn combined(&self) -> impl Iterator<Item = &'a AnomalyRecord> + '_ {
        self.historical
            .iter()
            .chain(self.forecasted.iter())
            .copied()
    }

    pub fn combined_years(&self) -> Vec<f64> {
        self.combined().map(|r| r.year).collect()
    }

    pub fn combined_anomalies(&self) -> Vec<f64> {
        self.combined().map(|r| r.anomaly).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecasted.is_empty()
    }
}
