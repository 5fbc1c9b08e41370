//! CSV Data Loader Module
//! Reads the anomaly CSV into a two-column text DataFrame using Polars.

use crate::config::{ANOMALY_COLUMN, YEAR_COLUMN};
use log::info;
use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Loads the anomaly table. The header line is skipped and the first two
/// columns are always named `Year` and `Anomaly`, with every cell kept as text.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file from disk. The whole file is read up front, so any I/O
    /// failure (missing file, directory, permissions) is a `FileAccess` error
    /// and the handle is closed before parsing starts.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = file_path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoaderError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let df = Self::load_reader(Cursor::new(bytes))?;
        info!("Loaded {} rows from {}", df.height(), path.display());
        Ok(df)
    }

    /// Load CSV content from any reader Polars can consume.
    pub fn load_reader<R: MmapBytesReader>(reader: R) -> Result<DataFrame, LoaderError> {
        // Schema inference length 0 reads every column as String; numeric
        // coercion happens row by row in the processor.
        let result = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
            .into_reader_with_file_handle(reader)
            .finish();

        let raw = match result {
            Ok(df) => df,
            // Zero-byte input carries no header and no rows
            Err(PolarsError::NoData(_)) => DataFrame::empty(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self::name_columns(&raw)?)
    }

    /// Replace whatever header the file had with the fixed column names.
    /// A missing second column becomes all-null so its rows get dropped later.
    fn name_columns(raw: &DataFrame) -> PolarsResult<DataFrame> {
        let height = raw.height();
        let columns = raw.get_columns();

        let named = |idx: usize, name: &str| -> PolarsResult<Column> {
            match columns.get(idx) {
                Some(col) => Ok(col.cast(&DataType::String)?.with_name(name.into())),
                None => Ok(Column::full_null(name.into(), height, &DataType::String)),
            }
        };

        DataFrame::new(vec![named(0, YEAR_COLUMN)?, named(1, ANOMALY_COLUMN)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> DataFrame {
        DataLoader::load_reader(Cursor::new(text.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn header_names_are_replaced() {
        let df = load("yr,value\n2020,0.5\n2021,0.6\n");
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Year", "Anomaly"]);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn cells_are_kept_as_text() {
        let df = load("Year,Anomaly\n2020,bad\n");
        let anomaly = df.column("Anomaly").unwrap();
        assert_eq!(anomaly.dtype(), &DataType::String);
        assert_eq!(anomaly.str().unwrap().get(0), Some("bad"));
    }

    #[test]
    fn header_only_gives_empty_table() {
        let df = load("Year,Anomaly\n");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn zero_byte_input_gives_empty_table() {
        let df = load("");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn single_column_gets_null_anomalies() {
        let df = load("Year\n2020\n2021\n");
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("Anomaly").unwrap().null_count(), 2);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let err = DataLoader::load_csv("definitely/not/here/output.csv").unwrap_err();
        match err {
            LoaderError::FileAccess { path, .. } => {
                assert_eq!(path, PathBuf::from("definitely/not/here/output.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_is_file_access_error() {
        let dir = std::env::temp_dir();
        let err = DataLoader::load_csv(&dir).unwrap_err();
        match err {
            LoaderError::FileAccess { path, .. } => assert_eq!(path, dir),
            other => panic!("unexpected error: {other}"),
        }
    }
}
