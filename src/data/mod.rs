//! Data module - CSV loading and processing

mod loader;
mod model;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use model::AnomalyRecord;
pub use processor::{DataProcessor, Partition, ProcessorError};
