/// One sanitized row of the anomaly table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyRecord {
    pub year: f64,
    /// Difference from the 1951-1980 baseline, °F
    pub anomaly: f64,
}

impl AnomalyRecord {
    pub fn new(year: f64, anomaly: f64) -> Self {
        Self { year, anomaly }
    }
}
