use serde::{Deserialize, Serialize};

/// Aggregate gain statistics for a whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainSummary {
    /// Number of records the average was computed over
    pub records: usize,

    /// Mean of the per-record percent gains
    pub average_percent_gain: f64,

    /// Per-record breakdown, in file order
    pub per_record: Vec<RecordGain>,
}

/// Percent gain of a single record: (sell / buy - 1) × 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordGain {
    pub name: String,
    pub id: i64,
    pub percent_gain: f64,
}
