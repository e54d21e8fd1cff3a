use thiserror::Error;

/// Unified error type for the entire profitbook-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Record file ─────────────────────────────────────────────────
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Portfolio contains no records — average gain is undefined")]
    EmptyPortfolio,

    #[error("Invalid buy price {price} for {name} (id {id}) — must be greater than zero")]
    InvalidBuyPrice { name: String, id: i64, price: f64 },

    #[error("Index {index} out of range for portfolio of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    // ── Snapshot history ────────────────────────────────────────────
    #[error("Text capacity exceeded: {required} bytes needed, capacity is {capacity}")]
    CapacityExceeded { capacity: usize, required: usize },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
