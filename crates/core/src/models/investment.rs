use serde::{Deserialize, Serialize};

/// One parsed line of stock data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInvestment {
    /// Stock name or ticker (e.g., "AAPL")
    pub name: String,

    /// Numeric identifier
    pub id: i64,

    /// Price paid per share
    pub buy_price: f64,

    /// Price received per share
    pub sell_price: f64,

    /// 1-based line number in the source file (0 when built in code)
    #[serde(default)]
    pub line: usize,
}

impl StockInvestment {
    pub fn new(name: impl Into<String>, id: i64, buy_price: f64, sell_price: f64) -> Self {
        Self {
            name: name.into(),
            id,
            buy_price,
            sell_price,
            line: 0,
        }
    }

    /// Attach the source line number this record was parsed from.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}
