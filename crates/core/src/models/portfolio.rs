use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::investment::StockInvestment;

/// The set of stock records loaded from one input file.
///
/// Records are loaded once in bulk by the storage layer. [`Portfolio::set`]
/// replaces an existing record by index for callers building one in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Records in file order
    pub investments: Vec<StockInvestment>,
}

impl Portfolio {
    /// Empty portfolio with room for exactly `n` records.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            investments: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, investment: StockInvestment) {
        self.investments.push(investment);
    }

    /// Replace the record at `index`.
    pub fn set(&mut self, index: usize, investment: StockInvestment) -> Result<(), CoreError> {
        let len = self.investments.len();
        let slot = self
            .investments
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        *slot = investment;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }
}

impl From<Vec<StockInvestment>> for Portfolio {
    fn from(investments: Vec<StockInvestment>) -> Self {
        Self { investments }
    }
}
