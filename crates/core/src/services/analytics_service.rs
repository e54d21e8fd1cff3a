use crate::errors::CoreError;
use crate::models::analytics::{GainSummary, RecordGain};
use crate::models::investment::StockInvestment;
use crate::models::portfolio::Portfolio;

/// Computes gain statistics over a loaded portfolio.
///
/// Percent gain of a record is `(sell / buy - 1) × 100`. A buy price of
/// zero or below is rejected instead of producing a non-finite result,
/// and an empty portfolio is rejected instead of dividing by zero.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Percent gain of a single record.
    pub fn percent_gain(&self, investment: &StockInvestment) -> Result<f64, CoreError> {
        if investment.buy_price <= 0.0 {
            return Err(CoreError::InvalidBuyPrice {
                name: investment.name.clone(),
                id: investment.id,
                price: investment.buy_price,
            });
        }
        Ok((investment.sell_price / investment.buy_price - 1.0) * 100.0)
    }

    /// Arithmetic mean of the per-record percent gains.
    pub fn average_percent_gain(&self, portfolio: &Portfolio) -> Result<f64, CoreError> {
        if portfolio.is_empty() {
            return Err(CoreError::EmptyPortfolio);
        }

        let mut sum = 0.0;
        for investment in &portfolio.investments {
            sum += self.percent_gain(investment)?;
        }
        Ok(sum / portfolio.len() as f64)
    }

    /// Average plus per-record breakdown.
    pub fn summarize(&self, portfolio: &Portfolio) -> Result<GainSummary, CoreError> {
        let per_record = portfolio
            .investments
            .iter()
            .map(|inv| {
                Ok(RecordGain {
                    name: inv.name.clone(),
                    id: inv.id,
                    percent_gain: self.percent_gain(inv)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(GainSummary {
            records: portfolio.len(),
            average_percent_gain: self.average_percent_gain(portfolio)?,
            per_record,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
