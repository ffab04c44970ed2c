//! Option chain rows
//!
//! Market data for one traded contract at one expiration, as delivered by
//! the chain fetcher, plus the columns the pricing pipeline writes back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of an option-chain snapshot.
///
/// Market fields are all optional, since exchange feeds routinely omit
/// them, and the pipeline treats a missing field as "skip this row",
/// never as an error. `model_value`, `time_to_expiration` and `normalized_volatility`
/// are written by the batch pricer; fetchers should leave them `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainRow {
    /// Strike price
    pub strike: Option<f64>,
    /// Last traded price
    pub last_price: Option<f64>,
    /// Open interest (pre-filtered to > 0 by the fetcher)
    pub open_interest: Option<f64>,
    /// Implied volatility as delivered (decimal or percentage points)
    pub implied_volatility: Option<f64>,
    /// Expiration date
    pub expiration: Option<NaiveDate>,
    /// Time to expiration in years, written by the batch pricer
    pub time_to_expiration: Option<f64>,
    /// Implied volatility normalized to decimal form
    pub normalized_volatility: Option<f64>,
    /// Black-Scholes-Merton model value, written by the batch pricer
    pub model_value: Option<f64>,
}

impl ChainRow {
    /// A market row with the fields the fetcher populates.
    pub fn new(
        strike: f64,
        last_price: Option<f64>,
        open_interest: Option<f64>,
        implied_volatility: Option<f64>,
        expiration: NaiveDate,
    ) -> Self {
        Self {
            strike: Some(strike),
            last_price,
            open_interest,
            implied_volatility,
            expiration: Some(expiration),
            ..Self::default()
        }
    }

    /// Calendar days from `as_of` to expiration (negative if expired)
    pub fn days_to_expiration(&self, as_of: NaiveDate) -> Option<i64> {
        self.expiration.map(|e| (e - as_of).num_days())
    }
}
