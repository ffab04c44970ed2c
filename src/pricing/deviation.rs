//! Model-vs-market deviation analysis
//!
//! Compares the batch pricer's model values against observed market prices
//! and aggregates the differences. The analyzer re-applies the volatility
//! normalization and range filter itself rather than trusting whatever
//! state survived upstream.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::batch::{normalize_volatility, MAX_VOLATILITY, MIN_VOLATILITY};
use crate::core::ChainRow;

/// How many per-row comparisons the summary retains for reporting
pub const SAMPLE_LIMIT: usize = 10;

/// One model-vs-market comparison retained in the summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowComparison {
    pub strike: f64,
    /// Calendar days to expiration at analysis time
    pub days_to_expiration: Option<i64>,
    /// Normalized implied volatility, in percent
    pub implied_vol_pct: f64,
    pub market_price: f64,
    pub model_value: f64,
    /// model - market
    pub price_diff: f64,
    /// (model - market) / market * 100
    pub price_diff_pct: f64,
}

/// Aggregate deviation statistics over the analyzable subset of a chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationSummary {
    /// Rows that survived all filters and entered the aggregates
    pub analyzed_rows: usize,
    /// Mean of |model - market|
    pub mean_abs_diff: f64,
    /// Mean of |percentage difference|
    pub mean_abs_pct_diff: f64,
    /// Median of |percentage difference|
    pub median_abs_pct_diff: f64,
    /// Rows with |percentage difference| <= 5
    pub within_5_pct: usize,
    /// Rows with |percentage difference| <= 10
    pub within_10_pct: usize,
    /// First [`SAMPLE_LIMIT`] comparisons, for reporting
    pub samples: Vec<RowComparison>,
}

impl DeviationSummary {
    /// Summary over zero rows: all counts and aggregates are zero.
    pub fn empty() -> Self {
        Self {
            analyzed_rows: 0,
            mean_abs_diff: 0.0,
            mean_abs_pct_diff: 0.0,
            median_abs_pct_diff: 0.0,
            within_5_pct: 0,
            within_10_pct: 0,
            samples: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.analyzed_rows == 0
    }

    /// Fraction of analyzed rows within 5% of market price
    pub fn within_5_pct_fraction(&self) -> f64 {
        fraction(self.within_5_pct, self.analyzed_rows)
    }

    /// Fraction of analyzed rows within 10% of market price
    pub fn within_10_pct_fraction(&self) -> f64 {
        fraction(self.within_10_pct, self.analyzed_rows)
    }
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Analyze a priced chain as of today. See [`analyze_as_of`].
pub fn analyze(rows: &[ChainRow]) -> DeviationSummary {
    analyze_as_of(rows, Utc::now().date_naive())
}

/// Compare model values against market last prices.
///
/// Rows enter the aggregates only when model value, implied volatility and
/// last price are all present, the independently re-normalized volatility
/// lies in [1%, 200%], and the percentage difference is finite (a zero
/// last price, as reported for untraded strikes, would otherwise yield an
/// infinite or NaN percentage and poison every aggregate). An empty
/// surviving set yields [`DeviationSummary::empty`] rather than an error.
pub fn analyze_as_of(rows: &[ChainRow], as_of: NaiveDate) -> DeviationSummary {
    let mut comparisons: Vec<RowComparison> = Vec::new();

    for row in rows {
        let (Some(model), Some(raw_vol), Some(market)) =
            (row.model_value, row.implied_volatility, row.last_price)
        else {
            continue;
        };

        let vol = normalize_volatility(raw_vol);
        if !(MIN_VOLATILITY..=MAX_VOLATILITY).contains(&vol) {
            continue;
        }

        let diff = model - market;
        let pct_diff = diff / market * 100.0;
        if !pct_diff.is_finite() {
            continue;
        }

        comparisons.push(RowComparison {
            strike: row.strike.unwrap_or(f64::NAN),
            days_to_expiration: row.days_to_expiration(as_of),
            implied_vol_pct: vol * 100.0,
            market_price: market,
            model_value: model,
            price_diff: diff,
            price_diff_pct: pct_diff,
        });
    }

    if comparisons.is_empty() {
        return DeviationSummary::empty();
    }

    let n = comparisons.len();
    let abs_pct: Vec<f64> = comparisons.iter().map(|c| c.price_diff_pct.abs()).collect();

    let mean_abs_diff =
        comparisons.iter().map(|c| c.price_diff.abs()).sum::<f64>() / n as f64;
    let mean_abs_pct_diff = abs_pct.iter().sum::<f64>() / n as f64;
    let within_5_pct = abs_pct.iter().filter(|&&p| p <= 5.0).count();
    let within_10_pct = abs_pct.iter().filter(|&&p| p <= 10.0).count();

    let mut summary_samples = comparisons;
    summary_samples.truncate(SAMPLE_LIMIT);

    DeviationSummary {
        analyzed_rows: n,
        mean_abs_diff,
        mean_abs_pct_diff,
        median_abs_pct_diff: median(abs_pct),
        within_5_pct,
        within_10_pct,
        samples: summary_samples,
    }
}

/// Median of a non-empty set; even counts average the two middle values.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn priced_row(strike: f64, market: f64, model: f64, iv: f64) -> ChainRow {
        let mut row = ChainRow::new(
            strike,
            Some(market),
            Some(100.0),
            Some(iv),
            as_of() + Duration::days(60),
        );
        row.model_value = Some(model);
        row
    }

    #[test]
    fn test_empty_table() {
        let summary = analyze_as_of(&[], as_of());
        assert!(summary.is_empty());
        assert_eq!(summary.analyzed_rows, 0);
        assert_eq!(summary.within_5_pct_fraction(), 0.0);
        assert_eq!(summary.mean_abs_diff, 0.0);
    }

    #[test]
    fn test_rows_without_model_value_excluded() {
        let unpriced = ChainRow::new(
            100.0,
            Some(5.0),
            Some(10.0),
            Some(0.3),
            as_of() + Duration::days(30),
        );
        let summary = analyze_as_of(&[unpriced], as_of());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_aggregates() {
        let rows = vec![
            priced_row(95.0, 10.0, 10.2, 0.25),  // +2%
            priced_row(100.0, 5.0, 5.4, 0.30),   // +8%
            priced_row(105.0, 2.0, 2.4, 35.0),   // +20%, IV in pct points
        ];

        let summary = analyze_as_of(&rows, as_of());

        assert_eq!(summary.analyzed_rows, 3);
        assert_eq!(summary.within_5_pct, 1);
        assert_eq!(summary.within_10_pct, 2);
        assert!((summary.within_10_pct_fraction() - 2.0 / 3.0).abs() < 1e-12);
        assert!((summary.median_abs_pct_diff - 8.0).abs() < 1e-9);
        assert!((summary.mean_abs_pct_diff - 10.0).abs() < 1e-9);
        assert!((summary.mean_abs_diff - (0.2 + 0.4 + 0.4) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyzer_refilters_volatility() {
        // The model value is present, but the raw IV is implausible; the
        // analyzer applies its own range filter.
        let rows = vec![priced_row(100.0, 5.0, 5.1, 0.001)];
        let summary = analyze_as_of(&rows, as_of());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_untraded_zero_price_row_excluded() {
        // A deep-OTM strike underflows both CDF terms, so the batch pricer
        // writes a model value of exactly 0.0; an untraded strike reports a
        // zero last price. 0/0 must not reach the aggregates.
        let expiry = as_of() + Duration::days(30);
        let untraded = ChainRow::new(100_000.0, Some(0.0), Some(5.0), Some(0.3), expiry);
        let traded = ChainRow::new(10.0, Some(1.0), Some(5.0), Some(0.3), expiry);

        let priced = crate::pricing::batch::price_chain_as_of(
            &[untraded, traded],
            10.0,
            0.05,
            0.02,
            as_of(),
        );
        assert_eq!(priced[0].model_value, Some(0.0));

        let summary = analyze_as_of(&priced, as_of());
        assert_eq!(summary.analyzed_rows, 1);
        assert!(summary.median_abs_pct_diff.is_finite());
        assert!(summary.mean_abs_pct_diff.is_finite());
    }

    #[test]
    fn test_zero_price_with_nonzero_model_excluded() {
        // Nonzero model against a zero market price gives an infinite
        // percentage; the row is dropped rather than poisoning the mean.
        let rows = vec![priced_row(100.0, 0.0, 2.5, 0.3), priced_row(95.0, 5.0, 5.2, 0.3)];
        let summary = analyze_as_of(&rows, as_of());

        assert_eq!(summary.analyzed_rows, 1);
        assert_eq!(summary.samples[0].strike, 95.0);
        assert!(summary.mean_abs_pct_diff.is_finite());
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(vec![7.0]), 7.0);
    }

    #[test]
    fn test_sample_bound() {
        let rows: Vec<ChainRow> = (0..25)
            .map(|i| priced_row(80.0 + i as f64, 5.0, 5.1, 0.3))
            .collect();

        let summary = analyze_as_of(&rows, as_of());
        assert_eq!(summary.analyzed_rows, 25);
        assert_eq!(summary.samples.len(), SAMPLE_LIMIT);
        // Samples keep input order
        assert_eq!(summary.samples[0].strike, 80.0);
    }
}
