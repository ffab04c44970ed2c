//! Plain-text rendering of a deviation summary
//!
//! Presentation only: everything here is derived from a
//! [`DeviationSummary`], so callers that want different output can format
//! the summary themselves.

use std::fmt::Write;

use super::deviation::DeviationSummary;

const BANNER_WIDTH: usize = 80;

/// Render a deviation summary as the console report.
pub fn format_report(summary: &DeviationSummary) -> String {
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);

    let _ = writeln!(out, "{}", banner);
    let _ = writeln!(out, "BSM Model vs Market Price Analysis (Valid Volatility Cases)");
    let _ = writeln!(out, "{}", banner);

    if summary.is_empty() {
        let _ = writeln!(out, "\nNo valid rows found for analysis.");
        let _ = writeln!(out, "\n{}", banner);
        return out;
    }

    let _ = writeln!(
        out,
        "\nAnalyzing {} options with valid volatility (1% - 200%):",
        summary.analyzed_rows
    );
    let _ = writeln!(out, "\nAverage absolute difference: ${:.2}", summary.mean_abs_diff);
    let _ = writeln!(
        out,
        "Average absolute percentage difference: {:.2}%",
        summary.mean_abs_pct_diff
    );
    let _ = writeln!(
        out,
        "Median absolute percentage difference: {:.2}%",
        summary.median_abs_pct_diff
    );

    let _ = writeln!(out, "\nSample comparisons (showing first {}):", summary.samples.len());
    let _ = writeln!(
        out,
        "{:<8} {:<6} {:<8} {:<10} {:<10} {:<10} {:<8}",
        "Strike", "Days", "IV %", "Market", "BSM", "Diff $", "Diff %"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for sample in &summary.samples {
        let days = sample
            .days_to_expiration
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<8.0} {:<6} {:<8.2} ${:<9.2} ${:<9.2} ${:<9.2} {:<7.2}%",
            sample.strike,
            days,
            sample.implied_vol_pct,
            sample.market_price,
            sample.model_value,
            sample.price_diff,
            sample.price_diff_pct
        );
    }

    let _ = writeln!(
        out,
        "\nOptions within 5% of market price: {}/{} ({:.1}%)",
        summary.within_5_pct,
        summary.analyzed_rows,
        summary.within_5_pct_fraction() * 100.0
    );
    let _ = writeln!(
        out,
        "Options within 10% of market price: {}/{} ({:.1}%)",
        summary.within_10_pct,
        summary.analyzed_rows,
        summary.within_10_pct_fraction() * 100.0
    );

    let _ = writeln!(out, "\n{}", banner);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::deviation::RowComparison;

    #[test]
    fn test_empty_report() {
        let report = format_report(&DeviationSummary::empty());
        assert!(report.contains("No valid rows found for analysis."));
    }

    #[test]
    fn test_report_contains_aggregates() {
        let summary = DeviationSummary {
            analyzed_rows: 2,
            mean_abs_diff: 0.31,
            mean_abs_pct_diff: 4.5,
            median_abs_pct_diff: 4.5,
            within_5_pct: 1,
            within_10_pct: 2,
            samples: vec![RowComparison {
                strike: 100.0,
                days_to_expiration: Some(30),
                implied_vol_pct: 25.0,
                market_price: 5.0,
                model_value: 5.2,
                price_diff: 0.2,
                price_diff_pct: 4.0,
            }],
        };

        let report = format_report(&summary);
        assert!(report.contains("Analyzing 2 options"));
        assert!(report.contains("Average absolute difference: $0.31"));
        assert!(report.contains("within 5% of market price: 1/2 (50.0%)"));
        assert!(report.contains("within 10% of market price: 2/2 (100.0%)"));
    }
}
