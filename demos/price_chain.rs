//! Example: price a synthetic call chain and analyze model deviation
//!
//! Run with: cargo run --example price_chain
//!
//! Builds a small in-memory chain snapshot (no network needed), prices it,
//! and prints the deviation report.

use bsm_options::prelude::*;
use chrono::{Duration, Utc};

fn main() {
    let spot: f64 = 100.0;
    let today = Utc::now().date_naive();

    // A few strikes across two expirations, with deliberately imperfect
    // "market" prices and one junk row.
    let mut rows = Vec::new();
    for (days, strikes) in [(30, [90.0, 100.0, 110.0]), (90, [95.0, 105.0, 115.0])] {
        let expiry = today + Duration::days(days);
        for strike in strikes {
            let market = (spot - strike).max(0.5) + 2.0;
            rows.push(ChainRow::new(
                strike,
                Some(market),
                Some(150.0),
                Some(0.25),
                expiry,
            ));
        }
    }
    // Missing implied volatility: priced as "no value", never an error.
    rows.push(ChainRow::new(
        120.0,
        Some(0.10),
        Some(3.0),
        None,
        today + Duration::days(30),
    ));

    let priced = price_chain(&rows, spot, DEFAULT_RISK_FREE_RATE, DEFAULT_DIVIDEND_YIELD);

    println!("Priced {} of {} rows\n", priced.iter().filter(|r| r.model_value.is_some()).count(), priced.len());
    for row in &priced {
        println!(
            "strike {:>6.1}  model value: {}",
            row.strike.unwrap_or(f64::NAN),
            row.model_value
                .map(|v| format!("${:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    let summary = analyze(&priced);
    println!("\n{}", format_report(&summary));
}
