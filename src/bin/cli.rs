//! BSM chain pricer CLI
//!
//! Fetches a call option chain, prices it with the Black-Scholes-Merton
//! closed form, and reports how far the model deviates from market prices.
//!
//! Usage: bsm [TICKER] [CYCLES]
//! - TICKER: stock symbol (default AAPL)
//! - CYCLES: number of expiration dates to include (default 20)

use std::env;
use std::process;

use bsm_options::prelude::*;

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = env::args().collect();
    let ticker = args.get(1).map(String::as_str).unwrap_or("AAPL").to_string();
    let cycles: usize = match args.get(2).map(|c| c.parse()) {
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            eprintln!("CYCLES must be a positive integer");
            process::exit(2);
        }
        None => 20,
    };

    println!("BSM Chain Pricer");
    println!("================\n");

    let client = YahooClient::new();

    let spot = match client.get_quote(&ticker) {
        Ok(quote) => {
            println!("{} spot price: ${:.2}", ticker, quote.price);
            quote.price
        }
        Err(e) => {
            eprintln!("Could not fetch quote for {}: {}", ticker, e);
            process::exit(1);
        }
    };

    let rows = match client.fetch_call_chain(&ticker, cycles) {
        Ok(rows) => {
            println!("Fetched {} call contracts across up to {} expirations\n", rows.len(), cycles);
            rows
        }
        Err(e) => {
            eprintln!("Could not fetch option chain for {}: {}", ticker, e);
            process::exit(1);
        }
    };

    let priced = price_chain(&rows, spot, DEFAULT_RISK_FREE_RATE, DEFAULT_DIVIDEND_YIELD);
    let summary = analyze(&priced);

    println!("{}", format_report(&summary));

    let skipped = priced.len() - summary.analyzed_rows;
    if skipped > 0 {
        println!("({} rows excluded: missing fields or implausible volatility)", skipped);
    }
}
