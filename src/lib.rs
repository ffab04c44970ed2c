//! # BSM Options - Black-Scholes-Merton Chain Pricer
//!
//! A Black-Scholes-Merton pricing library that values European options
//! (with continuous dividend yield) and compares model output against
//! observed market option-chain data.
//!
//! ## Overview
//!
//! The pipeline is a single-pass, single-threaded map over a chain
//! snapshot:
//!
//! 1. **Validation**: each raw parameter tuple is checked and normalized
//!    into a canonical [`core::OptionParameters`] record
//! 2. **Pricing**: the closed-form d1/d2 formulas value each contract
//! 3. **Batch**: the whole snapshot is priced row by row, tolerating
//!    per-row failures
//! 4. **Deviation**: model values are compared against market last prices
//!
//! ## Key Components
//!
//! - **Data Fetching**: Yahoo Finance spot quotes and call chains
//! - **Black-Scholes**: d1/d2 measures and call/put prices
//! - **Batch Pricer**: per-row pricing with failure isolation
//! - **Deviation Analyzer**: aggregate model-vs-market statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bsm_options::prelude::*;
//!
//! // Fetch AAPL calls across the next 20 expirations
//! let client = YahooClient::new();
//! let spot = client.get_quote("AAPL").unwrap();
//! let rows = client.fetch_call_chain("AAPL", 20).unwrap();
//!
//! // Price the chain and compare against the market
//! let priced = price_chain(&rows, spot.price, DEFAULT_RISK_FREE_RATE, DEFAULT_DIVIDEND_YIELD);
//! let summary = analyze(&priced);
//! println!("{}", format_report(&summary));
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Solve for implied volatility (volatility is an input, not derived)
//! - Handle American early exercise
//! - Compute Greeks
//! - Persist anything

pub mod core;
pub mod data;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        validate_and_normalize, BsmError, BsmResult, ChainRow, OptionParameters, OptionType,
        RawOptionInput,
    };

    // Data fetching
    pub use crate::data::{
        SpotQuote, YahooClient, DEFAULT_DIVIDEND_YIELD, DEFAULT_RISK_FREE_RATE,
    };

    // Models
    pub use crate::models::{
        d1,
        d2,
        norm_cdf,
        // Black-Scholes
        price as bs_price,
    };

    // Chain pricing pipeline
    pub use crate::pricing::{
        analyze,
        analyze_as_of,
        format_report,
        normalize_volatility,
        // Batch pricer
        price_chain,
        price_chain_as_of,
        DeviationSummary,
        RowComparison,
        MAX_VOLATILITY,
        MIN_TIME_TO_EXPIRATION,
        MIN_VOLATILITY,
    };
}

// Re-export main types at crate root
pub use crate::core::{BsmError, BsmResult};
pub use crate::pricing::DeviationSummary;
