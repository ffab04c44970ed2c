//! Yahoo Finance data fetcher
//!
//! Fetches spot quotes and call option chains via Yahoo Finance's
//! unofficial API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{BsmError, BsmResult, ChainRow};

/// Default annualized risk-free rate used when the caller supplies none
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Default annualized dividend yield used when the caller supplies none
pub const DEFAULT_DIVIDEND_YIELD: f64 = 0.02;

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com/v7/finance".to_string(),
        }
    }

    /// Get current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> BsmResult<SpotQuote> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsmError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsmError::data(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| BsmError::data("No quote data returned"))?;

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: result.regular_market_price,
            timestamp: Utc::now(),
        })
    }

    /// Get available option expiration dates
    pub fn get_expirations(&self, symbol: &str) -> BsmResult<Vec<NaiveDate>> {
        let url = format!("{}/options/{}", self.base_url, symbol);

        let response: YahooOptionsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsmError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsmError::data(format!("Failed to parse options: {}", e)))?;

        let chain = response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| BsmError::data("No options data returned"))?;

        let expiries: Vec<NaiveDate> = chain
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect();

        Ok(expiries)
    }

    /// Get the call contracts for one expiration, filtered to open
    /// interest > 0, as chain rows ready for the batch pricer.
    pub fn get_call_rows(&self, symbol: &str, expiry: NaiveDate) -> BsmResult<Vec<ChainRow>> {
        let expiry_ts = expiry
            .and_hms_opt(16, 0, 0)
            .ok_or_else(|| BsmError::data("Invalid expiry date"))?
            .and_utc()
            .timestamp();

        let url = format!("{}/options/{}?date={}", self.base_url, symbol, expiry_ts);

        let response: YahooOptionsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsmError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsmError::data(format!("Failed to parse options: {}", e)))?;

        let chain_data = response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| BsmError::data("No options data returned"))?;

        let mut rows = Vec::new();
        if let Some(options) = chain_data.options.first() {
            for call in &options.calls {
                if let Some(row) = convert_call_row(call, expiry) {
                    rows.push(row);
                }
            }
        }

        Ok(rows)
    }

    /// Fetch call rows across up to `cycles` expiration dates.
    ///
    /// A failed expiration is logged and skipped; the fetch errors only
    /// when no expiration yields a usable row.
    pub fn fetch_call_chain(&self, symbol: &str, cycles: usize) -> BsmResult<Vec<ChainRow>> {
        tracing::info!("Fetching option chain data for {}", symbol);

        let expiries = self.get_expirations(symbol)?;
        if expiries.is_empty() {
            return Err(BsmError::data(format!(
                "No option chain data available for ticker {}",
                symbol
            )));
        }

        let mut rows = Vec::new();
        for expiry in expiries.iter().take(cycles) {
            match self.get_call_rows(symbol, *expiry) {
                Ok(expiry_rows) => rows.extend(expiry_rows),
                Err(e) => {
                    tracing::warn!("Error fetching option chain for {}: {}", expiry, e);
                }
            }
        }

        if rows.is_empty() {
            return Err(BsmError::data(format!(
                "No option data with open interest > 0 found for {}",
                symbol
            )));
        }

        tracing::info!("Fetched {} call options with open interest > 0", rows.len());
        Ok(rows)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one Yahoo call record into a chain row. Returns `None` for
/// records without a strike or without positive open interest.
fn convert_call_row(data: &YahooOptionData, expiry: NaiveDate) -> Option<ChainRow> {
    let strike = data.strike?;

    let open_interest = data.open_interest.unwrap_or(0);
    if open_interest <= 0 {
        return None;
    }

    Some(ChainRow::new(
        strike,
        data.last_price,
        Some(open_interest as f64),
        data.implied_volatility,
        expiry,
    ))
}

/// Spot price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
}

#[derive(Debug, Deserialize)]
struct YahooOptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: YahooOptionChain,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChain {
    result: Vec<YahooOptionChainData>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChainData {
    #[serde(rename = "expirationDates")]
    expiration_dates: Vec<i64>,
    options: Vec<YahooOptions>,
}

#[derive(Debug, Deserialize)]
struct YahooOptions {
    calls: Vec<YahooOptionData>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionData {
    strike: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
    #[serde(rename = "openInterest")]
    open_interest: Option<i64>,
    #[serde(rename = "impliedVolatility")]
    implied_volatility: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_call_row_filters_open_interest() {
        let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();

        let liquid = YahooOptionData {
            strike: Some(100.0),
            last_price: Some(5.0),
            open_interest: Some(25),
            implied_volatility: Some(0.3),
        };
        let row = convert_call_row(&liquid, expiry).unwrap();
        assert_eq!(row.strike, Some(100.0));
        assert_eq!(row.open_interest, Some(25.0));
        assert_eq!(row.expiration, Some(expiry));
        assert!(row.model_value.is_none());

        let illiquid = YahooOptionData {
            strike: Some(100.0),
            last_price: Some(5.0),
            open_interest: Some(0),
            implied_volatility: Some(0.3),
        };
        assert!(convert_call_row(&illiquid, expiry).is_none());

        let no_strike = YahooOptionData {
            strike: None,
            last_price: Some(5.0),
            open_interest: Some(25),
            implied_volatility: Some(0.3),
        };
        assert!(convert_call_row(&no_strike, expiry).is_none());
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_quote() {
        let client = YahooClient::new();
        let quote = client.get_quote("AAPL").unwrap();

        assert!(quote.price > 0.0);
        println!("AAPL price: {}", quote.price);
    }

    #[test]
    #[ignore] // Requires network
    fn test_fetch_call_chain() {
        let client = YahooClient::new();
        let rows = client.fetch_call_chain("AAPL", 2).unwrap();

        assert!(!rows.is_empty());
        println!("Fetched {} call rows", rows.len());
    }
}
