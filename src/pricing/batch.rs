//! Batch pricing of an option-chain snapshot
//!
//! Applies parameter validation and the Black-Scholes-Merton closed form
//! across every row of a chain snapshot. One bad row never aborts the
//! batch: it simply ends up with no model value.

use chrono::{NaiveDate, Utc};

use crate::core::{validate_and_normalize, BsmResult, ChainRow, RawOptionInput};
use crate::models::black_scholes;

/// Floor for time to expiration in years. Same-day or already-expired
/// contracts are priced with this minimal remaining life instead of
/// tripping the closed form's division by zero.
pub const MIN_TIME_TO_EXPIRATION: f64 = 0.0001;

/// Lower bound of plausible normalized implied volatility (1%)
pub const MIN_VOLATILITY: f64 = 0.01;

/// Upper bound of plausible normalized implied volatility (200%)
pub const MAX_VOLATILITY: f64 = 2.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Normalize an implied volatility to decimal form.
///
/// Feeds deliver IV either as a decimal fraction (0.32) or in percentage
/// points (45.0); anything above 1.0 is taken to be the latter and divided
/// by 100. Known approximation: a genuine decimal IV above 100% (e.g. 1.5)
/// is misread as percentage points. Kept as-is to match the source feed's
/// conventions.
pub fn normalize_volatility(raw: f64) -> f64 {
    if raw > 1.0 {
        raw / 100.0
    } else {
        raw
    }
}

/// Time to expiration in years from `as_of`, floored at
/// [`MIN_TIME_TO_EXPIRATION`].
pub fn time_to_expiration(expiration: NaiveDate, as_of: NaiveDate) -> f64 {
    let days = (expiration - as_of).num_days() as f64;
    (days / DAYS_PER_YEAR).max(MIN_TIME_TO_EXPIRATION)
}

/// Price every row of a chain snapshot as of today.
///
/// The snapshot is assumed pre-filtered to call contracts; every priced row
/// is evaluated as a call. See [`price_chain_as_of`] for the semantics.
pub fn price_chain(
    rows: &[ChainRow],
    spot: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
) -> Vec<ChainRow> {
    price_chain_as_of(rows, spot, risk_free_rate, dividend_yield, Utc::now().date_naive())
}

/// Price every row of a chain snapshot as of a given date.
///
/// Pure map over the input: the returned table has the same length and
/// order, with `time_to_expiration`, `normalized_volatility` and
/// `model_value` filled in. A row is left without a model value when its
/// strike, implied volatility or expiration is missing, when its normalized
/// volatility falls outside [`MIN_VOLATILITY`, `MAX_VOLATILITY`], or when
/// validation or pricing fails for it.
pub fn price_chain_as_of(
    rows: &[ChainRow],
    spot: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    as_of: NaiveDate,
) -> Vec<ChainRow> {
    rows.iter()
        .map(|row| price_row(row, spot, risk_free_rate, dividend_yield, as_of))
        .collect()
}

fn price_row(
    row: &ChainRow,
    spot: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    as_of: NaiveDate,
) -> ChainRow {
    let mut out = row.clone();
    out.model_value = None;
    out.time_to_expiration = row.expiration.map(|e| time_to_expiration(e, as_of));
    out.normalized_volatility = row.implied_volatility.map(normalize_volatility);

    let (Some(strike), Some(vol), Some(tte)) =
        (out.strike, out.normalized_volatility, out.time_to_expiration)
    else {
        return out;
    };

    if !(MIN_VOLATILITY..=MAX_VOLATILITY).contains(&vol) {
        return out;
    }

    match price_call(spot, strike, tte, risk_free_rate, vol, dividend_yield) {
        Ok(value) => out.model_value = Some(value),
        Err(e) => {
            tracing::debug!("Skipping row at strike {}: {}", strike, e);
        }
    }

    out
}

fn price_call(
    spot: f64,
    strike: f64,
    tte: f64,
    risk_free_rate: f64,
    volatility: f64,
    dividend_yield: f64,
) -> BsmResult<f64> {
    let raw = RawOptionInput::new(
        spot,
        strike,
        tte,
        risk_free_rate,
        volatility,
        "Call",
        dividend_yield,
    );
    let params = validate_and_normalize(&raw)?;
    black_scholes::price(&params)
}
