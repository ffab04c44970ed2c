//! Black-Scholes-Merton Model
//!
//! Closed-form European option pricing with continuous dividend yield:
//!
//! - d1 = [ln(S/K) + (r - q + σ²/2)·T] / (σ·√T)
//! - d2 = d1 - σ·√T
//! - Call = S·e^(-qT)·Φ(d1) - K·e^(-rT)·Φ(d2)
//! - Put  = K·e^(-rT)·Φ(-d2) - S·e^(-qT)·Φ(-d1)
//!
//! The formula layer never clamps its inputs: a zero strike, volatility or
//! time to expiration is a caller defect and comes back as a numerical
//! error. Callers that work with market snapshots are expected to floor the
//! time to expiration and filter volatility before getting here (see
//! `pricing::batch`). The computed price is likewise not clamped at zero:
//! deep out-of-the-money combinations may come back marginally negative
//! from floating-point noise, and that is reported as-is.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{BsmError, BsmResult, OptionParameters, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Black-Scholes d1 measure.
///
/// Precondition: strike, volatility and time to expiration are positive
/// (see [`price`], which checks them).
pub fn d1(p: &OptionParameters) -> f64 {
    let sqrt_t = p.time_to_expiration.sqrt();
    ((p.asset_price / p.strike_price).ln()
        + (p.risk_free_rate - p.dividend_yield + p.volatility * p.volatility / 2.0)
            * p.time_to_expiration)
        / (p.volatility * sqrt_t)
}

/// Black-Scholes d2 measure: d1 - σ·√T
pub fn d2(p: &OptionParameters) -> f64 {
    d1(p) - p.volatility * p.time_to_expiration.sqrt()
}

/// Black-Scholes-Merton price of a European option.
///
/// Errors with [`BsmError::Numerical`] when the asset price, strike,
/// volatility or time to expiration is zero, the log/division domain the
/// closed form cannot evaluate.
pub fn price(p: &OptionParameters) -> BsmResult<f64> {
    if p.asset_price == 0.0 || p.strike_price == 0.0 {
        return Err(BsmError::numerical(
            "asset and strike prices must be positive for the BSM closed form",
        ));
    }
    if p.volatility == 0.0 || p.time_to_expiration == 0.0 {
        return Err(BsmError::numerical(
            "volatility and time to expiration must be positive for the BSM closed form",
        ));
    }

    let d1 = d1(p);
    let d2 = d2(p);

    let discount_r = (-p.risk_free_rate * p.time_to_expiration).exp();
    let discount_q = (-p.dividend_yield * p.time_to_expiration).exp();

    let value = match p.option_type {
        OptionType::Call => {
            p.asset_price * discount_q * norm_cdf(d1)
                - p.strike_price * discount_r * norm_cdf(d2)
        }
        OptionType::Put => {
            p.strike_price * discount_r * norm_cdf(-d2)
                - p.asset_price * discount_q * norm_cdf(-d1)
        }
    };

    Ok(value)
}
