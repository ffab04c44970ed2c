//! Option parameter validation and normalization
//!
//! Turns a raw parameter tuple, as supplied by an external caller, into the
//! canonical [`OptionParameters`] record consumed by the pricing formulas.

use serde::{Deserialize, Serialize};

use super::error::{BsmError, BsmResult};
use super::option::OptionType;

/// Raw option input as an ordered 7-field tuple:
/// (asset price, strike, time to expiration, rate, volatility, type, dividend yield)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOptionInput {
    pub asset_price: f64,
    pub strike_price: f64,
    /// Time to expiration in years
    pub time_to_expiration: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    /// Option type token: one of C, c, Call, P, p, Put
    pub option_type: String,
    pub dividend_yield: f64,
}

impl RawOptionInput {
    pub fn new(
        asset_price: f64,
        strike_price: f64,
        time_to_expiration: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: impl Into<String>,
        dividend_yield: f64,
    ) -> Self {
        Self {
            asset_price,
            strike_price,
            time_to_expiration,
            risk_free_rate,
            volatility,
            option_type: option_type.into(),
            dividend_yield,
        }
    }
}

/// Canonical, validated option parameters.
///
/// Invariants (established by [`validate_and_normalize`]): the five
/// price/time/rate/vol fields are finite and non-negative; `dividend_yield`
/// is finite but may be negative. Constructed once per pricing call and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    pub asset_price: f64,
    pub strike_price: f64,
    pub time_to_expiration: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    pub option_type: OptionType,
    pub dividend_yield: f64,
}

/// Validate a raw parameter tuple and normalize it into [`OptionParameters`].
///
/// Checks run in positional order and fail on the first violation:
/// asset price, strike, expiration, rate and volatility must each be finite
/// and non-negative; the option-type token must be one of the six accepted
/// spellings; the dividend yield must be finite. The dividend yield is
/// deliberately not range-checked: a negative yield (borrow cost) is a
/// valid input.
pub fn validate_and_normalize(raw: &RawOptionInput) -> BsmResult<OptionParameters> {
    let numeric_fields = [
        ("asset_price", raw.asset_price),
        ("strike_price", raw.strike_price),
        ("time_to_expiration", raw.time_to_expiration),
        ("risk_free_rate", raw.risk_free_rate),
        ("volatility", raw.volatility),
    ];

    for (name, value) in numeric_fields {
        if !value.is_finite() {
            return Err(BsmError::validation(format!(
                "{} must be a real number, got {}",
                name, value
            )));
        }
        if value < 0.0 {
            return Err(BsmError::validation(format!(
                "{} must be non-negative, got {}",
                name, value
            )));
        }
    }

    let option_type = OptionType::from_token(&raw.option_type)?;

    if !raw.dividend_yield.is_finite() {
        return Err(BsmError::validation(format!(
            "dividend_yield must be a real number, got {}",
            raw.dividend_yield
        )));
    }

    Ok(OptionParameters {
        asset_price: raw.asset_price,
        strike_price: raw.strike_price,
        time_to_expiration: raw.time_to_expiration,
        risk_free_rate: raw.risk_free_rate,
        volatility: raw.volatility,
        option_type,
        dividend_yield: raw.dividend_yield,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(option_type: &str) -> RawOptionInput {
        RawOptionInput::new(31.45, 22.75, 3.5, 0.05, 0.5, option_type, 0.02)
    }

    #[test]
    fn test_normalizes_call_tokens() {
        let canonical = validate_and_normalize(&raw("Call")).unwrap();
        for token in ["C", "c"] {
            assert_eq!(validate_and_normalize(&raw(token)).unwrap(), canonical);
        }
        assert_eq!(canonical.option_type, OptionType::Call);
    }

    #[test]
    fn test_normalizes_put_tokens() {
        for token in ["P", "p", "Put"] {
            let params = validate_and_normalize(&raw(token)).unwrap();
            assert_eq!(params.option_type, OptionType::Put);
        }
    }

    #[test]
    fn test_rejects_negative_numerics() {
        let mut bad = raw("C");
        bad.asset_price = -1.0;
        let err = validate_and_normalize(&bad).unwrap_err();
        assert!(err.to_string().contains("asset_price"));

        let mut bad = raw("C");
        bad.volatility = -0.2;
        let err = validate_and_normalize(&bad).unwrap_err();
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_rejects_non_finite_numerics() {
        let mut bad = raw("C");
        bad.strike_price = f64::NAN;
        assert!(validate_and_normalize(&bad).is_err());

        let mut bad = raw("C");
        bad.time_to_expiration = f64::INFINITY;
        assert!(validate_and_normalize(&bad).is_err());
    }

    #[test]
    fn test_rejects_unknown_token() {
        assert!(validate_and_normalize(&raw("X")).is_err());
    }

    #[test]
    fn test_rejects_non_finite_dividend_yield() {
        let mut bad = raw("C");
        bad.dividend_yield = f64::NAN;
        let err = validate_and_normalize(&bad).unwrap_err();
        assert!(err.to_string().contains("dividend_yield"));
    }

    #[test]
    fn test_accepts_negative_dividend_yield() {
        // Sign is intentionally unconstrained for the yield.
        let mut input = raw("C");
        input.dividend_yield = -0.03;
        let params = validate_and_normalize(&input).unwrap();
        assert_eq!(params.dividend_yield, -0.03);
    }

    #[test]
    fn test_first_violation_wins() {
        // Both asset price and token are bad; the positional check fires first.
        let mut bad = raw("X");
        bad.asset_price = -5.0;
        let err = validate_and_normalize(&bad).unwrap_err();
        assert!(err.to_string().contains("asset_price"));
    }
}
