//! Pricing models
//!
//! Implements:
//! - Black-Scholes-Merton closed form (calls and puts, continuous dividend yield)

pub mod black_scholes;

pub use black_scholes::*;
