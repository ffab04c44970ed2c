//! Market data fetching
//!
//! Handles:
//! - Yahoo Finance API for spot quotes and call option chains

pub mod yahoo;

pub use yahoo::*;
