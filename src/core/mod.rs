//! Core data types for the BSM chain pricer
//!
//! Defines fundamental types:
//! - OptionType: Call/Put tag and token parsing
//! - RawOptionInput / OptionParameters: parameter validation
//! - ChainRow: one contract of an option-chain snapshot
//! - BsmError: error taxonomy

pub mod error;
pub mod option;
pub mod params;
pub mod quote;

pub use error::*;
pub use option::*;
pub use params::*;
pub use quote::*;
