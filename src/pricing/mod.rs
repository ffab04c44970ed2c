//! Chain-level pricing pipeline
//!
//! Handles:
//! - Batch pricing of a chain snapshot (per-row failure isolation)
//! - Deviation analysis of model vs market prices
//! - Report rendering

pub mod batch;
pub mod deviation;
pub mod report;

pub use batch::*;
pub use deviation::*;
pub use report::*;
