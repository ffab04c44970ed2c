//! Option type definitions
//!
//! The canonical Call/Put tag plus the token spellings accepted from
//! external sources.

use serde::{Deserialize, Serialize};

use super::error::{BsmError, BsmResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Parse an option-type token. Accepts exactly `C`, `c`, `Call`,
    /// `P`, `p`, `Put` (no trimming, no case folding beyond these).
    pub fn from_token(token: &str) -> BsmResult<Self> {
        match token {
            "C" | "c" | "Call" => Ok(OptionType::Call),
            "P" | "p" | "Put" => Ok(OptionType::Put),
            other => Err(BsmError::validation(format!(
                "option_type must be one of (C, c, Call, P, p, Put), got '{}'",
                other
            ))),
        }
    }
}
