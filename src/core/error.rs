//! Error types for the BSM chain pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BsmError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type BsmResult<T> = Result<T, BsmError>;

impl BsmError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
