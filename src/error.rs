use std::fmt::Display;

use thiserror::Error;

/// Errors reported by the change-making algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The amount is negative.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// No denominations were supplied.
    #[error("Denomination set is empty")]
    EmptyDenominationSet,

    /// A denomination is zero or negative.
    #[error("Invalid denomination: {0}")]
    InvalidDenomination(String),

    /// No combination of the denominations sums to the amount.
    #[error("Unreachable amount: {0}")]
    UnreachableAmount(String),

    /// The amount cannot index an in-memory table.
    #[error("Amount too large: {0}")]
    AmountTooLarge(String),
}

impl ChangeError {
    pub fn invalid_amount(amount: impl Display) -> Self {
        ChangeError::InvalidAmount(amount.to_string())
    }

    pub fn invalid_denomination(coin: impl Display) -> Self {
        ChangeError::InvalidDenomination(coin.to_string())
    }

    pub fn unreachable_amount(amount: impl Display) -> Self {
        ChangeError::UnreachableAmount(amount.to_string())
    }

    pub fn amount_too_large(amount: impl Display) -> Self {
        ChangeError::AmountTooLarge(amount.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChangeError>;
