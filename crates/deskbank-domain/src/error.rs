//! Domain error types.

use thiserror::Error;

/// Failures from account operations.
///
/// These are recovered locally by callers and surfaced as messages; the
/// operation that produced them made no state change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("invalid deposit amount: {amount}")]
    InvalidDepositAmount { amount: f64 },

    #[error("invalid withdrawal amount: {amount}")]
    InvalidWithdrawalAmount { amount: f64 },

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },
}
