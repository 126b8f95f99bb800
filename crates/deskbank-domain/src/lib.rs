//! Deskbank domain types — accounts, credentials, and balance rules.
//!
//! The account entity here is:
//! - Id-keyed by a caller-assigned string (never generated by the core)
//! - Credential-protected (SHA-256 digest, plaintext never retained)
//! - Append-only in its transaction history
//!
//! # Invariants
//!
//! 1. The balance never goes negative through a withdrawal
//! 2. Every successful deposit/withdrawal appends exactly one log entry
//! 3. Failed operations leave no trace in balance or history
//!
//! Persistence is the caller's concern; everything in this crate mutates
//! in-memory state only.

pub mod account;
pub mod credential;
pub mod error;

pub use account::{Account, AccountId, AccountSummary, AccountType};
pub use credential::CredentialHash;
pub use error::AccountError;
