//! Deskbank SDK — the high-level API the desktop shell drives.
//!
//! The shell owns all prompting and rendering, plus the session (which
//! account is currently logged in); [`Bank`] owns the collection and its
//! persistence. Every balance-changing call rewrites the backing file, so
//! the on-disk state always matches what the user last saw.
//!
//! # Quick Start
//!
//! ```ignore
//! use deskbank_sdk::{AccountId, AccountType, Bank, StoreConfig};
//!
//! let mut bank = Bank::open(StoreConfig::default())?;
//!
//! bank.create_account("A1", "Alice", "pw123", AccountType::Savings)?;
//!
//! let id = bank.login("A1", "pw123").expect("just created").id().clone();
//! println!("{}", bank.deposit(&id, 100.0)?);
//! println!("{}", bank.withdraw(&id, 30.0)?);
//!
//! let summary = bank.account_summary(&id).expect("logged in");
//! assert_eq!(summary.balance, 70.0);
//! ```

pub use deskbank_domain::{
    Account, AccountError, AccountId, AccountSummary, AccountType, CredentialHash,
};
pub use deskbank_store::{AccountStore, StoreConfig, StoreError};

use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced to the shell.
///
/// Domain failures carry a human-readable message the shell can show
/// verbatim; store failures are the fail-loud persistence path.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("unknown account: {id}")]
    UnknownAccount { id: AccountId },

    #[error("account error: {0}")]
    Account(#[from] AccountError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, BankError>;

/// The shell-facing facade over the account collection.
///
/// Stateless between calls apart from the in-memory collection: the session
/// (the currently-authenticated account) is the caller's to keep, usually as
/// the [`AccountId`] handed back by [`login`](Self::login).
pub struct Bank {
    store: AccountStore,
}

impl Bank {
    /// Open the bank over the configured backing file.
    pub fn open(config: StoreConfig) -> Result<Self> {
        Ok(Self {
            store: AccountStore::open(config)?,
        })
    }

    /// Create a new account and persist the collection.
    ///
    /// The id must be unused; on a clash nothing changes and nothing is
    /// written.
    pub fn create_account(
        &mut self,
        id: impl Into<String>,
        holder_name: impl Into<String>,
        password: &str,
        account_type: AccountType,
    ) -> Result<String> {
        let account = Account::open(AccountId::new(id), holder_name, password, account_type);
        let id = account.id().clone();
        self.store.register(account)?;
        self.store.save_all()?;
        info!(account = %id, %account_type, "account created");
        Ok("Account created successfully!".to_string())
    }

    /// Authenticate against an account.
    ///
    /// `None` covers both an unknown id and a wrong password; callers must
    /// not distinguish the two when reporting to the user.
    pub fn login(&self, id: &str, password: &str) -> Option<&Account> {
        let id = AccountId::new(id);
        match self.store.find_by_id(&id) {
            Some(account) if account.authenticate(password) => Some(account),
            _ => {
                debug!(account = %id, "login rejected");
                None
            }
        }
    }

    /// Deposit into the named account, then persist the collection.
    pub fn deposit(&mut self, id: &AccountId, amount: f64) -> Result<String> {
        let account = self
            .store
            .find_by_id_mut(id)
            .ok_or_else(|| BankError::UnknownAccount { id: id.clone() })?;
        let message = account.deposit(amount)?;
        self.store.save_all()?;
        debug!(account = %id, amount, "deposit applied");
        Ok(message)
    }

    /// Withdraw from the named account, then persist the collection.
    pub fn withdraw(&mut self, id: &AccountId, amount: f64) -> Result<String> {
        let account = self
            .store
            .find_by_id_mut(id)
            .ok_or_else(|| BankError::UnknownAccount { id: id.clone() })?;
        let message = account.withdraw(amount)?;
        self.store.save_all()?;
        debug!(account = %id, amount, "withdrawal applied");
        Ok(message)
    }

    /// Display snapshot of the named account, for the shell to render.
    pub fn account_summary(&self, id: &AccountId) -> Option<AccountSummary> {
        self.store.find_by_id(id).map(Account::summary)
    }

    /// Write the full collection to disk.
    ///
    /// Mutating calls already persist; this is for the shell to save
    /// explicitly, e.g. on exit.
    pub fn persist(&self) -> Result<()> {
        Ok(self.store.save_all()?)
    }

    /// The underlying store, read-only.
    pub fn store(&self) -> &AccountStore {
        &self.store
    }
}
