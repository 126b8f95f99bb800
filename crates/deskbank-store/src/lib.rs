//! Deskbank account store — the in-memory collection plus its file-backed
//! persistence.
//!
//! The store owns every [`Account`] for the process lifetime and rewrites the
//! whole collection to a single JSON file on save. The record schema is
//! explicit (named fields on both directions), and the credential hash is
//! part of it, so a saved file always reloads into the same collection.
//!
//! # Invariants
//!
//! 1. Account ids are unique across the collection
//! 2. A missing backing file is an empty collection, not an error
//! 3. Malformed file content fails loudly at load time
//! 4. Saves are atomic from a reader's perspective (write a sibling, rename)

pub mod config;

pub use config::StoreConfig;

use std::fs;
use std::path::{Path, PathBuf};

use deskbank_domain::{Account, AccountId};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration clash; recovered locally by callers.
    #[error("account id already exists: {id}")]
    DuplicateId { id: AccountId },

    /// Unreadable backing file or a failed write/rename; fatal.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Undecodable backing file; fatal at load time.
    #[error("malformed account file: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The collection of all accounts plus its backing file.
///
/// Single process, single in-memory copy; every mutation is followed by a
/// full-file rewrite, so the last writer wins across processes.
pub struct AccountStore {
    accounts: Vec<Account>,
    path: PathBuf,
}

impl AccountStore {
    /// Open the store, loading the backing file if it exists.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let accounts = load_all(&config.path)?;
        info!(
            path = %config.path.display(),
            count = accounts.len(),
            "account store opened"
        );
        Ok(Self {
            accounts,
            path: config.path,
        })
    }

    /// Serialize every account and rewrite the backing file.
    ///
    /// The full collection is written to a temporary sibling first and then
    /// renamed over the target, so a reader never observes a partial file.
    pub fn save_all(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.accounts)?;
        let tmp = PathBuf::from(format!("{}.tmp", self.path.display()));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(
            path = %self.path.display(),
            count = self.accounts.len(),
            "account store saved"
        );
        Ok(())
    }

    /// Find an account by id. Linear scan, first match.
    pub fn find_by_id(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    /// Mutable lookup for balance-changing operations.
    pub fn find_by_id_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id() == id)
    }

    /// Add a new account to the collection.
    ///
    /// A clashing id is rejected without touching the collection. Does not
    /// persist; callers decide when to [`save_all`](Self::save_all).
    pub fn register(&mut self, account: Account) -> Result<()> {
        if self.find_by_id(account.id()).is_some() {
            return Err(StoreError::DuplicateId {
                id: account.id().clone(),
            });
        }
        self.accounts.push(account);
        Ok(())
    }

    /// All accounts, in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read the full collection from `path`, or an empty one if the file does
/// not exist yet.
fn load_all(path: &Path) -> Result<Vec<Account>> {
    if !path.exists() {
        debug!(path = %path.display(), "no account file yet, starting empty");
        return Ok(Vec::new());
    }
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
