//! The account entity: identity, credentials, balance, and history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::credential::CredentialHash;
use crate::error::AccountError;

/// Caller-assigned account identifier.
///
/// Ids are chosen by the account holder at creation time; the core never
/// generates or rewrites them. Uniqueness across the collection is enforced
/// by the store at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of account being held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Savings,
    Checking,
}

impl AccountType {
    /// Stable name, used both in the persisted file and for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Checking => "Checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single bank account.
///
/// Fields are private: the balance and history change only through
/// [`deposit`](Self::deposit) and [`withdraw`](Self::withdraw), which enforce
/// the crate invariants (no negative balance, exactly one log entry per
/// successful mutation, no partial failure). The full record — including the
/// credential hash — round-trips through serde; display snapshots go through
/// [`summary`](Self::summary) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    credential_hash: CredentialHash,
    balance: f64,
    account_type: AccountType,
    transactions: Vec<String>,
}

impl Account {
    /// Open a new account with a zero balance and an empty history.
    ///
    /// The plaintext password is hashed immediately and never retained.
    pub fn open(
        id: AccountId,
        holder_name: impl Into<String>,
        password: &str,
        account_type: AccountType,
    ) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            credential_hash: CredentialHash::derive(password),
            balance: 0.0,
            account_type,
            transactions: Vec::new(),
        }
    }

    /// Check a candidate password against the stored credential hash.
    pub fn authenticate(&self, password: &str) -> bool {
        self.credential_hash.matches(password)
    }

    /// Deposit `amount` into the account.
    ///
    /// Succeeds iff `amount > 0`; increases the balance, appends one history
    /// entry, and returns a confirmation carrying the new balance. On failure
    /// nothing changes.
    pub fn deposit(&mut self, amount: f64) -> Result<String, AccountError> {
        // NaN fails this comparison and is rejected with the rest
        if !(amount > 0.0) {
            return Err(AccountError::InvalidDepositAmount { amount });
        }
        self.balance += amount;
        self.transactions.push(format!("Deposit: {}", amount));
        Ok(format!("Deposit successful! New balance: {}", self.balance))
    }

    /// Withdraw `amount` from the account.
    ///
    /// Succeeds iff `0 < amount <= balance`, so the balance never goes
    /// negative. On failure nothing changes.
    pub fn withdraw(&mut self, amount: f64) -> Result<String, AccountError> {
        if !(amount > 0.0) {
            return Err(AccountError::InvalidWithdrawalAmount { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.transactions.push(format!("Withdraw: {}", amount));
        Ok(format!("Withdrawal successful! New balance: {}", self.balance))
    }

    /// Snapshot of the displayable fields for the shell.
    ///
    /// The credential hash is deliberately not part of the snapshot.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            holder_name: self.holder_name.clone(),
            balance: self.balance,
            account_type: self.account_type,
            transactions: self.transactions.clone(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Full history, oldest first.
    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    pub fn credential_hash(&self) -> &CredentialHash {
        &self.credential_hash
    }
}

/// Display snapshot of an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder_name: String,
    pub balance: f64,
    pub account_type: AccountType,
    pub transactions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Account {
        Account::open(AccountId::new("A1"), "Alice", "pw123", AccountType::Savings)
    }

    #[test]
    fn test_open_starts_at_zero() {
        let account = alice();
        assert_eq!(account.balance(), 0.0);
        assert!(account.transactions().is_empty());
        assert_eq!(account.account_type(), AccountType::Savings);
        assert_eq!(account.holder_name(), "Alice");
    }

    #[test]
    fn test_authenticate() {
        let account = alice();
        assert!(account.authenticate("pw123"));
        assert!(!account.authenticate("wrongpw"));
    }

    #[test]
    fn test_deposit_success() {
        let mut account = alice();
        let message = account.deposit(100.0).unwrap();
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.transactions(), ["Deposit: 100"]);
        assert!(message.contains("100"));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = alice();
        assert!(matches!(
            account.deposit(0.0),
            Err(AccountError::InvalidDepositAmount { .. })
        ));
        assert!(matches!(
            account.deposit(-5.0),
            Err(AccountError::InvalidDepositAmount { .. })
        ));
        assert!(account.deposit(f64::NAN).is_err());
        assert_eq!(account.balance(), 0.0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_withdraw_success() {
        let mut account = alice();
        account.deposit(100.0).unwrap();
        let message = account.withdraw(30.0).unwrap();
        assert_eq!(account.balance(), 70.0);
        assert_eq!(account.transactions(), ["Deposit: 100", "Withdraw: 30"]);
        assert!(message.contains("70"));
    }

    #[test]
    fn test_withdraw_insufficient_balance() {
        let mut account = alice();
        account.deposit(100.0).unwrap();
        account.withdraw(30.0).unwrap();
        let result = account.withdraw(1000.0);
        assert!(matches!(
            result,
            Err(AccountError::InsufficientBalance { .. })
        ));
        // unchanged, including the history
        assert_eq!(account.balance(), 70.0);
        assert_eq!(account.transactions().len(), 2);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = alice();
        account.deposit(50.0).unwrap();
        assert!(matches!(
            account.withdraw(0.0),
            Err(AccountError::InvalidWithdrawalAmount { .. })
        ));
        assert!(matches!(
            account.withdraw(-1.0),
            Err(AccountError::InvalidWithdrawalAmount { .. })
        ));
        assert_eq!(account.balance(), 50.0);
    }

    #[test]
    fn test_withdraw_full_balance() {
        let mut account = alice();
        account.deposit(25.5).unwrap();
        account.withdraw(25.5).unwrap();
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_summary_carries_everything_but_the_hash() {
        let mut account = alice();
        account.deposit(100.0).unwrap();
        let summary = account.summary();
        assert_eq!(summary.id, AccountId::new("A1"));
        assert_eq!(summary.holder_name, "Alice");
        assert_eq!(summary.balance, 100.0);
        assert_eq!(summary.transactions, ["Deposit: 100"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("credential_hash").is_none());
    }

    #[test]
    fn test_record_schema_includes_the_hash() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["id"], "A1");
        assert_eq!(json["account_type"], "Savings");
        assert_eq!(
            json["credential_hash"],
            "23d47445adfb8991789b459b6ba1b974d727d310aa9d80b7c2875b9430c0ba25"
        );
    }

    #[test]
    fn test_account_type_display() {
        assert_eq!(AccountType::Savings.to_string(), "Savings");
        assert_eq!(AccountType::Checking.to_string(), "Checking");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn deposit_increases_balance_by_exactly_the_amount(
                amount in 0.01f64..1_000_000.0,
            ) {
                let mut account = alice();
                let before = account.balance();
                account.deposit(amount).unwrap();
                prop_assert_eq!(account.balance(), before + amount);
                prop_assert_eq!(account.transactions().len(), 1);
            }

            #[test]
            fn withdraw_returns_the_balance_to_where_it_was(
                amount in 0.01f64..1_000_000.0,
            ) {
                let mut account = alice();
                account.deposit(amount).unwrap();
                account.withdraw(amount).unwrap();
                prop_assert_eq!(account.balance(), 0.0);
                prop_assert_eq!(account.transactions().len(), 2);
            }

            #[test]
            fn overdraw_fails_and_changes_nothing(
                amount in 0.01f64..1_000_000.0,
            ) {
                let mut account = alice();
                account.deposit(amount).unwrap();
                prop_assert!(account.withdraw(amount * 2.0).is_err());
                prop_assert_eq!(account.balance(), amount);
                prop_assert_eq!(account.transactions().len(), 1);
            }
        }
    }
}
