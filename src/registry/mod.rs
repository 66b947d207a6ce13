use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Account;

/// Ordered collection of the accounts known to the app.
///
/// Order is a stable contract: accounts keep their insertion position, and
/// the engine's "first bank account" policies depend on it. The registry
/// holds no projections or alerts; the engine works on a cloned snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Inserts the account, or replaces the entry with the same id in place.
    pub fn upsert(&mut self, account: Account) -> Uuid {
        let id = account.id;
        match self.accounts.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = account,
            None => self.accounts.push(account),
        }
        id
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        self.accounts.len() != before
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Accounts in their stable insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Replaces the whole registry with a freshly synced account list.
    pub fn replace_all(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Clones the current accounts for a self-contained simulation call.
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
