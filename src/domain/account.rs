use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A financial account known to the app: a bank account holding available
/// funds, or a credit card tracking the amount currently owed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    /// Bank: available funds (negative = overdraft).
    /// Credit card: amount owed; purchases increase it.
    pub balance: f64,
    /// Credit cards only. `None` means no known limit, so utilization
    /// is not tracked for the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
}

impl Account {
    /// Creates an account with a zero balance and no credit limit.
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            balance: 0.0,
            credit_limit: None,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn is_bank(&self) -> bool {
        self.kind == AccountKind::Bank
    }

    pub fn is_credit_card(&self) -> bool {
        self.kind == AccountKind::CreditCard
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.name, self.kind)
    }
}

/// Enumerates the supported account classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Bank,
    CreditCard,
}
