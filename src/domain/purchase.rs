use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchase the user is considering, optionally split into equal monthly
/// installments ("meses sin intereses").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedPurchase {
    pub id: Uuid,
    /// Account the purchase would be charged to.
    pub account_id: Uuid,
    /// Total price of the purchase.
    pub amount: f64,
    /// 0 or 1 = paid in full at once; 2+ = split into that many equal
    /// monthly payments.
    pub installment_months: u32,
    /// Labels the projected installment months; has no effect on amounts.
    pub anchor_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PlannedPurchase {
    /// Creates a purchase paid in full on the anchor date.
    pub fn new(account_id: Uuid, amount: f64, anchor_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount,
            installment_months: 0,
            anchor_date,
            title: None,
        }
    }

    /// Splits the purchase into `months` equal monthly installments.
    pub fn with_installments(mut self, months: u32) -> Self {
        self.installment_months = months;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the purchase is paid through a monthly installment plan.
    pub fn uses_installments(&self) -> bool {
        self.installment_months > 1
    }

    /// The equal monthly amount when installments are used.
    pub fn per_installment(&self) -> Option<f64> {
        if self.uses_installments() {
            Some(self.amount / self.installment_months as f64)
        } else {
            None
        }
    }
}
