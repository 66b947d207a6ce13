use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Projected balance of every account at one month of the horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedPoint {
    pub date: NaiveDate,
    pub balance_by_account: HashMap<Uuid, f64>,
}

impl ProjectedPoint {
    /// Balance recorded for the account, or 0 when it is not in the snapshot.
    pub fn balance_for(&self, account_id: Uuid) -> f64 {
        self.balance_by_account
            .get(&account_id)
            .copied()
            .unwrap_or(0.0)
    }
}

/// One month of an installment plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPayment {
    pub month_start: NaiveDate,
    pub total_payment: f64,
    /// Account id to its share of this month's payment.
    pub breakdown: HashMap<Uuid, f64>,
}

/// Outcome of one projection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    /// One point per projected month, chronological, index 0 = first month.
    pub projected: Vec<ProjectedPoint>,
    /// One entry per installment month; empty without an installment plan.
    pub monthly_payments: Vec<MonthlyPayment>,
    pub alerts: Vec<String>,
    /// 0 (safe) to 100 (high risk).
    pub risk_index: u8,
}
