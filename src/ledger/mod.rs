//! Recorded incomes and expenses, and the monthly net estimate derived
//! from them that feeds the projection engine.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{FinsimError, Result};

const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Whether a cash-flow entry adds to or draws from the user's funds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

/// A single recorded income or expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashflowEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub amount: f64,
    pub kind: EntryKind,
    /// Account the entry settled against, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
}

impl CashflowEntry {
    pub fn income(title: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(title, amount, date, EntryKind::Income)
    }

    pub fn expense(title: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(title, amount, date, EntryKind::Expense)
    }

    fn new(title: impl Into<String>, amount: f64, date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            category: None,
            amount,
            kind,
            account_id: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }
}

/// A single calendar month used as a reporting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(FinsimError::InvalidInput(format!(
                "month {} out of range",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The window covering the given date's calendar month.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Running record of incomes and expenses, used to estimate the recurring
/// monthly net cash flow handed to the projection engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashflowLedger {
    pub entries: Vec<CashflowEntry>,
}

impl CashflowLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: CashflowEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn income_in(&self, window: MonthWindow) -> Vec<&CashflowEntry> {
        self.filtered(window, EntryKind::Income)
    }

    pub fn expenses_in(&self, window: MonthWindow) -> Vec<&CashflowEntry> {
        self.filtered(window, EntryKind::Expense)
    }

    pub fn total_income(&self, window: MonthWindow) -> f64 {
        self.income_in(window).iter().map(|entry| entry.amount).sum()
    }

    pub fn total_spent(&self, window: MonthWindow) -> f64 {
        self.expenses_in(window)
            .iter()
            .map(|entry| entry.amount)
            .sum()
    }

    /// Income minus expense for the month; the engine's monthly net estimate.
    pub fn net_for(&self, window: MonthWindow) -> f64 {
        self.total_income(window) - self.total_spent(window)
    }

    /// Spending per category for the month, largest first.
    pub fn spent_by_category(&self, window: MonthWindow) -> Vec<(String, f64)> {
        let mut grouped: HashMap<String, f64> = HashMap::new();
        for entry in self.expenses_in(window) {
            let label = entry
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string());
            *grouped.entry(label).or_insert(0.0) += entry.amount;
        }
        let mut breakdown: Vec<(String, f64)> = grouped.into_iter().collect();
        breakdown.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        breakdown
    }

    fn filtered(&self, window: MonthWindow, kind: EntryKind) -> Vec<&CashflowEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind && window.contains(entry.date))
            .collect()
    }
}
