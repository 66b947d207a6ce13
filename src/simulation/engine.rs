use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{Account, AccountKind, PlannedPurchase};

use super::time::shift_month;
use super::types::{MonthlyPayment, ProjectedPoint, SimulationResult};

const VERY_HIGH_UTILIZATION: f64 = 0.95;
const ELEVATED_UTILIZATION: f64 = 0.80;
const HEAVY_BURDEN_SHARE: f64 = 0.4;

const ACCOUNT_NOT_FOUND_ALERT: &str = "Selected account not found";

/// Projects account balances `months` ahead for a planned purchase,
/// starting from today.
///
/// `monthly_net` is the recurring income-minus-expense estimate applied each
/// month; `low_balance_threshold` is the bank balance below which cautionary
/// alerts fire. Never returns an error and never panics: an unknown purchase
/// account yields an empty projection with a single alert and the maximum
/// risk index.
pub fn simulate(
    accounts: &[Account],
    purchase: &PlannedPurchase,
    monthly_net: f64,
    months: u32,
    low_balance_threshold: f64,
) -> SimulationResult {
    simulate_from(
        Utc::now().date_naive(),
        accounts,
        purchase,
        monthly_net,
        months,
        low_balance_threshold,
    )
}

/// Same as [`simulate`], with an explicit starting month label. Results are
/// a pure function of the arguments.
pub fn simulate_from(
    today: NaiveDate,
    accounts: &[Account],
    purchase: &PlannedPurchase,
    monthly_net: f64,
    months: u32,
    low_balance_threshold: f64,
) -> SimulationResult {
    tracing::debug!(
        months,
        monthly_net,
        amount = purchase.amount,
        installments = purchase.installment_months,
        "running purchase projection"
    );

    let mut alerts: Vec<String> = Vec::new();

    let mut balances: HashMap<Uuid, f64> = accounts
        .iter()
        .map(|account| (account.id, account.balance))
        .collect();

    let account = match accounts
        .iter()
        .find(|account| account.id == purchase.account_id)
    {
        Some(account) => account,
        None => {
            tracing::warn!(account_id = %purchase.account_id, "purchase references unknown account");
            return SimulationResult {
                projected: Vec::new(),
                monthly_payments: Vec::new(),
                alerts: vec![ACCOUNT_NOT_FOUND_ALERT.to_string()],
                risk_index: 100,
            };
        }
    };

    // One-shot purchases hit the balance right away. Installment plans are
    // modeled only through their monthly outflow below, so the principal
    // never lands on the owed balance.
    if !purchase.uses_installments() {
        match account.kind {
            AccountKind::Bank => *balances.entry(account.id).or_insert(0.0) -= purchase.amount,
            AccountKind::CreditCard => {
                *balances.entry(account.id).or_insert(0.0) += purchase.amount
            }
        }
    }

    push_immediate_alerts(&mut alerts, account, &balances, low_balance_threshold);

    let per_installment = purchase.per_installment().unwrap_or(0.0);
    let mut monthly_payments: Vec<MonthlyPayment> = Vec::new();
    if purchase.uses_installments() {
        for index in 0..purchase.installment_months {
            let month_start = shift_month(purchase.anchor_date, index as i32);
            let breakdown = HashMap::from([(purchase.account_id, per_installment)]);
            monthly_payments.push(MonthlyPayment {
                month_start,
                total_payment: per_installment,
                breakdown,
            });
        }
    }

    let first_bank = accounts
        .iter()
        .find(|account| account.is_bank())
        .map(|account| account.id);
    let first_credit_card = accounts
        .iter()
        .find(|account| account.is_credit_card())
        .map(|account| account.id);

    let mut projected: Vec<ProjectedPoint> = Vec::with_capacity(months as usize);
    for m in 0..months {
        let month_date = shift_month(today, m as i32);

        // Net cash flow lands on one representative account, not spread
        // proportionally: the first bank account in registry order, or the
        // first credit card (reducing what is owed) when no bank exists.
        if monthly_net != 0.0 {
            if let Some(bank_id) = first_bank {
                *balances.entry(bank_id).or_insert(0.0) += monthly_net;
            } else if let Some(card_id) = first_credit_card {
                *balances.entry(card_id).or_insert(0.0) -= monthly_net;
            }
        }

        if purchase.uses_installments() && m < purchase.installment_months {
            let payer = first_bank.unwrap_or(purchase.account_id);
            *balances.entry(payer).or_insert(0.0) -= per_installment;
        }

        projected.push(ProjectedPoint {
            date: month_date,
            balance_by_account: balances.clone(),
        });
    }

    let risk_index = score_risk(accounts, &projected, months, low_balance_threshold);

    if !monthly_payments.is_empty() {
        let total: f64 = monthly_payments
            .iter()
            .map(|payment| payment.total_payment)
            .sum();
        let average_monthly = total / purchase.installment_months as f64;
        if monthly_net > 0.0 && average_monthly > monthly_net * HEAVY_BURDEN_SHARE {
            alerts.push(format!(
                "Installment payments may represent a heavy monthly burden ({:.2}/month)",
                average_monthly
            ));
        }
    }

    SimulationResult {
        projected,
        monthly_payments,
        alerts,
        risk_index,
    }
}

/// Alerts computed once from the post-purchase snapshot, scoped to the
/// purchase account.
fn push_immediate_alerts(
    alerts: &mut Vec<String>,
    account: &Account,
    balances: &HashMap<Uuid, f64>,
    low_balance_threshold: f64,
) {
    let balance = balances.get(&account.id).copied().unwrap_or(0.0);
    if account.is_credit_card() {
        if let Some(limit) = account.credit_limit {
            if balance > limit {
                alerts.push(format!(
                    "Purchase exceeds the credit limit of {}",
                    account.name
                ));
            }
            // A non-positive limit counts as fully utilized here.
            let utilization = if limit > 0.0 { balance / limit } else { 1.0 };
            if utilization > VERY_HIGH_UTILIZATION {
                alerts.push(format!(
                    "Very high credit utilization: {}% on {}",
                    (utilization * 100.0) as i64,
                    account.name
                ));
            }
        }
    } else if balance < 0.0 {
        alerts.push(format!(
            "Purchase would leave {} with a negative balance: {:.2}",
            account.name, balance
        ));
    } else if balance < low_balance_threshold {
        alerts.push(format!("Low balance on {}: {:.2}", account.name, balance));
    }
}

/// Counts threshold crossings over every projected month and every account,
/// then maps the tally onto the bounded 0-100 index.
fn score_risk(
    accounts: &[Account],
    projected: &[ProjectedPoint],
    months: u32,
    low_balance_threshold: f64,
) -> u8 {
    let mut critical_count: u32 = 0;
    for point in projected {
        for account in accounts {
            let balance = point.balance_for(account.id);
            match account.kind {
                AccountKind::Bank => {
                    if balance < 0.0 {
                        critical_count += 2;
                    } else if balance < low_balance_threshold {
                        critical_count += 1;
                    }
                }
                AccountKind::CreditCard => {
                    if let Some(limit) = account.credit_limit {
                        // Unlike the immediate check, a non-positive limit
                        // contributes nothing to the score.
                        let utilization = if limit > 0.0 { balance / limit } else { 0.0 };
                        if utilization > VERY_HIGH_UTILIZATION {
                            critical_count += 2;
                        } else if utilization > ELEVATED_UTILIZATION {
                            critical_count += 1;
                        }
                    }
                }
            }
        }
    }

    let max_possible = (months as usize * accounts.len() * 2).max(1);
    let raw = critical_count as f64 / max_possible as f64;
    (raw * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, d).unwrap()
    }

    #[test]
    fn risk_score_is_zero_without_projected_months() {
        let accounts = vec![Account::new("Checking", AccountKind::Bank).with_balance(500.0)];
        assert_eq!(score_risk(&accounts, &[], 0, 100.0), 0);
    }

    #[test]
    fn card_without_limit_never_contributes_to_risk() {
        let card = Account::new("Card", AccountKind::CreditCard).with_balance(10_000.0);
        let point = ProjectedPoint {
            date: day(2025, 1, 1),
            balance_by_account: HashMap::from([(card.id, 10_000.0)]),
        };
        assert_eq!(score_risk(&[card], &[point], 1, 100.0), 0);
    }

    #[test]
    fn overdrawn_bank_month_scores_double() {
        let bank = Account::new("Checking", AccountKind::Bank);
        let point = ProjectedPoint {
            date: day(2025, 1, 1),
            balance_by_account: HashMap::from([(bank.id, -10.0)]),
        };
        // 2 of a possible 2 -> full score.
        assert_eq!(score_risk(&[bank], &[point], 1, 100.0), 100);
    }
}
