use approx::assert_relative_eq;
use chrono::NaiveDate;
use finsim_core::ledger::{CashflowEntry, CashflowLedger, MonthWindow};

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

fn march() -> MonthWindow {
    MonthWindow::new(2025, 3).unwrap()
}

fn sample_ledger() -> CashflowLedger {
    let mut ledger = CashflowLedger::new();
    ledger.add(CashflowEntry::income("Salary", 1000.0, day(2025, 3, 5)));
    ledger.add(CashflowEntry::expense("Rent", 400.0, day(2025, 3, 20)).with_category("Housing"));
    ledger.add(CashflowEntry::expense("Groceries", 100.0, day(2025, 4, 2)).with_category("Food"));
    ledger
}

#[test]
fn month_window_rejects_out_of_range_months() {
    assert!(MonthWindow::new(2025, 0).is_err());
    assert!(MonthWindow::new(2025, 13).is_err());
    assert!(MonthWindow::new(2025, 12).is_ok());
}

#[test]
fn month_window_covers_exactly_one_calendar_month() {
    let window = march();
    assert_eq!(window.start(), day(2025, 3, 1));
    assert!(window.contains(day(2025, 3, 1)));
    assert!(window.contains(day(2025, 3, 31)));
    assert!(!window.contains(day(2025, 4, 1)));
    assert!(!window.contains(day(2025, 2, 28)));
}

#[test]
fn containing_picks_the_date_month() {
    let window = MonthWindow::containing(day(2025, 7, 19));
    assert_eq!(window, MonthWindow::new(2025, 7).unwrap());
}

#[test]
fn net_for_sums_only_entries_in_the_window() {
    let ledger = sample_ledger();

    assert_relative_eq!(ledger.net_for(march()), 600.0, epsilon = 1e-9);
    assert_relative_eq!(
        ledger.net_for(MonthWindow::new(2025, 4).unwrap()),
        -100.0,
        epsilon = 1e-9
    );
}

#[test]
fn totals_split_income_and_spending() {
    let ledger = sample_ledger();

    assert_relative_eq!(ledger.total_income(march()), 1000.0, epsilon = 1e-9);
    assert_relative_eq!(ledger.total_spent(march()), 400.0, epsilon = 1e-9);
    assert_eq!(ledger.income_in(march()).len(), 1);
    assert_eq!(ledger.expenses_in(march()).len(), 1);
    assert_eq!(ledger.entry_count(), 3);
}

#[test]
fn category_breakdown_sorts_largest_first() {
    let mut ledger = CashflowLedger::new();
    ledger.add(CashflowEntry::expense("Rent", 900.0, day(2025, 3, 1)).with_category("Housing"));
    ledger.add(CashflowEntry::expense("Groceries", 200.0, day(2025, 3, 8)).with_category("Food"));
    ledger.add(CashflowEntry::expense("Takeout", 100.0, day(2025, 3, 9)).with_category("Food"));
    ledger.add(CashflowEntry::expense("Misc", 50.0, day(2025, 3, 12)));

    let breakdown = ledger.spent_by_category(march());

    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[0].0, "Housing");
    assert_relative_eq!(breakdown[0].1, 900.0, epsilon = 1e-9);
    assert_eq!(breakdown[1].0, "Food");
    assert_relative_eq!(breakdown[1].1, 300.0, epsilon = 1e-9);
    assert_eq!(breakdown[2].0, "Uncategorized");
    assert_relative_eq!(breakdown[2].1, 50.0, epsilon = 1e-9);
}

#[test]
fn entries_can_be_linked_to_an_account() {
    let account_id = uuid::Uuid::new_v4();
    let entry = CashflowEntry::income("Refund", 25.0, day(2025, 3, 3)).with_account(account_id);
    assert_eq!(entry.account_id, Some(account_id));
}
