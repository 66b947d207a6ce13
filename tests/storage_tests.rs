use finsim_core::domain::{Account, AccountKind};
use finsim_core::storage::AccountStore;
use tempfile::tempdir;

#[test]
fn load_is_empty_before_any_sync() {
    let dir = tempdir().expect("tempdir");
    let store = AccountStore::at(dir.path()).expect("store");

    assert!(store.load().expect("load").is_empty());
}

#[test]
fn save_then_load_round_trips_accounts() {
    let dir = tempdir().expect("tempdir");
    let store = AccountStore::at(dir.path()).expect("store");

    let accounts = vec![
        Account::new("Checking", AccountKind::Bank).with_balance(1250.5),
        Account::new("Card", AccountKind::CreditCard)
            .with_balance(430.0)
            .with_credit_limit(15_000.0),
    ];
    store.save(&accounts).expect("save accounts");

    let loaded = store.load().expect("load accounts");
    assert_eq!(loaded, accounts);
    assert_eq!(loaded[1].credit_limit, Some(15_000.0));
}

#[test]
fn save_overwrites_the_previous_snapshot() {
    let dir = tempdir().expect("tempdir");
    let store = AccountStore::at(dir.path()).expect("store");

    store
        .save(&[Account::new("Old", AccountKind::Bank)])
        .expect("first save");
    store
        .save(&[Account::new("New", AccountKind::Bank)])
        .expect("second save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "New");
}

#[test]
fn clear_removes_the_cache_file() {
    let dir = tempdir().expect("tempdir");
    let store = AccountStore::at(dir.path()).expect("store");

    store
        .save(&[Account::new("Checking", AccountKind::Bank)])
        .expect("save");
    assert!(store.path().exists());

    store.clear().expect("clear");
    assert!(!store.path().exists());
    assert!(store.load().expect("load").is_empty());

    // Clearing an already-empty store is fine.
    store.clear().expect("second clear");
}
