use finsim_core::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn defaults_match_the_documented_values() {
    let config = Config::default();

    assert_eq!(config.low_balance_threshold, 100.0);
    assert_eq!(config.default_horizon_months, 12);
    assert!(!config.currency.is_empty());
}

#[test]
fn load_returns_defaults_when_nothing_was_saved() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::at(dir.path()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::at(dir.path()).expect("manager");

    let config = Config {
        low_balance_threshold: 250.0,
        default_horizon_months: 24,
        currency: "USD".to_string(),
    };
    manager.save(&config).expect("save config");

    assert_eq!(manager.load().expect("load config"), config);
}
