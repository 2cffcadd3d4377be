use std::fs;

use super::*;
use rust_decimal_macros::dec;

const SHIPPED_DEFAULTS: &str = include_str!("../../../config/default.toml");

const CONFIG_VARS: [&str; 6] = [
    "RUN_MODE",
    "FINTRACK__SERVER__PORT",
    "FINTRACK__SERVER__HOST",
    "FINTRACK__FINANCE__SAVINGS_RATE",
    "FINTRACK__FINANCE__SEED_DEMO_DATA",
    "FINTRACK__FINANCE__RECENT_TRANSACTIONS",
];

#[test]
fn test_defaults_without_sources() {
    let empty = tempfile::tempdir().unwrap();

    temp_env::with_vars_unset(CONFIG_VARS, || {
        let config = AppConfig::load_from(empty.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.finance.savings_rate, dec!(0.30));
        assert_eq!(config.finance.recent_transactions, 5);
        assert!(config.finance.seed_demo_data);
    });
}

#[test]
fn test_shipped_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), SHIPPED_DEFAULTS).unwrap();

    temp_env::with_vars_unset(CONFIG_VARS, || {
        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.finance.savings_rate, dec!(0.30));
        assert_eq!(config.finance.recent_transactions, 5);
    });
}

#[test]
fn test_run_mode_file_overrides_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), SHIPPED_DEFAULTS).unwrap();
    fs::write(
        dir.path().join("staging.toml"),
        "[server]\nport = 8443\n\n[finance]\nsavings_rate = \"0.45\"\n",
    )
    .unwrap();

    let vars = CONFIG_VARS.map(|name| (name, (name == "RUN_MODE").then_some("staging")));
    temp_env::with_vars(vars, || {
        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.server.port, 8443);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.finance.savings_rate, dec!(0.45));
        assert!(config.finance.seed_demo_data);
    });
}

#[test]
fn test_environment_overrides() {
    temp_env::with_vars(
        [
            ("RUN_MODE", None),
            ("FINTRACK__SERVER__PORT", Some("8081")),
            ("FINTRACK__FINANCE__SAVINGS_RATE", Some("0.25")),
            ("FINTRACK__FINANCE__SEED_DEMO_DATA", Some("false")),
            ("FINTRACK__FINANCE__RECENT_TRANSACTIONS", Some("10")),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 8081);
            assert_eq!(config.finance.savings_rate, dec!(0.25));
            assert!(!config.finance.seed_demo_data);
            assert_eq!(config.finance.recent_transactions, 10);
        },
    );
}

#[test]
fn test_bind_address() {
    let config = AppConfig::default();
    assert_eq!(config.bind_address(), "0.0.0.0:5000");
}
