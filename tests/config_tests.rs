mod support;

use purchase_ledger::application::forecast::SeriesOrder;
use purchase_ledger::error::{ConfigError, Error};
use purchase_ledger::infrastructure::config::settings::Config;

use support::files::config_file;

#[test]
fn full_config_loads() {
    let file = config_file(
        r#"
[logging]
level = "debug"
format = "json"

[forecast]
window_days = 60
fit_timeout_ms = 250
max_iterations = 100
series_order = "oldest_first"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.forecast.window_days, 60);
    assert_eq!(config.forecast.fit_timeout().as_millis(), 250);
    assert_eq!(config.forecast.max_iterations, 100);
    assert_eq!(config.forecast.series_order, SeriesOrder::OldestFirst);
}

#[test]
fn config_rejects_unknown_log_format() {
    let file = config_file("[logging]\nformat = \"xml\"\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(config) => panic!(
            "Expected format to be rejected, got {}",
            config.logging.format
        ),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let file = config_file("[forecast]\nfit_timeout_ms = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "forecast.fit_timeout_ms",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_iterations() {
    let file = config_file("[forecast]\nmax_iterations = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "forecast.max_iterations",
            ..
        }))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = config_file("[forecast\nwindow_days = 3\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn explicit_missing_file_is_a_read_error() {
    assert!(matches!(
        Config::load("/nonexistent/purchase-ledger/config.toml"),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
