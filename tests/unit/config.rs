//! Unit tests for batch configuration

use paperdesk::config::BatchConfig;
use paperdesk::logging::is_production;
use paperdesk::signals::engine::DEFAULT_HISTORY_LIMIT;

#[test]
fn test_default_batch_config() {
    let config = BatchConfig::default();
    assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(config.history_limit, 200);
    assert!(config.symbols.is_empty());
    assert!(!config.dry_run);
}

#[test]
fn test_empty_symbol_list_includes_everything() {
    let config = BatchConfig::default();
    assert!(config.includes("AAPL"));
    assert!(config.includes("anything"));
}

#[test]
fn test_symbol_filter_is_case_insensitive() {
    let config = BatchConfig::default().with_symbols(vec!["aapl".to_string(), "MSFT".to_string()]);
    assert!(config.includes("AAPL"));
    assert!(config.includes("msft"));
    assert!(!config.includes("GOOG"));
}

#[test]
fn test_builders_override_fields() {
    let config = BatchConfig::default()
        .with_history_limit(60)
        .with_dry_run(true);
    assert_eq!(config.history_limit, 60);
    assert!(config.dry_run);
}

#[test]
fn test_production_detection() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));
}
