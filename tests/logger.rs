use log::LevelFilter;
use showcase_store::config::LoggingConfig;
use showcase_store::logger;

#[test]
fn test_parse_level() {
    assert_eq!(logger::parse_level("info").unwrap(), LevelFilter::Info);
    assert_eq!(logger::parse_level(" DEBUG ").unwrap(), LevelFilter::Debug);
    assert_eq!(logger::parse_level("off").unwrap(), LevelFilter::Off);
    assert!(logger::parse_level("verbose").is_err());
}

#[test]
fn test_config_based_logging() {
    // Disabled logging installs nothing
    let disabled = LoggingConfig::default();
    assert!(!logger::init(&disabled).unwrap());
    assert!(logger::installed_level().is_none());

    // Enabled logging writes to the configured file
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("showcase.log");
    let enabled = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };
    assert!(logger::init(&enabled).unwrap());
    assert_eq!(logger::installed_level(), Some(LevelFilter::Debug));

    log::info!("Test message with file");
    log::logger().flush();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Test message with file"));
    assert!(content.contains("INFO"));

    // The global logger can only be installed once
    assert!(!logger::init(&enabled).unwrap());
}
