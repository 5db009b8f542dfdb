use showcase_store::config::{BackendKind, Config};
use showcase_store::constants::DEFAULT_DATABASE_URL;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.backend, BackendKind::Memory);
    assert_eq!(config.storage.database_url, DEFAULT_DATABASE_URL);
    assert!(config.storage.seed_sample_data);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Database backend needs a sqlite URL
    config.storage.backend = BackendKind::Database;
    config.storage.database_url = "postgres://localhost/showcase".to_string();
    assert!(config.validate().is_err());

    config.storage.database_url = "  ".to_string();
    assert!(config.validate().is_err());

    // The memory backend ignores the URL
    config.storage.backend = BackendKind::Memory;
    assert!(config.validate().is_ok());

    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("backend = \"memory\""));
    assert!(toml_str.contains("seed_sample_data = true"));
    assert!(!toml_str.contains("file ="));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[storage]
backend = "database"

[logging]
enabled = true
file = "/tmp/showcase.log"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.storage.backend, BackendKind::Database);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.file.as_deref(), Some(std::path::Path::new("/tmp/showcase.log")));

    // Unspecified values use defaults
    assert_eq!(config.storage.database_url, DEFAULT_DATABASE_URL);
    assert!(config.storage.seed_sample_data);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.storage.backend, default_config.storage.backend);
    assert_eq!(config.storage.database_url, default_config.storage.database_url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_unknown_backend_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[storage]\nbackend = \"redis\"\n");
    assert!(result.is_err());
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("showcase.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Showcase Store Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.storage.backend, BackendKind::Memory);
    assert_eq!(loaded.logging.level, "info");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showcase.toml");
    std::fs::write(&path, "[storage]\nbackend = \"database\"\ndatabase_url = \"mysql://x\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_working_directory_file_takes_precedence() {
    let candidates = Config::candidate_paths();
    assert_eq!(candidates[0], std::path::PathBuf::from("showcase.toml"));
    if let Ok(user_config) = Config::get_default_config_path() {
        assert_eq!(candidates.last(), Some(&user_config));
        assert!(user_config.ends_with("showcase-store/config.toml"));
    }
}
