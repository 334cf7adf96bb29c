use axion_core::config::*;
use std::env;
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());

    // 验证默认值
    assert_eq!(config.api.bind_address, "0.0.0.0:8000");
    assert_eq!(config.api.service_name, "AI Brain");
    assert_eq!(config.scoring.preset, "three_factor");
    assert_eq!(config.scoring.max_workers_per_request, 1000);
    assert!(config.scoring.weights.is_none());
    assert!(config.observability.score_trace_enabled);
}

#[test]
fn test_config_from_toml() {
    let toml_content = r#"
[api]
bind_address = "127.0.0.1:9090"
service_name = "recommender-test"

[scoring]
preset = "two_factor"
proficiency_scale = 5.0
max_workers_per_request = 50

[scoring.weights]
skill = 0.7
fatigue = 0.3

[scoring.default_task_location]
x = 10.0
y = 20.0

[observability]
log_format = "json"
score_trace_enabled = false
"#;

    let config = AppConfig::from_toml(toml_content).unwrap();
    assert_eq!(config.api.bind_address, "127.0.0.1:9090");
    assert_eq!(config.api.service_name, "recommender-test");
    // 未出现的字段使用默认值
    assert!(config.api.cors_enabled);
    assert_eq!(config.scoring.preset, "two_factor");
    assert_eq!(config.scoring.proficiency_scale, Some(5.0));
    assert_eq!(
        config.scoring.weights,
        Some(WeightsConfig {
            skill: 0.7,
            fatigue: 0.3,
            distance: 0.0
        })
    );
    assert_eq!(
        config.scoring.default_task_location,
        Some(LocationConfig { x: 10.0, y: 20.0 })
    );
    assert_eq!(config.scoring.max_workers_per_request, 50);
    assert_eq!(config.observability.log_format, "json");
    assert!(!config.observability.score_trace_enabled);
}

#[test]
fn test_config_roundtrip_through_toml() {
    let config = AppConfig::default();
    let toml_str = config.to_toml().unwrap();
    let parsed = AppConfig::from_toml(&toml_str).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_invalid_bind_address() {
    let toml_content = r#"
[api]
bind_address = "localhost"
"#;
    let result = AppConfig::from_toml(toml_content);
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_format() {
    let toml_content = r#"
[observability]
log_format = "xml"
"#;
    let result = AppConfig::from_toml(toml_content);
    assert!(result.is_err());
}

#[test]
fn test_zero_worker_limit_rejected() {
    let mut config = AppConfig::default();
    config.scoring.max_workers_per_request = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_missing_explicit_file() {
    let result = AppConfig::load(Some("/definitely/not/here/axion.toml"));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("配置文件不存在"));
}

#[test]
fn test_load_from_file() {
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    fs::write(
        temp_file.path(),
        r#"
[api]
bind_address = "127.0.0.1:7001"

[scoring]
preset = "two_factor"
"#,
    )
    .unwrap();

    let config = AppConfig::load(temp_file.path().to_str()).unwrap();
    assert_eq!(config.api.bind_address, "127.0.0.1:7001");
    assert_eq!(config.scoring.preset, "two_factor");
}

#[test]
fn test_environment_override() {
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    fs::write(
        temp_file.path(),
        r#"
[scoring]
max_workers_per_request = 10
"#,
    )
    .unwrap();

    env::set_var("AXION_SCORING__MAX_WORKERS_PER_REQUEST", "250");
    let result = AppConfig::load(temp_file.path().to_str());
    env::remove_var("AXION_SCORING__MAX_WORKERS_PER_REQUEST");

    let config = result.unwrap();
    assert_eq!(config.scoring.max_workers_per_request, 250);
}
