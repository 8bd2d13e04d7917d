use std::io::Write;
use tempfile::NamedTempFile;
use crate::config::{AgentParameters, QLossConfig};
use crate::loss::LossType;

#[test]
fn test_config_defaults() {
    let config = QLossConfig::from_json("{}").unwrap();
    assert_eq!(config, QLossConfig::default());
    assert_eq!(config.loss_type, "mean_squared_error");
    assert_eq!(config.loss_weight, 1.0);
}

#[test]
fn test_config_from_json() {
    let config = QLossConfig::from_json(r#"{"loss_type": "huber", "loss_weight": 0.3}"#).unwrap();
    assert_eq!(config, QLossConfig::new(LossType::Huber, 0.3));

    // Unknown selectors are kept as text and rejected when the loss is built
    let config = QLossConfig::from_json(r#"{"loss_type": "smooth_l1"}"#).unwrap();
    assert_eq!(config.loss_type, "smooth_l1");

    assert!(QLossConfig::from_json("not json").is_err());
}

#[test]
fn test_config_file_round_trip() {
    let file = NamedTempFile::new().unwrap();
    let config = QLossConfig::new(LossType::Huber, 0.75);
    config.save(file.path()).unwrap();

    let loaded = QLossConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_from_hand_written_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"loss_type\": \"mse\", \"loss_weight\": 2.0}}").unwrap();

    let config = QLossConfig::from_file(file.path()).unwrap();
    assert_eq!(config.loss_type.parse::<LossType>().unwrap(), LossType::MeanSquaredError);
    assert_eq!(config.loss_weight, 2.0);
}

#[test]
fn test_missing_config_file() {
    let result = QLossConfig::from_file("/nonexistent/q_loss.json");
    assert!(matches!(result, Err(crate::error::QLossError::Io(_))));
}

#[test]
fn test_loss_type_serde() {
    assert_eq!(serde_json::to_string(&LossType::Huber).unwrap(), "\"huber\"");
    assert_eq!(serde_json::from_str::<LossType>("\"mse\"").unwrap(), LossType::MeanSquaredError);
    assert!(serde_json::from_str::<LossType>("\"hinge\"").is_err());
}

#[test]
fn test_agent_parameters_are_opaque() {
    let params: AgentParameters =
        serde_json::from_str(r#"{"algorithm": "dqn", "extra": {"discount": 0.99}}"#).unwrap();
    assert_eq!(params.algorithm, "dqn");
    assert_eq!(params.extra["discount"], 0.99);

    let params: AgentParameters = serde_json::from_str("{}").unwrap();
    assert_eq!(params, AgentParameters::default());
}
