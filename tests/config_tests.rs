//! Integration tests for configuration loading and run setup errors

use matchmaking_sim::config::{RunOptions, SimulationParameters};
use matchmaking_sim::error::SimulationError;
use matchmaking_sim::simulation::Simulation;
use matchmaking_sim::strategy::StrategyRegistry;
use std::io::Write;
use std::path::PathBuf;

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const VALID_JSON: &str = r#"{
    "game_min_duration": 20,
    "game_max_duration": 60,
    "min_wait_before_requeue": 1,
    "max_wait_before_requeue": 10,
    "duel_win_bonus": 16,
    "duel_loss_penalty": 12,
    "group_min": 4,
    "group_max": 8,
    "group_win_bonus": 12,
    "group_loss_penalty": 3
}"#;

#[test]
fn test_load_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "sim.json", VALID_JSON);

    let params = SimulationParameters::from_file(&path).unwrap();
    assert_eq!(params.game_max_duration, 60.0);
    assert_eq!(params.group_bounds(), (4, 8));
    assert_eq!(params.duel_loss_penalty, 12.0);
}

#[test]
fn test_load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "sim.toml",
        r#"
game_min_duration = 20
game_max_duration = 60
min_wait_before_requeue = 1
max_wait_before_requeue = 10
duel_win_bonus = 16
duel_loss_penalty = 12
group_min = 4
group_max = 8
group_win_bonus = 12
group_loss_penalty = 3
"#,
    );

    let params = SimulationParameters::from_file(&path).unwrap();
    assert_eq!(params.group_bounds(), (4, 8));
    assert_eq!(params.group_win_bonus, 12.0);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationParameters::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SimulationError>(),
        Some(SimulationError::ConfigNotFound { .. })
    ));
}

#[test]
fn test_unknown_field_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let contents = VALID_JSON.replace(
        "\"group_loss_penalty\": 3",
        "\"group_loss_penalty\": 3,\n    \"bot_backfill\": true",
    );
    let path = write_config(&dir, "sim.json", &contents);

    let err = SimulationParameters::from_file(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SimulationError>(),
        Some(SimulationError::ConfigValidation { .. })
    ));
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "sim.json", "{ not json");

    let err = SimulationParameters::from_file(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SimulationError>(),
        Some(SimulationError::ConfigValidation { .. })
    ));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "sim.yaml", "group_min: 6");

    assert!(SimulationParameters::from_file(&path).is_err());
}

#[test]
fn test_shipped_config_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("simulation_config.json");
    let params = SimulationParameters::from_file(path).unwrap();
    assert_eq!(params, SimulationParameters::default());
}

#[test]
fn test_unknown_strategy_rejected_before_run() {
    let options = RunOptions {
        elo_strategy: "trueskill".to_string(),
        seed: Some(1),
        ..RunOptions::default()
    };
    let result = Simulation::new(
        SimulationParameters::default(),
        options,
        &StrategyRegistry::with_defaults(),
    );

    let err = match result {
        Err(err) => err,
        Ok(_) => panic!("unknown strategy should be rejected"),
    };
    assert!(matches!(
        err.downcast_ref::<SimulationError>(),
        Some(SimulationError::UnknownStrategy { .. })
    ));
}

#[test]
fn test_negative_horizon_rejected() {
    let options = RunOptions {
        sim_time: -5.0,
        seed: Some(1),
        ..RunOptions::default()
    };
    let result = Simulation::new(
        SimulationParameters::default(),
        options,
        &StrategyRegistry::with_defaults(),
    );
    assert!(result.is_err());
}
