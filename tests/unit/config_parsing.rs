//! Unit tests for TOML configuration parsing.

use safety_motion::config::{load_config, parse_config, SystemConfig};
use safety_motion::{ConfigError, Error, PathError, TailPolicy};

/// Test parsing a path with every field set.
#[test]
fn test_parse_path_config() {
    let toml_str = r#"
[paths.stop]
phase_end_times = [0.2, 0.4, 0.6]
phase_jerks = [-10.0, 0.0, 10.0]
position = 1.5
velocity = 0.8
acceleration = -0.1
tail_policy = "hold_acceleration"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let path = config.path("stop").expect("Path not found");

    assert_eq!(path.phase_end_times, [0.2, 0.4, 0.6]);
    assert_eq!(path.phase_jerks, [-10.0, 0.0, 10.0]);
    assert_eq!(path.position, 1.5);
    assert_eq!(path.velocity, 0.8);
    assert_eq!(path.acceleration, -0.1);
    assert_eq!(path.tail_policy, TailPolicy::HoldAcceleration);
}

/// Test that defaults match a freshly constructed path.
#[test]
fn test_path_defaults() {
    let toml_str = r#"
[paths.idle]
phase_end_times = [0.0, 0.0, 0.0]
phase_jerks = [0.0, 0.0, 0.0]
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let path = config.build_path("idle").unwrap();

    assert_eq!(path, safety_motion::Path::new());
}

/// Test that an unknown tail policy is rejected during parsing.
#[test]
fn test_invalid_tail_policy_rejected() {
    let toml_str = r#"
[paths.stop]
phase_end_times = [0.2, 0.4, 0.6]
phase_jerks = [-10.0, 0.0, 10.0]
tail_policy = "coast"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that a missing phase array is a parse error.
#[test]
fn test_missing_phases_rejected() {
    let toml_str = r#"
[paths.stop]
phase_jerks = [-10.0, 0.0, 10.0]
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that validation reports the offending path and phase.
#[test]
fn test_negative_phase_reported() {
    let toml_str = r#"
[paths.stop]
phase_end_times = [-0.2, 0.4, 0.6]
phase_jerks = [0.0, 0.0, 0.0]
"#;

    match parse_config(toml_str) {
        Err(Error::Config(ConfigError::InvalidPath { name, source })) => {
            assert_eq!(name.as_str(), "stop");
            assert!(matches!(
                source,
                PathError::NegativePhaseTime { phase: 1, .. }
            ));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Test that loading a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    assert!(matches!(
        load_config("/nonexistent/safety-motion/paths.toml"),
        Err(Error::Config(ConfigError::IoError(_)))
    ));
}
