// ABOUTME: Integration tests for environment-driven planner and zone-bracket configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use common::five_k;
use serial_test::serial;
use stride_planner::config::{
    ConfigError, PlannerConfig, RecoveryWeekPolicy, ZoneBrackets, ZoneBracketsConfig,
};
use stride_planner::errors::{AppError, ErrorCode};
use stride_planner::intelligence::TrainingZones;
use stride_planner::models::{ZoneMethod, ZoneName};

const PLANNER_VARS: [&str; 2] = ["STRIDE_RECOVERY_WEEK_POLICY", "STRIDE_RECOVERY_WEEK_FACTOR"];

fn clear_env() {
    for var in PLANNER_VARS {
        env::remove_var(var);
    }
    for prefix in ["STRIDE_VDOT", "STRIDE_CV"] {
        for zone in ZoneName::ALL {
            let name = zone.as_str().to_uppercase();
            env::remove_var(format!("{prefix}_{name}_MIN"));
            env::remove_var(format!("{prefix}_{name}_MAX"));
        }
    }
}

// === Planner configuration ===

#[test]
#[serial]
fn test_planner_defaults() {
    clear_env();
    let config = PlannerConfig::load().unwrap();

    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.recovery_week_policy, RecoveryWeekPolicy::Annotate);
    assert!((config.recovery_multiplier() - 1.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_planner_reduce_policy_from_env() {
    clear_env();
    env::set_var("STRIDE_RECOVERY_WEEK_POLICY", "Reduce");
    env::set_var("STRIDE_RECOVERY_WEEK_FACTOR", "0.6");

    let config = PlannerConfig::load().unwrap();
    clear_env();

    assert_eq!(config.recovery_week_policy, RecoveryWeekPolicy::Reduce);
    assert!((config.recovery_multiplier() - 0.6).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_planner_rejects_bad_values() {
    clear_env();
    env::set_var("STRIDE_RECOVERY_WEEK_FACTOR", "1.5");
    let out_of_range = PlannerConfig::load();

    env::set_var("STRIDE_RECOVERY_WEEK_FACTOR", "lots");
    let unparsable = PlannerConfig::load();

    env::set_var("STRIDE_RECOVERY_WEEK_FACTOR", "0.5");
    env::set_var("STRIDE_RECOVERY_WEEK_POLICY", "skip");
    let unknown_policy = PlannerConfig::load();
    clear_env();

    assert!(matches!(out_of_range, Err(ConfigError::ValueOutOfRange(_))));
    assert!(matches!(unparsable, Err(ConfigError::Parse(_))));
    assert!(matches!(unknown_policy, Err(ConfigError::Parse(_))));
}

#[test]
fn test_zero_recovery_factor_is_invalid() {
    let config = PlannerConfig {
        recovery_week_policy: RecoveryWeekPolicy::Reduce,
        recovery_week_factor: 0.0,
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_maps_to_config_invalid() {
    let error = AppError::from(ConfigError::Parse("Invalid STRIDE_X: 'y'".to_owned()));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.code.exit_code(), 3);
}

// === Zone brackets ===

#[test]
#[serial]
fn test_bracket_defaults_match_constants() {
    clear_env();
    let config = ZoneBracketsConfig::load().unwrap();

    assert_eq!(config, ZoneBracketsConfig::default());
    assert_eq!(config.vdot, ZoneBrackets::vdot_defaults());
    assert_eq!(config.vdot.bracket(ZoneName::Easy), (0.59, 0.74));
    assert_eq!(
        config.for_method(ZoneMethod::CriticalVelocity).bracket(ZoneName::Threshold),
        (0.95, 1.02)
    );
}

#[test]
#[serial]
fn test_bracket_overrides_from_env() {
    clear_env();
    env::set_var("STRIDE_VDOT_EASY_MIN", "0.62");
    env::set_var("STRIDE_CV_REPETITION_MAX", "1.25");

    let config = ZoneBracketsConfig::load().unwrap();
    clear_env();

    assert_eq!(config.vdot.bracket(ZoneName::Easy), (0.62, 0.74));
    assert_eq!(
        config.critical_velocity.bracket(ZoneName::Repetition),
        (1.09, 1.25)
    );
}

#[test]
#[serial]
fn test_inverted_bracket_is_rejected() {
    clear_env();
    env::set_var("STRIDE_VDOT_THRESHOLD_MIN", "0.90");
    let inverted = ZoneBracketsConfig::load();

    env::set_var("STRIDE_VDOT_THRESHOLD_MIN", "-0.1");
    let negative = ZoneBracketsConfig::load();
    clear_env();

    assert!(matches!(inverted, Err(ConfigError::InvalidRange(_))));
    assert!(matches!(negative, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_custom_brackets_change_zones() {
    let mut config = ZoneBracketsConfig::default();
    config.vdot.easy = (0.65, 0.74);

    let mut default_zones = TrainingZones::new(ZoneMethod::JackDaniels);
    default_zones.add_race_time("5K", five_k());
    let mut custom_zones = default_zones.clone();

    default_zones.calculate_zones().unwrap();
    custom_zones.calculate_zones_with(&config).unwrap();

    let default_easy = default_zones.zone_range(ZoneName::Easy).unwrap();
    let custom_easy = custom_zones.zone_range(ZoneName::Easy).unwrap();
    assert!((custom_easy.min_pace - default_easy.min_pace).abs() < f64::EPSILON);
    assert!(custom_easy.max_pace < default_easy.max_pace);
    assert_eq!(
        custom_zones.zone_range(ZoneName::Threshold).unwrap(),
        default_zones.zone_range(ZoneName::Threshold).unwrap()
    );
}

#[test]
fn test_custom_brackets_apply_to_known_vdot() {
    let mut config = ZoneBracketsConfig::default();
    config.vdot.easy = (0.65, 0.74);

    let default_zones = TrainingZones::from_vdot(45.0).unwrap();
    let mut custom_zones = TrainingZones::new(ZoneMethod::JackDaniels);
    custom_zones
        .calculate_zones_from_vdot_with(45.0, &config)
        .unwrap();

    let default_easy = default_zones.zone_range(ZoneName::Easy).unwrap();
    let custom_easy = custom_zones.zone_range(ZoneName::Easy).unwrap();
    assert!(custom_easy.max_pace < default_easy.max_pace);
    assert_eq!(custom_zones.vdot(), Some(45.0));
    assert_eq!(
        custom_zones.zone_range(ZoneName::Threshold).unwrap(),
        default_zones.zone_range(ZoneName::Threshold).unwrap()
    );
}
