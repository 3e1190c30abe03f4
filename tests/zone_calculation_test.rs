// ABOUTME: Integration tests for training-zone calculation through the public TrainingZones API
// ABOUTME: Covers VDOT sample selection, critical velocity, error cases and pace formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{five_k, five_k_zones, ten_k, zones_from};
use stride_planner::errors::PlanError;
use stride_planner::intelligence::TrainingZones;
use stride_planner::models::{PaceTarget, RaceTime, ZoneMethod, ZoneName};

// === Jack Daniels VDOT ===

#[test]
fn test_five_k_vdot() {
    let zones = five_k_zones();

    let vdot = zones.vdot().unwrap();
    assert!((vdot - 43.38).abs() < 0.01, "VDOT was {vdot}");
    assert!(zones.critical_velocity().is_none());
    assert!(zones.is_calculated());
}

#[test]
fn test_best_sample_dominates() {
    let five_only = five_k_zones();
    let both = zones_from(
        ZoneMethod::JackDaniels,
        &[("5K", five_k()), ("10K", ten_k())],
    );

    assert_eq!(both.vdot(), five_only.vdot());
    assert_eq!(both.zones(), five_only.zones());
    assert_eq!(both.race_times().len(), 2);
}

#[test]
fn test_zone_ordering() {
    let zones = five_k_zones();

    for zone in ZoneName::ALL {
        let range = zones.zone_range(zone).unwrap();
        assert!(
            range.min_pace < range.max_pace,
            "{zone}: {} !< {}",
            range.min_pace,
            range.max_pace
        );
    }

    let middle = |zone| zones.zone_pace(zone, PaceTarget::Middle).unwrap();
    assert!(middle(ZoneName::Easy) > middle(ZoneName::Marathon));
    assert!(middle(ZoneName::Marathon) > middle(ZoneName::Threshold));
    assert!(middle(ZoneName::Threshold) > middle(ZoneName::Interval));
    assert!(middle(ZoneName::Interval) > middle(ZoneName::Repetition));
}

#[test]
fn test_interval_zone_tops_out_at_race_velocity() {
    let zones = five_k_zones();
    let interval = zones.zone_range(ZoneName::Interval).unwrap();

    // 100% VO2max is faster than 5K race pace (270 s/km)
    assert!(interval.min_pace < five_k().pace_per_km());
    assert!(interval.min_pace > 230.0);
}

#[test]
fn test_middle_pace_is_midpoint() {
    let zones = five_k_zones();
    let range = zones.zone_range(ZoneName::Threshold).unwrap();
    let middle = zones
        .zone_pace(ZoneName::Threshold, PaceTarget::Middle)
        .unwrap();

    assert!((middle - (range.min_pace + range.max_pace) / 2.0).abs() < 1e-9);
    assert!(
        (zones.zone_pace(ZoneName::Threshold, PaceTarget::Min).unwrap() - range.min_pace).abs()
            < f64::EPSILON
    );
}

#[test]
fn test_zones_from_known_vdot_match_race_zones() {
    let from_race = five_k_zones();
    let from_vdot = TrainingZones::from_vdot(from_race.vdot().unwrap()).unwrap();

    assert_eq!(from_vdot.zones(), from_race.zones());
    assert!(from_vdot.race_times().is_empty());
}

#[test]
fn test_non_positive_vdot_is_rejected() {
    let result = TrainingZones::from_vdot(0.0);
    assert!(matches!(result, Err(PlanError::InsufficientData { .. })));
}

#[test]
fn test_no_samples_is_insufficient() {
    let mut zones = TrainingZones::new(ZoneMethod::JackDaniels);

    let result = zones.calculate_zones();
    assert!(matches!(result, Err(PlanError::InsufficientData { .. })));
    assert!(!zones.is_calculated());
}

// === Critical velocity ===

#[test]
fn test_critical_velocity_from_two_samples() {
    let zones = zones_from(
        ZoneMethod::CriticalVelocity,
        &[("5K", five_k()), ("10K", ten_k())],
    );

    let expected = (10.0 - 5.0) * 1000.0 / (2835.0 - 1350.0);
    let cv = zones.critical_velocity().unwrap();
    assert!((cv - expected).abs() < 1e-9);
    assert!(zones.vdot().is_none());

    let threshold = zones.zone_range(ZoneName::Threshold).unwrap();
    assert!((threshold.min_pace - 1000.0 / (cv * 1.02)).abs() < 1e-9);
    assert!((threshold.max_pace - 1000.0 / (cv * 0.95)).abs() < 1e-9);

    let easy = zones.zone_range(ZoneName::Easy).unwrap();
    assert!((easy.max_pace - 1000.0 / (cv * 0.69)).abs() < 1e-9);
}

#[test]
fn test_critical_velocity_needs_two_distances() {
    let mut zones = TrainingZones::new(ZoneMethod::CriticalVelocity);
    zones.add_race_time("5K", five_k());

    let result = zones.calculate_zones();
    assert!(matches!(
        result,
        Err(PlanError::InsufficientData {
            method: "critical_velocity",
            ..
        })
    ));
    assert!(!zones.is_calculated());
    assert!(zones.zone_range(ZoneName::Easy).is_err());
}

#[test]
fn test_critical_velocity_rejects_faster_long_race() {
    let mut zones = TrainingZones::new(ZoneMethod::CriticalVelocity);
    zones.add_race_time("5K", RaceTime::new(5.0, 1500).unwrap());
    zones.add_race_time("10K", RaceTime::new(10.0, 1400).unwrap());

    assert!(zones.calculate_zones().is_err());
}

// === Sample management ===

#[test]
fn test_add_race_result_recalculates() {
    let mut zones = TrainingZones::new(ZoneMethod::JackDaniels);

    let vdot = zones.add_race_result(5.0, "22:30", None).unwrap();

    assert!((vdot.unwrap() - 43.38).abs() < 0.01);
    assert!(zones.race_times().contains_key("5K"));
    assert!(zones.is_calculated());
}

#[test]
fn test_malformed_time_leaves_samples_unchanged() {
    let mut zones = five_k_zones();
    let before = zones.clone();

    let result = zones.add_race_result(10.0, "abc", Some("10K"));

    assert_eq!(result, Err(PlanError::MalformedTimeString("abc".to_owned())));
    assert_eq!(zones, before);
}

#[test]
fn test_adding_a_sample_invalidates_zones() {
    let mut zones = five_k_zones();
    zones.add_race_time("10K", ten_k());

    assert!(!zones.is_calculated());
    assert!(zones.vdot().is_none());
}

// === Lookup and formatting ===

#[test]
fn test_zone_lookup_by_name() {
    let zones = five_k_zones();

    assert!(zones
        .zone_pace_by_name("Threshold", PaceTarget::Middle)
        .is_ok());
    assert!(matches!(
        zones.zone_pace_by_name("tempo", PaceTarget::Middle),
        Err(PlanError::UnknownZone(_))
    ));
}

#[test]
fn test_uncalculated_zone_lookup_fails() {
    let zones = TrainingZones::new(ZoneMethod::JackDaniels);
    assert!(matches!(
        zones.zone_pace(ZoneName::Easy, PaceTarget::Middle),
        Err(PlanError::UnknownZone(_))
    ));
}

#[test]
fn test_pace_range_string() {
    let zones = five_k_zones();
    let text = zones.zone_pace_range_string(ZoneName::Easy).unwrap();

    let (fast, slow) = text.split_once(" - ").unwrap();
    assert!(fast < slow, "{text}");
    assert_eq!(fast.len(), 4);
}

#[test]
fn test_display_lists_every_zone() {
    let rendered = five_k_zones().to_string();

    assert!(rendered.contains("VDOT: 43.4"));
    for zone in ZoneName::ALL {
        assert!(rendered.contains(zone.label()), "missing {zone}");
    }
}

#[test]
fn test_pace_to_time() {
    assert!((TrainingZones::pace_to_time(10.0, 300.0) - 3000.0).abs() < f64::EPSILON);
}
