// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides zone, request and profile builders used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stride_planner`

use stride_planner::intelligence::{PlanRequest, TrainingZones};
use stride_planner::models::{AthleteProfile, ExperienceLevel, Goal, RaceTime, ZoneMethod};

/// 5K in 22:30, about VDOT 43.4
pub fn five_k() -> RaceTime {
    RaceTime::from_time_string(5.0, "22:30").unwrap()
}

/// 10K in 47:15, a weaker performance than [`five_k`]
pub fn ten_k() -> RaceTime {
    RaceTime::from_time_string(10.0, "47:15").unwrap()
}

/// Calculated zones from the given named samples
pub fn zones_from(method: ZoneMethod, samples: &[(&str, RaceTime)]) -> TrainingZones {
    let mut zones = TrainingZones::new(method);
    for (name, race) in samples {
        zones.add_race_time(*name, *race);
    }
    zones.calculate_zones().unwrap();
    zones
}

/// Jack Daniels zones from the 5K sample
pub fn five_k_zones() -> TrainingZones {
    zones_from(ZoneMethod::JackDaniels, &[("5K", five_k())])
}

/// 16-week 10K intermediate request on four days
pub fn ten_k_request() -> PlanRequest {
    PlanRequest::new("10K Build", Goal::TenK, ExperienceLevel::Intermediate)
        .weeks(16)
        .days_per_week(4)
}

/// Healthy intermediate runner with no adjustments
pub fn healthy_profile() -> AthleteProfile {
    AthleteProfile {
        name: "Test Runner".to_owned(),
        age: 35,
        weight_kg: 70.0,
        height_cm: 175.0,
        experience_level: ExperienceLevel::Intermediate,
        years_running: 5.0,
        current_weekly_km: 35.0,
        days_per_week: 5,
        consistent_days_per_week: 5,
        ..AthleteProfile::default()
    }
}
