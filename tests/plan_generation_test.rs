// ABOUTME: Integration tests for periodized plan generation through PlanGenerator
// ABOUTME: Covers the volume curve, week layout, workout structure, rounding and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, Utc, Weekday};
use common::{five_k_zones, ten_k_request};
use stride_planner::config::{PlannerConfig, RecoveryWeekPolicy};
use stride_planner::errors::PlanError;
use stride_planner::intelligence::periodization::{peak_volume, phase_for_week};
use stride_planner::intelligence::{Phase, PlanGenerator, PlanRequest};
use stride_planner::models::{ExperienceLevel, Goal, PaceTarget, RunningPlan, Workout, ZoneName};

fn generate(request: &PlanRequest) -> RunningPlan {
    PlanGenerator::default()
        .generate(request, None, None)
        .unwrap()
}

fn all_plans_with_zones() -> Vec<RunningPlan> {
    let zones = five_k_zones();
    let generator = PlanGenerator::default();
    let mut plans = Vec::new();
    for goal in Goal::ALL {
        for days in 3..=6 {
            let request = PlanRequest::new("grid", goal, ExperienceLevel::Advanced)
                .days_per_week(days);
            plans.push(generator.generate(&request, Some(&zones), None).unwrap());
        }
    }
    plans
}

// === Volume curve ===

#[test]
fn test_ten_k_intermediate_sixteen_weeks() {
    let plan = generate(&ten_k_request());

    assert_eq!(plan.weeks, 16);
    assert_eq!(plan.schedule.len(), 16);

    let distances = plan.weekly_distances();
    assert!((distances[11] - 45.0).abs() < f64::EPSILON);
    assert!((distances[12] - 45.0).abs() < f64::EPSILON);
    assert!((distances[13] - 45.0).abs() < f64::EPSILON);
    // 31.5 km target split 7.875/6.93/5.67/11.025 rounds to 10/5/5/10
    assert!((distances[14] - 30.0).abs() < f64::EPSILON);
    // 22.5 km target split 5.625/4.95/4.05/7.875 rounds to 5/5/5/10
    assert!((distances[15] - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_maintenance_and_taper_targets_are_exact() {
    let generator = PlanGenerator::default();
    for goal in Goal::ALL {
        for level in ExperienceLevel::ALL {
            let peak = peak_volume(goal, level);
            for weeks in 4..=20 {
                let targets = generator.weekly_targets(peak, weeks);
                let last = weeks as usize - 1;

                assert_eq!(targets.len(), weeks as usize);
                assert!((targets[last] - peak * 0.5).abs() < f64::EPSILON);
                assert!((targets[last - 1] - peak * 0.7).abs() < f64::EPSILON);
                for week in 1..=weeks {
                    if phase_for_week(week, weeks) == Phase::Maintenance {
                        assert!((targets[week as usize - 1] - peak).abs() < f64::EPSILON);
                    }
                }
            }
        }
    }
}

#[test]
fn test_build_phase_is_non_decreasing() {
    let generator = PlanGenerator::default();
    for weeks in 4..=24 {
        let targets = generator.weekly_targets(60.0, weeks);
        let build: Vec<f64> = (1..=weeks)
            .filter(|week| phase_for_week(*week, weeks) == Phase::Build)
            .map(|week| targets[week as usize - 1])
            .collect();

        assert!(!build.is_empty());
        assert!(
            build.windows(2).all(|pair| pair[0] <= pair[1]),
            "{weeks} weeks: {build:?}"
        );
        assert!(build.iter().all(|target| *target <= 60.0));
    }
}

#[test]
fn test_low_volume_plan_keeps_build_and_taper() {
    let request =
        PlanRequest::new("first 5K", Goal::FiveK, ExperienceLevel::Beginner)
            .weeks(16)
            .days_per_week(6);
    let plan = generate(&request);
    let distances = plan.weekly_distances();

    let build: Vec<f64> = (1..=16)
        .filter(|week| phase_for_week(*week, 16) == Phase::Build)
        .map(|week| distances[week as usize - 1])
        .collect();
    assert!(build.windows(2).all(|pair| pair[0] <= pair[1]), "{build:?}");
    assert!(distances[0] < distances[12], "{distances:?}");
    assert!(distances[14] < distances[12], "{distances:?}");
    assert!(distances[15] < distances[14], "{distances:?}");

    // 1.79 km week 1 target: every slot rounds to zero and becomes a rest day
    let first = plan.week(1).unwrap();
    assert_eq!(first.training_days().count(), 0);
    assert_eq!(first.workouts.len(), 7);
    for workout in plan.schedule.iter().flat_map(|week| week.training_days()) {
        let distance = workout.distance_km();
        assert!(distance >= 5.0 && (distance % 5.0).abs() < f64::EPSILON, "{workout}");
    }
}

#[test]
fn test_peak_volume_table() {
    assert!((peak_volume(Goal::FiveK, ExperienceLevel::Beginner) - 20.0).abs() < f64::EPSILON);
    assert!((peak_volume(Goal::TenK, ExperienceLevel::Intermediate) - 45.0).abs() < f64::EPSILON);
    assert!(
        (peak_volume(Goal::HalfMarathon, ExperienceLevel::Advanced) - 80.0).abs() < f64::EPSILON
    );
    assert!((peak_volume(Goal::Marathon, ExperienceLevel::Advanced) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_recovery_weeks_annotate_without_reducing() {
    let plan = generate(&ten_k_request());
    let week_12 = plan.week(12).unwrap();

    assert!((week_12.total_distance_km - 45.0).abs() < f64::EPSILON);
    assert!(week_12.notes.iter().any(|note| note.starts_with("Recovery week")));
    assert!(!plan
        .week(13)
        .unwrap()
        .notes
        .iter()
        .any(|note| note.starts_with("Recovery week")));
}

#[test]
fn test_recovery_reduction_policy() {
    let generator = PlanGenerator::new(PlannerConfig {
        recovery_week_policy: RecoveryWeekPolicy::Reduce,
        recovery_week_factor: 0.75,
    });
    let plan = generator.generate(&ten_k_request(), None, None).unwrap();

    // 33.75 km target split 8.44/7.43/6.08/11.81 rounds to 10/5/5/10
    assert!((plan.week(12).unwrap().total_distance_km - 30.0).abs() < f64::EPSILON);
    assert!((plan.week(13).unwrap().total_distance_km - 45.0).abs() < f64::EPSILON);
    assert!(plan
        .week(12)
        .unwrap()
        .notes
        .iter()
        .any(|note| note.contains("reduced by 25%")));
}

// === Week layout ===

#[test]
fn test_every_week_runs_monday_to_sunday() {
    let plan = generate(&ten_k_request());
    let expected = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    for week in &plan.schedule {
        let days: Vec<Weekday> = week.workouts.iter().map(Workout::day).collect();
        assert_eq!(days, expected);
        assert!(week.training_days().count() <= 4);
    }
    // From week 4 every slot of the 16 km+ target rounds to at least 5 km
    for week in plan.schedule.iter().skip(3) {
        assert_eq!(week.training_days().count(), 4, "week {}", week.week_number);
    }
}

#[test]
fn test_training_day_counts_follow_request() {
    for days in 3..=6 {
        let request = PlanRequest::new("days", Goal::HalfMarathon, ExperienceLevel::Intermediate)
            .days_per_week(days);
        let plan = generate(&request);

        assert_eq!(plan.days_per_week, days);
        let maintenance = plan
            .schedule
            .iter()
            .filter(|week| phase_for_week(week.week_number, plan.weeks) == Phase::Maintenance);
        for week in maintenance {
            assert_eq!(week.training_days().count(), usize::from(days));
            assert_eq!(
                week.workouts
                    .iter()
                    .filter(|w| matches!(w, Workout::LongRun(_)))
                    .count(),
                1
            );
        }
    }
}

#[test]
fn test_four_day_quality_rotation() {
    let request =
        PlanRequest::new("rotation", Goal::Marathon, ExperienceLevel::Advanced).weeks(8);
    let plan = generate(&request);
    let thursday = |week: u32| {
        plan.week(week)
            .unwrap()
            .workouts
            .iter()
            .find(|w| w.day() == Weekday::Thu)
            .cloned()
            .unwrap()
    };

    assert!(matches!(thursday(1), Workout::Easy(_)));
    assert!(matches!(thursday(2), Workout::Easy(_)));
    assert!(matches!(thursday(3), Workout::Tempo(_)));
    assert!(matches!(thursday(4), Workout::Interval(_)));
    assert!(matches!(thursday(5), Workout::Tempo(_)));
}

#[test]
fn test_six_day_plan_includes_fartlek() {
    let request =
        PlanRequest::new("six", Goal::Marathon, ExperienceLevel::Advanced).days_per_week(6);
    let plan = generate(&request);
    let wednesday = plan.week(3).unwrap().workouts[2].clone();

    assert!(matches!(wednesday, Workout::Fartlek(_)));
}

#[test]
fn test_week_notes() {
    let plan = generate(&ten_k_request());

    let first = &plan.week(1).unwrap().notes;
    assert!(first.iter().any(|note| note.starts_with("Welcome")));
    assert!(first.iter().any(|note| note.starts_with("Build phase")));

    assert!(plan
        .week(13)
        .unwrap()
        .notes
        .iter()
        .any(|note| note.starts_with("Maintenance phase")));
    assert!(plan
        .week(15)
        .unwrap()
        .notes
        .iter()
        .any(|note| note.starts_with("Taper week")));
    assert!(plan
        .week(16)
        .unwrap()
        .notes
        .iter()
        .any(|note| note.starts_with("Race week")));
}

#[test]
fn test_default_length_per_goal() {
    let expected = [
        (Goal::FiveK, 8),
        (Goal::TenK, 10),
        (Goal::HalfMarathon, 12),
        (Goal::Marathon, 16),
    ];
    for (goal, weeks) in expected {
        let plan = generate(&PlanRequest::new("default", goal, ExperienceLevel::Beginner));
        assert_eq!(plan.weeks, weeks, "{goal}");
    }
}

#[test]
fn test_shortest_plan() {
    let request =
        PlanRequest::new("short", Goal::FiveK, ExperienceLevel::Beginner).weeks(4);
    let plan = generate(&request);

    assert_eq!(plan.schedule.len(), 4);
    let phases: Vec<Phase> = (1..=4).map(|week| phase_for_week(week, 4)).collect();
    assert_eq!(phases, [Phase::Build, Phase::Build, Phase::Taper, Phase::Taper]);
}

// === Workout structure ===

#[test]
fn test_segments_sum_to_workout_distance() {
    for plan in all_plans_with_zones() {
        for workout in plan.schedule.iter().flat_map(|week| &week.workouts) {
            let segments = workout.segments();
            if segments.is_empty() {
                continue;
            }
            let total: f64 = segments.iter().map(|s| s.total_distance_km()).sum();
            assert!(
                (total - workout.distance_km()).abs() < 5.0,
                "{workout}: segments total {total}"
            );
        }
    }
}

#[test]
fn test_distances_and_durations_are_rounded() {
    for plan in all_plans_with_zones() {
        for workout in plan.schedule.iter().flat_map(|week| week.training_days()) {
            let distance = workout.distance_km();
            assert!(distance >= 5.0);
            assert!((distance % 5.0).abs() < f64::EPSILON, "{workout}");

            let minutes = workout.duration_minutes().unwrap();
            assert!(minutes >= 30);
            assert_eq!(minutes % 30, 0, "{workout}");
        }
    }
}

#[test]
fn test_interval_structure() {
    for plan in all_plans_with_zones() {
        for workout in plan.schedule.iter().flat_map(|week| &week.workouts) {
            let Workout::Interval(session) = workout else {
                continue;
            };
            let reps = session.repetitions();
            assert!((4..=8).contains(&reps), "{reps} repetitions");
            assert_eq!(session.work.repetitions, reps);
            assert_eq!(session.recovery.repetitions, reps);
            assert_eq!(session.recovery.duration_minutes, Some(2));
            assert!(session.work.pace.is_some());
            assert_eq!(session.work.zone, Some(ZoneName::Interval));
        }
    }
}

#[test]
fn test_fartlek_middle_block_is_by_feel() {
    let zones = five_k_zones();
    let request =
        PlanRequest::new("six", Goal::Marathon, ExperienceLevel::Advanced).days_per_week(6);
    let plan = PlanGenerator::default()
        .generate(&request, Some(&zones), None)
        .unwrap();

    let Workout::Fartlek(run) = &plan.week(3).unwrap().workouts[2] else {
        panic!("week 3 Wednesday should be a fartlek");
    };
    assert_eq!(run.segments.len(), 3);
    assert!(run.segments[0].pace.is_some());
    assert!(run.segments[1].pace.is_none());
    assert!(run.segments[2].pace.is_some());
}

#[test]
fn test_tempo_segments_follow_split() {
    let plan = generate(&ten_k_request());
    let Workout::Tempo(run) = &plan.week(13).unwrap().workouts[3] else {
        panic!("week 13 Thursday should be a tempo run");
    };

    assert!((run.distance_km - 10.0).abs() < f64::EPSILON);
    let distances: Vec<f64> = run.segments.iter().map(|s| s.distance_km.unwrap()).collect();
    assert_eq!(distances, [1.8, 6.0, 2.2]);
    assert_eq!(run.segments[1].zone, Some(ZoneName::Threshold));
}

#[test]
fn test_unpaced_plan_has_no_paces() {
    let plan = generate(&ten_k_request());

    assert!(plan.zones.is_none());
    for workout in plan.schedule.iter().flat_map(|week| &week.workouts) {
        assert!(workout.target_pace().is_none());
        assert!(workout.duration_minutes().is_none());
        assert!(workout.segments().iter().all(|s| s.pace.is_none()));
    }
}

#[test]
fn test_paced_plan_keeps_its_zones() {
    let zones = five_k_zones();
    let plan = PlanGenerator::default()
        .generate(&ten_k_request(), Some(&zones), None)
        .unwrap();

    assert_eq!(plan.zones.as_ref(), Some(&zones));
    let long_run = &plan.week(13).unwrap().workouts[6];
    assert!(matches!(long_run, Workout::LongRun(_)));
    let easy_max = zones
        .zone_pace_string(ZoneName::Easy, PaceTarget::Max)
        .unwrap();
    assert_eq!(long_run.target_pace(), Some(easy_max.as_str()));
}

// === Zone distribution ===

#[test]
fn test_zone_distribution_of_tempo_week() {
    let plan = generate(&ten_k_request());
    let distribution = &plan.zone_distribution()[12];

    assert_eq!(distribution.len(), 5);
    assert!((distribution[&ZoneName::Easy] - 39.0).abs() < 1e-9);
    assert!((distribution[&ZoneName::Threshold] - 6.0).abs() < 1e-9);
    assert!(distribution[&ZoneName::Interval].abs() < f64::EPSILON);
}

// === Dates and summary ===

#[test]
fn test_race_date() {
    let plan = generate(&ten_k_request());
    assert!(plan.race_date().is_none());

    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let plan = plan.with_start_date(start);

    assert_eq!(plan.race_date(), NaiveDate::from_ymd_opt(2025, 6, 22));
    assert!(plan.created_date <= Utc::now());
}

#[test]
fn test_summary_display() {
    let rendered = generate(&ten_k_request()).to_string();

    assert!(rendered.contains("Running Plan: 10K Build"));
    assert!(rendered.contains("Duration: 16 weeks"));
}

// === Errors ===

#[test]
fn test_unsupported_day_counts() {
    let generator = PlanGenerator::default();
    for days in [0, 1, 2, 7] {
        let request = ten_k_request().days_per_week(days);
        assert_eq!(
            generator.generate(&request, None, None),
            Err(PlanError::InvalidSchedule {
                days_per_week: days
            })
        );
    }
}

#[test]
fn test_too_short_plans() {
    let generator = PlanGenerator::default();
    for weeks in [0, 1, 3] {
        let request = ten_k_request().weeks(weeks);
        assert_eq!(
            generator.generate(&request, None, None),
            Err(PlanError::InvalidDuration { weeks, minimum: 4 })
        );
    }
}

#[test]
fn test_goal_and_level_parsing() {
    assert_eq!("half marathon".parse::<Goal>().unwrap(), Goal::HalfMarathon);
    assert_eq!("10k".parse::<Goal>().unwrap(), Goal::TenK);
    assert!(matches!(
        "ultra".parse::<Goal>(),
        Err(PlanError::UnknownGoal(_))
    ));
    assert!(matches!(
        "elite".parse::<ExperienceLevel>(),
        Err(PlanError::UnknownLevel(_))
    ));
}
