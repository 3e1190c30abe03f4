// ABOUTME: Core data models for race samples, zones, workouts, weeks, plans and athlete profiles
// ABOUTME: Plain serializable value types; computation lives in the intelligence module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The persisted document schema is exactly these types:
//! plan -> weeks -> workouts -> segments, with ISO date strings.
//!
//! ## Core Models
//!
//! - `RaceTime`: a (distance, elapsed time) sample used to calibrate zones
//! - `Workout`: one day's session, a sum type over the six session kinds
//! - `Week`: the workouts of one week plus notes
//! - `RunningPlan`: the root aggregate produced by the plan generator
//! - `AthleteProfile`: optional input that scales volume and adds advisories

/// Athlete profile and injury-risk assessment
pub mod profile;
/// Plan aggregate, goals and experience levels
pub mod plan;
/// Race performance samples and distance labels
pub mod race_time;
/// Workout sum type and segments
pub mod workout;
/// Zone names, methods and pace ranges
pub mod zones;

pub use plan::{ExperienceLevel, Goal, RunningPlan, Week, ZoneDistribution};
pub use profile::{AthleteProfile, KnownInjury, RiskLevel};
pub use race_time::{distance_for_label, label_for_distance, RaceTime};
pub use workout::{ContinuousRun, IntervalSession, RestDay, SegmentedRun, Workout, WorkoutSegment};
pub use zones::{PaceRange, PaceTarget, ZoneMethod, ZoneName};
