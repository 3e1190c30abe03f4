// ABOUTME: Zone calculation and periodized plan generation
// ABOUTME: Pure, synchronous computation over the data models; no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Two coupled components:
//! - the zone calculator ([`TrainingZones`]) derives five pace ranges from
//!   race samples using a selectable [`ZoneMethod`](crate::models::ZoneMethod)
//! - the plan generator ([`PlanGenerator`]) turns goal, level, duration and
//!   training days into a week-by-week [`RunningPlan`](crate::models::RunningPlan)
//!
//! Calculate zones fully before passing them to the generator; the plan keeps
//! its own copy.

/// Zone calculation algorithms
pub mod algorithms;
/// Three-phase periodization curve and volume tables
pub mod periodization;
/// Plan generator
pub mod plan_generator;
/// Athlete-profile driven adjustments
pub mod profile_adjustment;
/// Zone calculator
pub mod training_zones;
/// Day-count week templates and quality rotation
pub mod week_templates;
/// Workout assembly and final rounding
pub mod workout_builder;

pub use periodization::Phase;
pub use plan_generator::{PlanGenerator, PlanRequest};
pub use profile_adjustment::ProfileAdjustment;
pub use training_zones::{PaceTable, TrainingZones};
pub use workout_builder::WorkoutBuilder;
