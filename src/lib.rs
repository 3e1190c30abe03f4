// ABOUTME: Main library entry point for the Stride running plan generator
// ABOUTME: Training-zone calculation (VDOT, critical velocity) and periodized plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! Generates periodized running training plans, optionally paced from
//! personal training zones derived from recent race results.
//!
//! ## Features
//!
//! - **Two zone methods**: Jack Daniels VDOT and critical velocity
//! - **Three-phase periodization**: build, maintenance and taper with a
//!   per-goal, per-level peak weekly volume
//! - **Structured workouts**: easy, long, tempo, interval and fartlek sessions
//!   with segment breakdowns
//! - **Profile awareness**: injury risk, BMI and running history scale volume
//!   and add safety notes
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_planner::errors::AppResult;
//! use stride_planner::intelligence::{PlanGenerator, PlanRequest, TrainingZones};
//! use stride_planner::models::{ExperienceLevel, Goal, RaceTime, ZoneMethod};
//!
//! fn main() -> AppResult<()> {
//!     let mut zones = TrainingZones::new(ZoneMethod::JackDaniels);
//!     zones.add_race_time("5K", RaceTime::from_time_string(5.0, "22:30")?);
//!     zones.calculate_zones()?;
//!
//!     let request = PlanRequest::new("Spring 10K", Goal::TenK, ExperienceLevel::Intermediate)
//!         .weeks(16)
//!         .days_per_week(4);
//!     let plan = PlanGenerator::default().generate(&request, Some(&zones), None)?;
//!
//!     println!("{plan}");
//!     Ok(())
//! }
//! ```

/// Unified error handling, re-exported from `stride-core`
pub use stride_core::errors;

/// Physiological and planning constants, re-exported from `stride-core`
pub use stride_core::constants;

/// Environment driven configuration
pub mod config;

/// Zone calculation and plan generation
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// Domain data models
pub mod models;

/// JSON file persistence
pub mod persistence;

/// Time parsing and formatting helpers
pub mod utils;
