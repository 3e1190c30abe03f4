// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for zone calculation and plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Process-wide, immutable values grouped by domain. Nothing here is
//! reconfigured at runtime; configuration layers may override copies of the
//! zone brackets and recovery factor, but the defaults live here.

/// Jack Daniels VDOT regression coefficients
pub mod vdot;

/// Zone bracket tables for both calculation methods
pub mod zones;

/// Periodization, template and workout-structure constants
pub mod planning;

/// Athlete profile adjustment thresholds and multipliers
pub mod profile;

/// Unit conversion constants
pub mod units {
    /// Metres in a kilometre
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Seconds in a minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in an hour
    pub const SECONDS_PER_HOUR: u64 = 3_600;
    /// Days in a week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Standard race distances in kilometres
pub mod race_distances {
    /// 5 kilometres
    pub const FIVE_K: f64 = 5.0;
    /// 10 kilometres
    pub const TEN_K: f64 = 10.0;
    /// 15 kilometres
    pub const FIFTEEN_K: f64 = 15.0;
    /// Half marathon
    pub const HALF_MARATHON: f64 = 21.0975;
    /// Marathon
    pub const MARATHON: f64 = 42.195;
    /// Two distances closer than this are treated as the same distance
    pub const DISTANCE_EPSILON_KM: f64 = 1e-3;
}
