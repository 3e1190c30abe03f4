// ABOUTME: Domain error taxonomy for zone calculation and plan generation
// ABOUTME: Every failure is raised synchronously at the point of invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use thiserror::Error;

/// Errors raised by the zone calculator and the plan generator.
///
/// None of these are transient; a failed operation leaves the caller's prior
/// state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PlanError {
    /// Zone calculation lacks the race samples the method needs
    #[error("insufficient data for {method} zones: {reason}")]
    InsufficientData {
        /// Calculation method tag
        method: &'static str,
        /// What is missing
        reason: String,
    },

    /// Zones are not calculated yet, or the name is not one of the five zones
    #[error("unknown training zone: {0}")]
    UnknownZone(String),

    /// Goal is not one of 5K, 10K, Half Marathon, Marathon
    #[error("unknown race goal: {0}")]
    UnknownGoal(String),

    /// Level is not one of beginner, intermediate, advanced
    #[error("unknown experience level: {0}")]
    UnknownLevel(String),

    /// Zone calculation method tag is not recognised
    #[error("unknown zone calculation method: {0}")]
    UnknownMethod(String),

    /// No day-count template exists for the requested days per week
    #[error("unsupported schedule: {days_per_week} days per week (supported: 3-6)")]
    InvalidSchedule {
        /// Requested training days per week
        days_per_week: u8,
    },

    /// Too few weeks for three-phase periodization
    #[error("plan of {weeks} weeks is too short (minimum {minimum})")]
    InvalidDuration {
        /// Requested plan length
        weeks: u32,
        /// Shortest supported plan length
        minimum: u32,
    },

    /// Race time string is not `MM:SS` or `HH:MM:SS`
    #[error("malformed time string: '{0}' (expected MM:SS or HH:MM:SS)")]
    MalformedTimeString(String),

    /// Race sample violates distance > 0 / time > 0
    #[error("invalid race sample: {0}")]
    InvalidRaceSample(String),

    /// Athlete profile contains an unusable value
    #[error("invalid athlete profile: {0}")]
    InvalidProfile(String),
}

impl PlanError {
    /// Map this error onto the platform-wide error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InsufficientData { .. } => ErrorCode::InsufficientData,
            Self::UnknownZone(_)
            | Self::UnknownGoal(_)
            | Self::UnknownLevel(_)
            | Self::UnknownMethod(_) => ErrorCode::ResourceNotFound,
            Self::InvalidSchedule { .. } | Self::InvalidDuration { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::MalformedTimeString(_) => ErrorCode::InvalidFormat,
            Self::InvalidRaceSample(_) | Self::InvalidProfile(_) => ErrorCode::InvalidInput,
        }
    }
}
