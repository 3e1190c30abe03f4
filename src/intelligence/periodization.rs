// ABOUTME: Three-phase periodization curve: linear build, flat maintenance, fixed two-week taper
// ABOUTME: Goal/level volume lookup and default plan lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{ExperienceLevel, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;
use stride_core::constants::planning::periodization::{
    BUILD_FRACTION, FINAL_TAPER_FACTOR, PENULTIMATE_TAPER_FACTOR, RECOVERY_WEEK_INTERVAL,
    TAPER_WEEKS,
};
use stride_core::constants::planning::{default_weeks, peak_volume};

/// Training phase of a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Linear ramp up to the peak volume
    Build,
    /// Peak volume held constant
    Maintenance,
    /// Final two weeks at reduced volume
    Taper,
}

impl Phase {
    /// Week note describing the phase
    #[must_use]
    pub const fn note(&self) -> &'static str {
        match self {
            Self::Build => "Build phase: volume increases steadily each week.",
            Self::Maintenance => "Maintenance phase: hold peak volume and sharpen quality sessions.",
            Self::Taper => "Taper phase: reduced volume to arrive fresh on race day.",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Build => "build",
            Self::Maintenance => "maintenance",
            Self::Taper => "taper",
        })
    }
}

/// Plan length used when none is requested
#[must_use]
pub const fn default_weeks(goal: Goal) -> u32 {
    match goal {
        Goal::FiveK => default_weeks::FIVE_K,
        Goal::TenK => default_weeks::TEN_K,
        Goal::HalfMarathon => default_weeks::HALF_MARATHON,
        Goal::Marathon => default_weeks::MARATHON,
    }
}

/// Peak (maintenance-phase) weekly volume in km
#[must_use]
pub const fn peak_volume(goal: Goal, level: ExperienceLevel) -> f64 {
    let row = match goal {
        Goal::FiveK => peak_volume::FIVE_K,
        Goal::TenK => peak_volume::TEN_K,
        Goal::HalfMarathon => peak_volume::HALF_MARATHON,
        Goal::Marathon => peak_volume::MARATHON,
    };
    row[level.table_index()]
}

/// Phase of `week` (1-based) in a plan of `total_weeks`.
///
/// The taper takes precedence: the last two weeks are always taper weeks,
/// even in plans so short that they fall inside the build fraction.
#[must_use]
pub fn phase_for_week(week: u32, total_weeks: u32) -> Phase {
    if week + TAPER_WEEKS > total_weeks {
        Phase::Taper
    } else if f64::from(week) <= f64::from(total_weeks) * BUILD_FRACTION {
        Phase::Build
    } else {
        Phase::Maintenance
    }
}

/// Target volume of `week` before rounding.
///
/// - build: `peak * week / (total * 0.7)`
/// - maintenance: `peak`
/// - taper: 70% of peak in the second-to-last week, 50% in the final week
#[must_use]
pub fn week_target(peak: f64, week: u32, total_weeks: u32) -> f64 {
    match phase_for_week(week, total_weeks) {
        Phase::Build => peak * f64::from(week) / (f64::from(total_weeks) * BUILD_FRACTION),
        Phase::Maintenance => peak,
        Phase::Taper if week == total_weeks => peak * FINAL_TAPER_FACTOR,
        Phase::Taper => peak * PENULTIMATE_TAPER_FACTOR,
    }
}

/// Whether `week` is a recovery week: every fourth week, ending before the
/// last three weeks of the plan
#[must_use]
pub const fn is_recovery_week(week: u32, total_weeks: u32) -> bool {
    week % RECOVERY_WEEK_INTERVAL == 0 && week + TAPER_WEEKS < total_weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_plan_is_build_then_taper() {
        let phases: Vec<Phase> = (1..=4).map(|week| phase_for_week(week, 4)).collect();
        assert_eq!(
            phases,
            [Phase::Build, Phase::Build, Phase::Taper, Phase::Taper]
        );
    }

    #[test]
    fn test_recovery_weeks_skip_the_end_of_the_plan() {
        let recovery: Vec<u32> = (1..=16).filter(|week| is_recovery_week(*week, 16)).collect();
        assert_eq!(recovery, [4, 8, 12]);
        let recovery: Vec<u32> = (1..=14).filter(|week| is_recovery_week(*week, 14)).collect();
        assert_eq!(recovery, [4, 8]);
    }
}
