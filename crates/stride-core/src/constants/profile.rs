// ABOUTME: Athlete profile thresholds for injury risk and volume adjustment
// ABOUTME: Cumulative multipliers applied before periodization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Injury-risk scoring
pub mod risk {
    /// Score added when any injury is current
    pub const CURRENT_INJURY_SCORE: u32 = 3;
    /// Score added for a long injury history
    pub const INJURY_HISTORY_SCORE: u32 = 2;
    /// More previous injuries than this counts as a long history
    pub const INJURY_HISTORY_THRESHOLD: usize = 2;
    /// Score added for elevated BMI
    pub const BMI_SCORE: u32 = 2;
    /// Score added for high volume on little experience
    pub const VOLUME_EXPERIENCE_SCORE: u32 = 2;
    /// Fewer years running than this is "little experience" for volume scoring
    pub const VOLUME_EXPERIENCE_YEARS: f64 = 2.0;
    /// More weekly km than this is "high volume" for volume scoring
    pub const VOLUME_EXPERIENCE_KM: f64 = 40.0;
    /// Scores at or above this are high risk
    pub const HIGH_RISK_SCORE: u32 = 5;
    /// Scores at or above this are moderate risk
    pub const MODERATE_RISK_SCORE: u32 = 3;
}

/// Volume multipliers, applied cumulatively in declaration order
pub mod adjustment {
    /// High injury risk
    pub const HIGH_RISK_VOLUME_FACTOR: f64 = 0.75;
    /// Moderate injury risk
    pub const MODERATE_RISK_VOLUME_FACTOR: f64 = 0.90;
    /// BMI above [`super::bmi::ELEVATED`]
    pub const ELEVATED_BMI_VOLUME_FACTOR: f64 = 0.85;
    /// Fewer than [`NOVICE_YEARS`] of running
    pub const NOVICE_VOLUME_FACTOR: f64 = 0.80;
    /// Runners with less experience than this get the novice multiplier
    pub const NOVICE_YEARS: f64 = 1.0;
}

/// Body-mass-index thresholds
pub mod bmi {
    /// BMI above this triggers the elevated-BMI rules
    pub const ELEVATED: f64 = 28.0;
    /// Underweight upper bound
    pub const UNDERWEIGHT: f64 = 18.5;
    /// Normal upper bound
    pub const NORMAL: f64 = 25.0;
    /// Overweight upper bound
    pub const OVERWEIGHT: f64 = 30.0;
}

/// Training-day caps by experience
pub mod days {
    /// Most days per week recommended for beginners
    pub const BEGINNER_MAX_DAYS: u8 = 4;
    /// Most days per week recommended for intermediate runners
    pub const INTERMEDIATE_MAX_DAYS: u8 = 5;
    /// Fewest days any template supports
    pub const TEMPLATE_MIN_DAYS: u8 = 3;
}
