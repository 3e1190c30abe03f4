// ABOUTME: Profile-driven plan adjustment: cumulative volume multipliers and advisory notes
// ABOUTME: Also caps training days and builds zones from the profile's recent race times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::training_zones::TrainingZones;
use crate::config::ZoneBracketsConfig;
use crate::models::{distance_for_label, AthleteProfile, KnownInjury, RaceTime, RiskLevel};
use stride_core::constants::profile::adjustment::{
    ELEVATED_BMI_VOLUME_FACTOR, HIGH_RISK_VOLUME_FACTOR, MODERATE_RISK_VOLUME_FACTOR,
    NOVICE_VOLUME_FACTOR,
};
use stride_core::constants::profile::days::TEMPLATE_MIN_DAYS;
use stride_core::errors::PlanError;

/// Adjustments derived from an athlete profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAdjustment {
    /// Multiplier applied to the peak weekly volume
    pub volume_factor: f64,
    /// Injury-risk level the factor was derived from
    pub risk_level: RiskLevel,
    /// Advisories attached to week 1
    pub first_week_notes: Vec<String>,
    /// Safety notes attached to every week
    pub persistent_notes: Vec<String>,
}

impl Default for ProfileAdjustment {
    fn default() -> Self {
        Self {
            volume_factor: 1.0,
            risk_level: RiskLevel::Low,
            first_week_notes: Vec::new(),
            persistent_notes: Vec::new(),
        }
    }
}

impl ProfileAdjustment {
    /// Derive the adjustment for a profile.
    ///
    /// Multipliers are cumulative and applied in order: injury risk (high
    /// x0.75 or moderate x0.90), elevated BMI x0.85, under one year of running
    /// x0.80.
    #[must_use]
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        let risk_level = profile.injury_risk();
        let mut volume_factor = match risk_level {
            RiskLevel::High => HIGH_RISK_VOLUME_FACTOR,
            RiskLevel::Moderate => MODERATE_RISK_VOLUME_FACTOR,
            RiskLevel::Low => 1.0,
        };
        let mut reasons = Vec::new();
        if risk_level != RiskLevel::Low {
            reasons.push(format!("{risk_level} injury risk"));
        }
        if profile.has_elevated_bmi() {
            volume_factor *= ELEVATED_BMI_VOLUME_FACTOR;
            reasons.push("elevated BMI".to_owned());
        }
        if profile.is_novice() {
            volume_factor *= NOVICE_VOLUME_FACTOR;
            reasons.push("less than one year of running".to_owned());
        }

        let mut first_week_notes = Vec::new();
        if !reasons.is_empty() {
            first_week_notes.push(format!(
                "Volume set to {:.0}% of the standard plan ({}).",
                volume_factor * 100.0,
                reasons.join(", ")
            ));
        }
        first_week_notes.extend(injury_modifications(profile));
        if risk_level == RiskLevel::High {
            first_week_notes.push("Consider adding an extra rest day".to_owned());
            first_week_notes.push("Replace 1-2 runs with cross-training".to_owned());
        }

        Self {
            volume_factor,
            risk_level,
            first_week_notes,
            persistent_notes: persistent_notes(profile),
        }
    }
}

fn injury_modifications(profile: &AthleteProfile) -> Vec<String> {
    let mut notes: Vec<String> = profile
        .current_injuries
        .iter()
        .filter_map(|injury| KnownInjury::from_label(injury))
        .flat_map(|injury| injury.advice())
        .map(str::to_owned)
        .collect();

    if !profile.impact_limitations.is_empty() {
        notes.push(format!(
            "Limit impact: {}",
            profile.impact_limitations.join(", ")
        ));
    }
    if !profile.red_zones.is_empty() {
        notes.push(format!("Red zones defined: {}", profile.red_zones.join(", ")));
    }
    if !profile.injury_triggers.is_empty() {
        notes.push(format!(
            "Monitor triggers: {}",
            profile.injury_triggers.join(", ")
        ));
    }
    notes
}

fn persistent_notes(profile: &AthleteProfile) -> Vec<String> {
    [
        ("Impact limits", &profile.impact_limitations),
        ("Red zones (avoid overload)", &profile.red_zones),
        ("Keep up strength/prevention work", &profile.strength_routines),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(heading, items)| format!("{heading}: {}", items.join(", ")))
    .collect()
}

/// Training days after applying the profile's caps.
///
/// The requested count is limited by the athlete's consistent days (when
/// known) and the experience-level recommendation, but never drops below the
/// smallest template.
#[must_use]
pub fn capped_days_per_week(requested: u8, profile: &AthleteProfile) -> u8 {
    let mut days = requested;
    if profile.consistent_days_per_week > 0 {
        days = days.min(profile.consistent_days_per_week);
    }
    days.min(profile.recommended_days_per_week())
        .max(TEMPLATE_MIN_DAYS)
}

/// Zones calculated from the profile's recent race times with `brackets`.
///
/// Labels that do not resolve to a distance are skipped. Returns `None` when
/// no usable sample remains.
///
/// # Errors
///
/// Returns [`PlanError::MalformedTimeString`] for an unparsable time and any
/// calculation error of the profile's zone method.
pub fn zones_from_profile(
    profile: &AthleteProfile,
    brackets: &ZoneBracketsConfig,
) -> Result<Option<TrainingZones>, PlanError> {
    let mut zones = TrainingZones::new(profile.zones_calculation_method);
    for (label, time) in &profile.recent_race_times {
        let Some(distance_km) = distance_for_label(label) else {
            continue;
        };
        zones.add_race_time(label.clone(), RaceTime::from_time_string(distance_km, time)?);
    }
    if zones.race_times().is_empty() {
        return Ok(None);
    }
    zones.calculate_zones_with(brackets)?;
    Ok(Some(zones))
}
