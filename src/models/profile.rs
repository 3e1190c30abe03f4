// ABOUTME: Athlete profile with body metrics, running history, injuries and recent race times
// ABOUTME: Derives BMI, injury-risk level, recommended training days and plan-modification reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::ExperienceLevel;
use super::zones::ZoneMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use stride_core::constants::profile::{adjustment, bmi, days, risk};

/// Overall injury-risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below the moderate threshold
    Low,
    /// Score at or above the moderate threshold
    Moderate,
    /// Score at or above the high threshold
    High,
}

impl RiskLevel {
    /// Classify a risk score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= risk::HIGH_RISK_SCORE {
            Self::High
        } else if score >= risk::MODERATE_RISK_SCORE {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// Running injuries the planner has specific advice for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownInjury {
    /// Heel / arch pain
    PlantarFasciitis,
    /// Medial tibial stress syndrome
    ShinSplints,
    /// Lateral knee pain
    ItBandSyndrome,
    /// Achilles tendon pain
    AchillesTendinitis,
}

impl KnownInjury {
    /// Match a free-text injury label, case-insensitively
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "plantar fasciitis" => Some(Self::PlantarFasciitis),
            "shin splints" | "medial tibial stress syndrome" => Some(Self::ShinSplints),
            "it band syndrome" | "itbs" | "iliotibial band syndrome" => {
                Some(Self::ItBandSyndrome)
            }
            "achilles tendinitis" | "achilles tendonitis" => Some(Self::AchillesTendinitis),
            _ => None,
        }
    }

    /// Training modifications while the injury is current
    #[must_use]
    pub const fn advice(&self) -> [&'static str; 2] {
        match self {
            Self::PlantarFasciitis => [
                "Avoid short, fast intervals",
                "Prioritize easy running",
            ],
            Self::ShinSplints => [
                "Reduce running volume on hard surfaces",
                "Consider cross-training (swimming, cycling)",
            ],
            Self::ItBandSyndrome => [
                "Avoid steep downhills",
                "Strengthen glutes and core",
            ],
            Self::AchillesTendinitis => [
                "Avoid intense speed work",
                "Strengthen calves gradually",
            ],
        }
    }
}

/// Athlete profile loaded from JSON; every field is optional in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteProfile {
    /// Athlete name
    pub name: String,
    /// Age in years (0 when unknown)
    pub age: u32,
    /// Body weight in kg (0 when unknown)
    pub weight_kg: f64,
    /// Height in cm (0 when unknown)
    pub height_cm: f64,
    /// Self-assessed experience level
    pub experience_level: ExperienceLevel,
    /// Years of regular running
    pub years_running: f64,
    /// Current weekly volume in km
    pub current_weekly_km: f64,
    /// Days per week the athlete can train
    pub days_per_week: u8,
    /// Days per week the athlete already sustains (0 when unknown)
    pub consistent_days_per_week: u8,
    /// Past injuries
    pub previous_injuries: Vec<String>,
    /// Injuries that are still active
    pub current_injuries: Vec<String>,
    /// Situations that aggravate symptoms
    pub injury_triggers: Vec<String>,
    /// Restrictions that must not be overloaded
    pub red_zones: Vec<String>,
    /// Prevention exercises in use
    pub strength_routines: Vec<String>,
    /// Impact restrictions, e.g. "avoid downhills"
    pub impact_limitations: Vec<String>,
    /// Race label (`"5K"`, `"Half Marathon"`, ...) to time string
    pub recent_race_times: BTreeMap<String, String>,
    /// Method used when zones are built from the race times
    pub zones_calculation_method: ZoneMethod,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            weight_kg: 0.0,
            height_cm: 0.0,
            experience_level: ExperienceLevel::Beginner,
            years_running: 0.0,
            current_weekly_km: 0.0,
            days_per_week: 4,
            consistent_days_per_week: 0,
            previous_injuries: Vec::new(),
            current_injuries: Vec::new(),
            injury_triggers: Vec::new(),
            red_zones: Vec::new(),
            strength_routines: Vec::new(),
            impact_limitations: Vec::new(),
            recent_race_times: BTreeMap::new(),
            zones_calculation_method: ZoneMethod::JackDaniels,
        }
    }
}

impl AthleteProfile {
    /// Body mass index rounded to one decimal; 0 when weight or height is missing
    #[must_use]
    pub fn bmi(&self) -> f64 {
        if self.weight_kg <= 0.0 || self.height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 10.0).round() / 10.0
    }

    /// WHO category of [`Self::bmi`]
    #[must_use]
    pub fn bmi_category(&self) -> &'static str {
        let value = self.bmi();
        if value <= 0.0 {
            "Not calculated"
        } else if value < bmi::UNDERWEIGHT {
            "Underweight"
        } else if value < bmi::NORMAL {
            "Normal weight"
        } else if value < bmi::OVERWEIGHT {
            "Overweight"
        } else {
            "Obese"
        }
    }

    /// Whether BMI is above the elevated threshold
    #[must_use]
    pub fn has_elevated_bmi(&self) -> bool {
        self.bmi() > bmi::ELEVATED
    }

    /// Whether the athlete has less than a year of running
    #[must_use]
    pub fn is_novice(&self) -> bool {
        self.years_running < adjustment::NOVICE_YEARS
    }

    /// Additive injury-risk score
    #[must_use]
    pub fn injury_risk_score(&self) -> u32 {
        let mut score = 0;
        if !self.current_injuries.is_empty() {
            score += risk::CURRENT_INJURY_SCORE;
        }
        if self.previous_injuries.len() > risk::INJURY_HISTORY_THRESHOLD {
            score += risk::INJURY_HISTORY_SCORE;
        }
        if self.has_elevated_bmi() {
            score += risk::BMI_SCORE;
        }
        if self.years_running < risk::VOLUME_EXPERIENCE_YEARS
            && self.current_weekly_km > risk::VOLUME_EXPERIENCE_KM
        {
            score += risk::VOLUME_EXPERIENCE_SCORE;
        }
        score
    }

    /// Injury-risk level derived from the score
    #[must_use]
    pub fn injury_risk(&self) -> RiskLevel {
        RiskLevel::from_score(self.injury_risk_score())
    }

    /// Whether the injury is listed as current or previous (case-insensitive)
    #[must_use]
    pub fn has_injury_history(&self, injury: &str) -> bool {
        self.previous_injuries
            .iter()
            .chain(&self.current_injuries)
            .any(|listed| listed.eq_ignore_ascii_case(injury))
    }

    /// Training days per week capped by experience level
    #[must_use]
    pub fn recommended_days_per_week(&self) -> u8 {
        match self.experience_level {
            ExperienceLevel::Beginner => self.days_per_week.min(days::BEGINNER_MAX_DAYS),
            ExperienceLevel::Intermediate => self.days_per_week.min(days::INTERMEDIATE_MAX_DAYS),
            ExperienceLevel::Advanced => self.days_per_week,
        }
    }

    /// Reasons the standard plan should be modified for this athlete; empty when none
    #[must_use]
    pub fn needs_modified_plan(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.current_injuries.is_empty() {
            reasons.push(format!(
                "Current injuries: {}",
                self.current_injuries.join(", ")
            ));
        }
        if self
            .previous_injuries
            .iter()
            .any(|injury| KnownInjury::from_label(injury) == Some(KnownInjury::ShinSplints))
        {
            reasons.push("History of shin splints - reduce initial volume".to_owned());
        }
        if self
            .previous_injuries
            .iter()
            .any(|injury| KnownInjury::from_label(injury) == Some(KnownInjury::PlantarFasciitis))
        {
            reasons.push("History of plantar fasciitis - include more rest".to_owned());
        }
        if self.has_elevated_bmi() {
            reasons.push("Elevated BMI - more gradual progression".to_owned());
        }
        if self.is_novice() {
            reasons.push("Limited running experience - conservative plan".to_owned());
        }
        if !self.red_zones.is_empty() {
            reasons.push(format!("Red zones to respect: {}", self.red_zones.join(", ")));
        }
        if !self.impact_limitations.is_empty() {
            reasons.push(format!(
                "Impact limits: {}",
                self.impact_limitations.join(", ")
            ));
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounds_to_one_decimal() {
        let profile = AthleteProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            ..AthleteProfile::default()
        };
        assert!((profile.bmi() - 22.9).abs() < 1e-9);
        assert_eq!(profile.bmi_category(), "Normal weight");
        assert!(AthleteProfile::default().bmi().abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_injury_labels() {
        assert_eq!(
            KnownInjury::from_label("IT-Band Syndrome"),
            Some(KnownInjury::ItBandSyndrome)
        );
        assert_eq!(KnownInjury::from_label("sprained ankle"), None);
    }

    #[test]
    fn test_profile_document_fields_are_optional() {
        let profile: AthleteProfile =
            serde_json::from_str(r#"{"name":"Ana","experience_level":"intermediate"}"#).unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(profile.days_per_week, 4);
        assert!(profile.recent_race_times.is_empty());
    }
}
