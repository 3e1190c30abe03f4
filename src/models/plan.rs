// ABOUTME: Running plan aggregate: goal, level, weeks of workouts, dates and attached zones
// ABOUTME: Read-only analysis (weekly totals, zone distribution, race date) for downstream consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workout::Workout;
use super::zones::ZoneName;
use crate::intelligence::TrainingZones;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use stride_core::constants::race_distances::{FIVE_K, HALF_MARATHON, MARATHON, TEN_K};
use stride_core::constants::units::DAYS_PER_WEEK;
use stride_core::errors::PlanError;

/// Goal race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// 5 km
    #[serde(rename = "5K")]
    FiveK,
    /// 10 km
    #[serde(rename = "10K")]
    TenK,
    /// 21.0975 km
    #[serde(rename = "Half Marathon")]
    HalfMarathon,
    /// 42.195 km
    #[serde(rename = "Marathon")]
    Marathon,
}

impl Goal {
    /// All goals, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Display name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }

    /// Race distance in km
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        match self {
            Self::FiveK => FIVE_K,
            Self::TenK => TEN_K,
            Self::HalfMarathon => HALF_MARATHON,
            Self::Marathon => MARATHON,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half marathon" | "half" | "21k" => Ok(Self::HalfMarathon),
            "marathon" | "42k" => Ok(Self::Marathon),
            _ => Err(PlanError::UnknownGoal(s.to_owned())),
        }
    }
}

/// Runner experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New or returning runner
    Beginner,
    /// Regular runner
    Intermediate,
    /// Experienced, high-volume runner
    Advanced,
}

impl ExperienceLevel {
    /// All levels, least experienced first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Lowercase name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Column of this level in per-level lookup tables
    #[must_use]
    pub const fn table_index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanError::UnknownLevel(s.to_owned()))
    }
}

/// Distance per zone; always holds all five zones
pub type ZoneDistribution = BTreeMap<ZoneName, f64>;

/// One week of training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based week index
    pub week_number: u32,
    /// One entry per day, Monday first
    pub workouts: Vec<Workout>,
    /// Sum of all workout distances
    pub total_distance_km: f64,
    /// Phase annotations, advisories and warnings
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Week {
    /// Build a week and compute its total distance
    #[must_use]
    pub fn new(week_number: u32, workouts: Vec<Workout>, notes: Vec<String>) -> Self {
        let total_distance_km = workouts.iter().map(Workout::distance_km).sum();
        Self {
            week_number,
            workouts,
            total_distance_km,
            notes,
        }
    }

    /// Workouts that are not rest days
    pub fn training_days(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter().filter(|workout| !workout.is_rest())
    }

    /// Distance attributed to each of the five zones
    #[must_use]
    pub fn zone_distribution(&self) -> ZoneDistribution {
        let mut distribution: ZoneDistribution =
            ZoneName::ALL.into_iter().map(|zone| (zone, 0.0)).collect();
        for (zone, km) in self.workouts.iter().flat_map(Workout::zone_distances) {
            *distribution.entry(zone).or_insert(0.0) += km;
        }
        distribution
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Week {} ===", self.week_number)?;
        writeln!(f, "Total Distance: {} km", self.total_distance_km)?;
        for note in &self.notes {
            writeln!(f, "Note: {note}")?;
        }
        for workout in &self.workouts {
            writeln!(f, "  {workout}")?;
        }
        Ok(())
    }
}

/// A complete training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningPlan {
    /// Plan name
    pub name: String,
    /// Goal race
    pub goal: Goal,
    /// Experience level the volumes are scaled for
    pub level: ExperienceLevel,
    /// Number of weeks; equals `schedule.len()`
    pub weeks: u32,
    /// Training days per week
    pub days_per_week: u8,
    /// Weeks `1..=weeks`, in order
    pub schedule: Vec<Week>,
    /// First day of the plan
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// When the plan was generated
    pub created_date: DateTime<Utc>,
    /// Zones the paces were derived from
    #[serde(default)]
    pub zones: Option<TrainingZones>,
}

impl RunningPlan {
    /// Total distance of every week, in order
    #[must_use]
    pub fn weekly_distances(&self) -> Vec<f64> {
        self.schedule
            .iter()
            .map(|week| week.total_distance_km)
            .collect()
    }

    /// Per-week distance attributed to each zone
    #[must_use]
    pub fn zone_distribution(&self) -> Vec<ZoneDistribution> {
        self.schedule.iter().map(Week::zone_distribution).collect()
    }

    /// Distance over the whole plan
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.schedule.iter().map(|week| week.total_distance_km).sum()
    }

    /// Week by its 1-based index
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.schedule
            .iter()
            .find(|week| week.week_number == week_number)
    }

    /// Same plan anchored to a start date
    #[must_use]
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Final day of the plan, when a start date is set
    #[must_use]
    pub fn race_date(&self) -> Option<NaiveDate> {
        self.start_date.and_then(|start| self.race_date_from(start))
    }

    /// Final day of the plan if it started on `start_date`:
    /// `start + weeks * 7 - 1` days. `None` past the end of the calendar.
    #[must_use]
    pub fn race_date_from(&self, start_date: NaiveDate) -> Option<NaiveDate> {
        let days = i64::from(self.weeks) * DAYS_PER_WEEK - 1;
        start_date.checked_add_days(Days::new(u64::try_from(days).ok()?))
    }
}

impl fmt::Display for RunningPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Running Plan: {}", self.name)?;
        writeln!(f, "Goal: {}", self.goal)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Duration: {} weeks", self.weeks)?;
        writeln!(f, "Training Days: {} days/week", self.days_per_week)?;
        if let Some(start) = self.start_date {
            writeln!(f, "Start Date: {start}")?;
        }
        if let Some(race) = self.race_date() {
            writeln!(f, "Race Date: {race}")?;
        }
        writeln!(f, "Total Distance: {} km", self.total_distance())?;
        writeln!(f, "{}", "=".repeat(50))
    }
}
