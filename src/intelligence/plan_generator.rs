// ABOUTME: Plan generator assembling a periodized RunningPlan from goal, level, duration and days
// ABOUTME: Optionally informed by training zones and an athlete profile; pure apart from the timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::periodization::{
    default_weeks, is_recovery_week, peak_volume, phase_for_week, week_target, Phase,
};
use super::profile_adjustment::{capped_days_per_week, zones_from_profile, ProfileAdjustment};
use super::training_zones::TrainingZones;
use super::week_templates::{quality_session, slots_for, QualitySession, Slot, SlotRole};
use super::workout_builder::{rounded_distance, WorkoutBuilder};
use crate::config::{PlannerConfig, RecoveryWeekPolicy, ZoneBracketsConfig};
use crate::models::{AthleteProfile, ExperienceLevel, Goal, RunningPlan, Week, Workout};
use chrono::{Utc, Weekday};
use stride_core::constants::planning::periodization::MIN_PLAN_WEEKS;
use stride_core::errors::PlanError;
use tracing::debug;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Per-plan values shared by every week
struct PlanLayout<'a> {
    weeks: u32,
    peak: f64,
    days_per_week: u8,
    slots: &'a [Slot],
    builder: WorkoutBuilder<'a>,
    adjustment: &'a ProfileAdjustment,
}

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Plan name
    pub name: String,
    /// Goal race
    pub goal: Goal,
    /// Experience level
    pub level: ExperienceLevel,
    /// Plan length; the goal's default when `None`
    pub weeks: Option<u32>,
    /// Training days per week (3-6)
    pub days_per_week: u8,
}

impl PlanRequest {
    /// Request with the goal's default length and four training days
    pub fn new(name: impl Into<String>, goal: Goal, level: ExperienceLevel) -> Self {
        Self {
            name: name.into(),
            goal,
            level,
            weeks: None,
            days_per_week: 4,
        }
    }

    /// Set the plan length
    #[must_use]
    pub const fn weeks(mut self, weeks: u32) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Set the training days per week
    #[must_use]
    pub const fn days_per_week(mut self, days_per_week: u8) -> Self {
        self.days_per_week = days_per_week;
        self
    }
}

/// Periodized plan generator
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    config: PlannerConfig,
    brackets: ZoneBracketsConfig,
}

impl PlanGenerator {
    /// Generator with an explicit configuration
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            brackets: ZoneBracketsConfig::default(),
        }
    }

    /// Use `brackets` for zones built from a profile's race times
    #[must_use]
    pub const fn with_brackets(mut self, brackets: ZoneBracketsConfig) -> Self {
        self.brackets = brackets;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Zone brackets used for profile zones
    #[must_use]
    pub const fn brackets(&self) -> &ZoneBracketsConfig {
        &self.brackets
    }

    /// Generate a complete plan.
    ///
    /// With a profile, the peak volume is scaled by the profile adjustment,
    /// training days are capped, and zones are built from the profile's race
    /// times when `zones` is `None`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidSchedule`] if days per week is outside 3-6
    /// - [`PlanError::InvalidDuration`] if the plan is shorter than 4 weeks
    /// - errors from building zones out of the profile's race times
    pub fn generate(
        &self,
        request: &PlanRequest,
        zones: Option<&TrainingZones>,
        profile: Option<&AthleteProfile>,
    ) -> Result<RunningPlan, PlanError> {
        slots_for(request.days_per_week)?;
        let weeks = request.weeks.unwrap_or_else(|| default_weeks(request.goal));
        if weeks < MIN_PLAN_WEEKS {
            return Err(PlanError::InvalidDuration {
                weeks,
                minimum: MIN_PLAN_WEEKS,
            });
        }

        let (adjustment, days_per_week, profile_zones) = match profile {
            Some(profile) => {
                let profile_zones = if zones.is_none() {
                    zones_from_profile(profile, &self.brackets)?
                } else {
                    None
                };
                (
                    ProfileAdjustment::from_profile(profile),
                    capped_days_per_week(request.days_per_week, profile),
                    profile_zones,
                )
            }
            None => (ProfileAdjustment::default(), request.days_per_week, None),
        };
        let zones = zones.or(profile_zones.as_ref());
        let slots = slots_for(days_per_week)?;
        let peak = peak_volume(request.goal, request.level) * adjustment.volume_factor;

        let layout = PlanLayout {
            weeks,
            peak,
            days_per_week,
            slots,
            builder: WorkoutBuilder::new(zones),
            adjustment: &adjustment,
        };
        let schedule: Vec<Week> = (1..=weeks)
            .map(|week_number| self.build_week(&layout, week_number))
            .collect();

        debug!(
            goal = %request.goal,
            level = %request.level,
            weeks,
            days_per_week,
            peak_km = peak,
            paced = zones.is_some_and(TrainingZones::is_calculated),
            "generated running plan"
        );

        Ok(RunningPlan {
            name: request.name.clone(),
            goal: request.goal,
            level: request.level,
            weeks,
            days_per_week,
            schedule,
            start_date: None,
            created_date: Utc::now(),
            zones: zones.cloned(),
        })
    }

    /// Target volume of every week before rounding, including recovery-week policy
    #[must_use]
    pub fn weekly_targets(&self, peak: f64, weeks: u32) -> Vec<f64> {
        (1..=weeks)
            .map(|week| self.target_for_week(peak, week, weeks))
            .collect()
    }

    fn target_for_week(&self, peak: f64, week: u32, weeks: u32) -> f64 {
        let target = week_target(peak, week, weeks);
        if is_recovery_week(week, weeks) {
            target * self.config.recovery_multiplier()
        } else {
            target
        }
    }

    fn build_week(&self, layout: &PlanLayout<'_>, week_number: u32) -> Week {
        let builder = &layout.builder;
        let target = self.target_for_week(layout.peak, week_number, layout.weeks);
        let workouts = WEEKDAYS
            .iter()
            .map(|day| {
                layout.slots.iter().find(|slot| slot.day == *day).map_or_else(
                    || WorkoutBuilder::rest_day(*day),
                    |slot| {
                        let distance = target * slot.share;
                        if rounded_distance(distance) <= 0.0 {
                            return WorkoutBuilder::rest_day(slot.day);
                        }
                        match slot.role {
                            SlotRole::Easy => builder.easy_run(slot.day, distance),
                            SlotRole::Long => builder.long_run(slot.day, distance),
                            SlotRole::Quality => quality_workout(
                                builder,
                                quality_session(layout.days_per_week, week_number),
                                slot.day,
                                distance,
                            ),
                        }
                    },
                )
            })
            .collect();

        Week::new(
            week_number,
            workouts,
            self.week_notes(week_number, layout.weeks, layout.adjustment),
        )
    }

    fn week_notes(&self, week_number: u32, weeks: u32, adjustment: &ProfileAdjustment) -> Vec<String> {
        let phase = phase_for_week(week_number, weeks);
        let mut notes = vec![phase.note().to_owned()];

        if week_number == 1 {
            notes.push("Welcome to your training plan! Start easy and focus on consistency.".to_owned());
            notes.extend(adjustment.first_week_notes.iter().cloned());
        }
        if week_number == weeks {
            notes.push("Race week! Keep runs short and easy. Trust your training!".to_owned());
        } else if phase == Phase::Taper {
            notes.push("Taper week: reduce volume to arrive fresh for race day.".to_owned());
        } else if is_recovery_week(week_number, weeks) {
            notes.push(match self.config.recovery_week_policy {
                RecoveryWeekPolicy::Annotate => {
                    "Recovery week: keep every run relaxed to absorb training and prevent overtraining."
                        .to_owned()
                }
                RecoveryWeekPolicy::Reduce => format!(
                    "Recovery week: volume reduced by {:.0}% to absorb training and prevent overtraining.",
                    (1.0 - self.config.recovery_week_factor) * 100.0
                ),
            });
        }

        notes.extend(adjustment.persistent_notes.iter().cloned());
        notes
    }
}

fn quality_workout(
    builder: &WorkoutBuilder<'_>,
    session: QualitySession,
    day: Weekday,
    distance_km: f64,
) -> Workout {
    match session {
        QualitySession::Easy => builder.easy_run(day, distance_km),
        QualitySession::Tempo => builder.tempo_run(day, distance_km),
        QualitySession::Interval => builder.interval_session(day, distance_km),
        QualitySession::Fartlek => builder.fartlek_run(day, distance_km),
    }
}
