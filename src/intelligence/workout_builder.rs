// ABOUTME: Assembles typed workouts from a day, a slot distance and optional training zones
// ABOUTME: Applies the final rounding pass: 5 km distances, 30 minute durations, 0.1 km segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::training_zones::TrainingZones;
use crate::models::{
    ContinuousRun, IntervalSession, PaceTarget, RestDay, SegmentedRun, Workout, WorkoutSegment,
    ZoneName,
};
use crate::utils::time_format::{format_pace, round_half_up_to_multiple, round_to_tenth};
use chrono::Weekday;
use stride_core::constants::planning::rounding::{DISTANCE_UNIT_KM, DURATION_UNIT_MINUTES};
use stride_core::constants::planning::workouts::{
    FARTLEK_SPLIT, INTERVAL_RECOVERY_MINUTES, INTERVAL_REP_KM, INTERVAL_SPLIT, MAX_INTERVAL_REPS,
    MIN_INTERVAL_REPS, TEMPO_SPLIT,
};
use stride_core::constants::units::SECONDS_PER_MINUTE;

/// Tolerance absorbing binary representation error before flooring a ratio
const RATIO_EPSILON: f64 = 1e-9;

/// Workout distance shown to the athlete: nearest 5 km, half-up.
///
/// Slots under 2.5 km round to zero and are scheduled as rest.
#[must_use]
pub fn rounded_distance(distance_km: f64) -> f64 {
    round_half_up_to_multiple(distance_km.max(0.0), DISTANCE_UNIT_KM)
}

/// Estimated workout duration: nearest 30 minutes, half-up, at least 30 for any running
#[must_use]
pub fn rounded_duration(minutes: f64) -> u32 {
    if minutes <= 0.0 {
        return 0;
    }
    round_half_up_to_multiple(minutes, DURATION_UNIT_MINUTES).max(DURATION_UNIT_MINUTES) as u32
}

/// Number of interval repetitions for a work block: `floor(work / 0.8)` clamped to 4-8
#[must_use]
pub fn interval_repetitions(work_km: f64) -> u32 {
    let reps = (work_km / INTERVAL_REP_KM + RATIO_EPSILON).floor().max(0.0) as u32;
    reps.clamp(MIN_INTERVAL_REPS, MAX_INTERVAL_REPS)
}

fn whole_minutes(minutes: f64) -> u32 {
    (minutes + 0.5).floor().max(0.0) as u32
}

/// Builds workouts against an optional pace table.
///
/// Without calculated zones every session is still fully structured; only
/// paces and pace-derived durations are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutBuilder<'a> {
    zones: Option<&'a TrainingZones>,
}

impl<'a> WorkoutBuilder<'a> {
    /// Builder using `zones` for paces when they are calculated
    #[must_use]
    pub const fn new(zones: Option<&'a TrainingZones>) -> Self {
        Self { zones }
    }

    fn pace(&self, zone: ZoneName, target: PaceTarget) -> Option<f64> {
        self.zones
            .and_then(|zones| zones.zone_pace(zone, target).ok())
    }

    fn segment(
        &self,
        name: &str,
        distance_km: f64,
        zone: ZoneName,
        description: &str,
    ) -> (WorkoutSegment, Option<f64>) {
        let pace = self.pace(zone, PaceTarget::Middle);
        let minutes = pace.map(|p| distance_km * p / SECONDS_PER_MINUTE);
        let segment = WorkoutSegment {
            distance_km: Some(round_to_tenth(distance_km)),
            duration_minutes: minutes.map(whole_minutes),
            pace: pace.map(format_pace),
            zone: Some(zone),
            ..WorkoutSegment::new(name, description)
        };
        (segment, minutes)
    }

    /// Continuous run at the middle of the easy zone
    #[must_use]
    pub fn easy_run(&self, day: Weekday, distance_km: f64) -> Workout {
        Workout::Easy(self.continuous(
            day,
            distance_km,
            PaceTarget::Middle,
            "Comfortable, conversational effort",
        ))
    }

    /// Continuous run at the slow end of the easy zone
    #[must_use]
    pub fn long_run(&self, day: Weekday, distance_km: f64) -> Workout {
        Workout::LongRun(self.continuous(
            day,
            distance_km,
            PaceTarget::Max,
            "Build endurance at an easy pace",
        ))
    }

    fn continuous(
        &self,
        day: Weekday,
        distance_km: f64,
        target: PaceTarget,
        description: &str,
    ) -> ContinuousRun {
        let distance = rounded_distance(distance_km);
        let pace = self.pace(ZoneName::Easy, target);
        ContinuousRun {
            day,
            distance_km: distance,
            duration_minutes: pace.map(|p| rounded_duration(distance * p / SECONDS_PER_MINUTE)),
            target_pace: pace.map(format_pace),
            description: description.to_owned(),
        }
    }

    /// Warmup 18%, threshold block 60%, cooldown 22%
    #[must_use]
    pub fn tempo_run(&self, day: Weekday, distance_km: f64) -> Workout {
        let distance = rounded_distance(distance_km);
        let [warmup_share, main_share, cooldown_share] = TEMPO_SPLIT;

        let parts = [
            self.segment(
                "Warmup",
                distance * warmup_share,
                ZoneName::Easy,
                "Easy pace to prepare the body",
            ),
            self.segment(
                "Tempo",
                distance * main_share,
                ZoneName::Threshold,
                "Threshold pace: controlled, sustained effort",
            ),
            self.segment(
                "Cooldown",
                distance * cooldown_share,
                ZoneName::Easy,
                "Easy pace to recover",
            ),
        ];

        Workout::Tempo(self.segmented(
            day,
            distance,
            "Sustained effort at threshold pace",
            parts,
        ))
    }

    /// Warmup 20%, variable-pace block 65%, cooldown 15%
    #[must_use]
    pub fn fartlek_run(&self, day: Weekday, distance_km: f64) -> Workout {
        let distance = rounded_distance(distance_km);
        let [warmup_share, main_share, cooldown_share] = FARTLEK_SPLIT;

        let (mut play, play_minutes) = self.segment(
            "Fartlek",
            distance * main_share,
            ZoneName::Threshold,
            "Unstructured surges between easy and interval effort, by feel",
        );
        play.pace = None;

        let parts = [
            self.segment(
                "Warmup",
                distance * warmup_share,
                ZoneName::Easy,
                "Easy pace to prepare the body",
            ),
            (play, play_minutes),
            self.segment(
                "Cooldown",
                distance * cooldown_share,
                ZoneName::Easy,
                "Easy pace to recover",
            ),
        ];

        Workout::Fartlek(self.segmented(
            day,
            distance,
            "Speed play: vary the pace freely",
            parts,
        ))
    }

    fn segmented(
        &self,
        day: Weekday,
        distance: f64,
        description: &str,
        parts: [(WorkoutSegment, Option<f64>); 3],
    ) -> SegmentedRun {
        let minutes: Option<f64> = parts.iter().map(|(_, minutes)| *minutes).sum();
        SegmentedRun {
            day,
            distance_km: distance,
            duration_minutes: minutes.map(rounded_duration),
            target_pace: self
                .pace(ZoneName::Threshold, PaceTarget::Middle)
                .map(format_pace),
            description: description.to_owned(),
            segments: parts.into_iter().map(|(segment, _)| segment).collect(),
        }
    }

    /// Warmup 20%, repeated work 36%, repeated recovery 24%, cooldown 20%
    #[must_use]
    pub fn interval_session(&self, day: Weekday, distance_km: f64) -> Workout {
        let distance = rounded_distance(distance_km);
        let [warmup_share, work_share, recovery_share, cooldown_share] = INTERVAL_SPLIT;
        let repetitions = interval_repetitions(distance * work_share);
        let reps = f64::from(repetitions);

        let (warmup, warmup_minutes) = self.segment(
            "Warmup",
            distance * warmup_share,
            ZoneName::Easy,
            "Easy pace to prepare the body",
        );
        let (mut work, work_minutes) = self.segment(
            "Interval",
            distance * work_share / reps,
            ZoneName::Interval,
            "Interval pace: hard, controlled effort",
        );
        work.repetitions = repetitions;

        let (mut recovery, _) = self.segment(
            "Recovery",
            distance * recovery_share / reps,
            ZoneName::Easy,
            "Easy jog between repetitions",
        );
        recovery.duration_minutes = Some(INTERVAL_RECOVERY_MINUTES);
        recovery.repetitions = repetitions;

        let (cooldown, cooldown_minutes) = self.segment(
            "Cooldown",
            distance * cooldown_share,
            ZoneName::Easy,
            "Easy pace to recover",
        );

        let total_minutes = [warmup_minutes, work_minutes.map(|m| m * reps), cooldown_minutes]
            .into_iter()
            .sum::<Option<f64>>()
            .map(|m| m + f64::from(INTERVAL_RECOVERY_MINUTES) * reps);

        Workout::Interval(IntervalSession {
            day,
            distance_km: distance,
            duration_minutes: total_minutes.map(rounded_duration),
            target_pace: self
                .pace(ZoneName::Interval, PaceTarget::Middle)
                .map(format_pace),
            description: format!("Speed session: {repetitions} x VO2max repetitions"),
            warmup,
            work,
            recovery,
            cooldown,
        })
    }

    /// Day off
    #[must_use]
    pub fn rest_day(day: Weekday) -> Workout {
        Workout::Rest(RestDay {
            day,
            description: "Rest or gentle mobility work".to_owned(),
        })
    }
}
