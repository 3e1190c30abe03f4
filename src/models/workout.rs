// ABOUTME: Workout sum type over the six session kinds plus the segment structure of quality sessions
// ABOUTME: Each kind carries only the fields it needs so incomplete sessions are unrepresentable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::zones::ZoneName;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

const fn one() -> u32 {
    1
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if passes by reference
const fn is_one(value: &u32) -> bool {
    *value == 1
}

/// One physiologically distinct chunk of a structured workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSegment {
    /// Segment name, e.g. "Warmup"
    pub name: String,
    /// Distance of one repetition in km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Duration of one repetition in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Target pace as `M:SS` per km (or a range)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// How many times the segment is run
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub repetitions: u32,
    /// Free-text guidance
    #[serde(default)]
    pub description: String,
    /// Zone this segment's distance is attributed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneName>,
}

impl WorkoutSegment {
    /// Segment run once, with no distance, duration or pace yet
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance_km: None,
            duration_minutes: None,
            pace: None,
            repetitions: 1,
            description: description.into(),
            zone: None,
        }
    }

    /// Distance of this segment across all repetitions
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.distance_km.unwrap_or(0.0) * f64::from(self.repetitions)
    }

    /// Duration of this segment across all repetitions
    #[must_use]
    pub fn total_duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
            .map(|minutes| minutes * self.repetitions)
    }
}

impl fmt::Display for WorkoutSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repetitions > 1 {
            write!(f, "{}x {}", self.repetitions, self.name)?;
        } else {
            f.write_str(&self.name)?;
        }

        let mut details = Vec::new();
        if let Some(distance) = self.distance_km {
            details.push(format!("{distance} km"));
        }
        if let Some(minutes) = self.duration_minutes {
            details.push(format!("{minutes} min"));
        }
        if let Some(pace) = &self.pace {
            details.push(format!("@ {pace}/km"));
        }
        if !details.is_empty() {
            write!(f, ": {}", details.join(", "))?;
        }
        Ok(())
    }
}

/// Unstructured continuous run (easy runs and long runs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousRun {
    /// Day of the week
    pub day: Weekday,
    /// Total distance in km
    pub distance_km: f64,
    /// Estimated total duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Target pace as `M:SS` per km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Free-text guidance
    #[serde(default)]
    pub description: String,
}

/// Run made of an ordered list of segments (tempo and fartlek)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedRun {
    /// Day of the week
    pub day: Weekday,
    /// Total distance in km
    pub distance_km: f64,
    /// Estimated total duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Pace of the main block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Free-text guidance
    #[serde(default)]
    pub description: String,
    /// Segments in running order
    pub segments: Vec<WorkoutSegment>,
}

/// Repetition session: warmup, repeated work and recovery, cooldown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSession {
    /// Day of the week
    pub day: Weekday,
    /// Total distance in km
    pub distance_km: f64,
    /// Estimated total duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Pace of the work repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Free-text guidance
    #[serde(default)]
    pub description: String,
    /// Easy warmup
    pub warmup: WorkoutSegment,
    /// One work repetition, with the repetition count
    pub work: WorkoutSegment,
    /// One jog recovery, with the repetition count
    pub recovery: WorkoutSegment,
    /// Easy cooldown
    pub cooldown: WorkoutSegment,
}

impl IntervalSession {
    /// Number of work repetitions
    #[must_use]
    pub const fn repetitions(&self) -> u32 {
        self.work.repetitions
    }
}

/// Day off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestDay {
    /// Day of the week
    pub day: Weekday,
    /// Free-text guidance
    #[serde(default)]
    pub description: String,
}

/// One day's prescribed session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Workout {
    /// Conversational-pace run
    Easy(ContinuousRun),
    /// Longest run of the week, at the slow end of the easy zone
    LongRun(ContinuousRun),
    /// Sustained threshold block between easy warmup and cooldown
    Tempo(SegmentedRun),
    /// Repeated interval-pace work with jog recoveries
    Interval(IntervalSession),
    /// Unstructured variable-pace block between easy warmup and cooldown
    Fartlek(SegmentedRun),
    /// No running
    Rest(RestDay),
}

impl Workout {
    /// Day of the week this session falls on
    #[must_use]
    pub const fn day(&self) -> Weekday {
        match self {
            Self::Easy(run) | Self::LongRun(run) => run.day,
            Self::Tempo(run) | Self::Fartlek(run) => run.day,
            Self::Interval(session) => session.day,
            Self::Rest(rest) => rest.day,
        }
    }

    /// Human-readable session type
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Easy(_) => "Easy Run",
            Self::LongRun(_) => "Long Run",
            Self::Tempo(_) => "Tempo Run",
            Self::Interval(_) => "Interval Training",
            Self::Fartlek(_) => "Fartlek",
            Self::Rest(_) => "Rest",
        }
    }

    /// Total distance in km (zero for rest days)
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        match self {
            Self::Easy(run) | Self::LongRun(run) => run.distance_km,
            Self::Tempo(run) | Self::Fartlek(run) => run.distance_km,
            Self::Interval(session) => session.distance_km,
            Self::Rest(_) => 0.0,
        }
    }

    /// Estimated total duration in minutes, when paces are known
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<u32> {
        match self {
            Self::Easy(run) | Self::LongRun(run) => run.duration_minutes,
            Self::Tempo(run) | Self::Fartlek(run) => run.duration_minutes,
            Self::Interval(session) => session.duration_minutes,
            Self::Rest(_) => None,
        }
    }

    /// Target pace of the main effort, when paces are known
    #[must_use]
    pub fn target_pace(&self) -> Option<&str> {
        match self {
            Self::Easy(run) | Self::LongRun(run) => run.target_pace.as_deref(),
            Self::Tempo(run) | Self::Fartlek(run) => run.target_pace.as_deref(),
            Self::Interval(session) => session.target_pace.as_deref(),
            Self::Rest(_) => None,
        }
    }

    /// Free-text guidance
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Easy(run) | Self::LongRun(run) => &run.description,
            Self::Tempo(run) | Self::Fartlek(run) => &run.description,
            Self::Interval(session) => &session.description,
            Self::Rest(rest) => &rest.description,
        }
    }

    /// Zone of the session's main effort; `None` for rest days
    #[must_use]
    pub const fn training_zone(&self) -> Option<ZoneName> {
        match self {
            Self::Easy(_) | Self::LongRun(_) => Some(ZoneName::Easy),
            Self::Tempo(_) | Self::Fartlek(_) => Some(ZoneName::Threshold),
            Self::Interval(_) => Some(ZoneName::Interval),
            Self::Rest(_) => None,
        }
    }

    /// Segments in running order; empty for unstructured sessions
    #[must_use]
    pub fn segments(&self) -> Vec<&WorkoutSegment> {
        match self {
            Self::Tempo(run) | Self::Fartlek(run) => run.segments.iter().collect(),
            Self::Interval(session) => vec![
                &session.warmup,
                &session.work,
                &session.recovery,
                &session.cooldown,
            ],
            Self::Easy(_) | Self::LongRun(_) | Self::Rest(_) => Vec::new(),
        }
    }

    /// Whether this is a day off
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest(_))
    }

    /// Distance attributed to each zone.
    ///
    /// Structured sessions attribute each segment's distance (times its
    /// repetitions) to the segment's zone, falling back to the session zone;
    /// unstructured sessions attribute their whole distance to their zone.
    #[must_use]
    pub fn zone_distances(&self) -> Vec<(ZoneName, f64)> {
        let Some(session_zone) = self.training_zone() else {
            return Vec::new();
        };
        let segments = self.segments();
        if segments.is_empty() {
            return vec![(session_zone, self.distance_km())];
        }
        segments
            .into_iter()
            .filter(|segment| segment.distance_km.is_some())
            .map(|segment| {
                (
                    segment.zone.unwrap_or(session_zone),
                    segment.total_distance_km(),
                )
            })
            .collect()
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day(), self.kind())?;
        if self.is_rest() {
            return Ok(());
        }

        write!(f, " - {} km", self.distance_km())?;
        if let Some(minutes) = self.duration_minutes() {
            write!(f, " ({minutes} min)")?;
        }
        if let Some(pace) = self.target_pace() {
            write!(f, " @ {pace}/km")?;
        }
        if let Some(zone) = self.training_zone() {
            write!(f, " [{}]", zone.as_str().to_uppercase())?;
        }
        for segment in self.segments() {
            write!(f, "\n    - {segment}")?;
        }
        Ok(())
    }
}
