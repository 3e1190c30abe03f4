// ABOUTME: Training zone vocabulary: zone names, calculation methods and pace ranges
// ABOUTME: Shared by the zone calculator, the workout builder and plan analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stride_core::errors::PlanError;

/// One of the five training intensities, slowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneName {
    /// Easy / recovery running
    Easy,
    /// Marathon race pace
    Marathon,
    /// Threshold / tempo
    Threshold,
    /// VO2max intervals
    Interval,
    /// Fast repetitions
    Repetition,
}

impl ZoneName {
    /// All zones, slowest first
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Machine name used in serialized documents
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy/Recovery",
            Self::Marathon => "Marathon Pace",
            Self::Threshold => "Threshold/Tempo",
            Self::Interval => "Interval/5K",
            Self::Repetition => "Repetition/Fast",
        }
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneName {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanError::UnknownZone(s.to_owned()))
    }
}

/// Zone calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMethod {
    /// Jack Daniels VDOT: best sample's VDOT inverted through the oxygen-cost curve
    #[default]
    JackDaniels,
    /// Linear distance-time model across the two most distant samples
    CriticalVelocity,
}

impl ZoneMethod {
    /// Method tag used in serialized documents
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JackDaniels => "jack_daniels",
            Self::CriticalVelocity => "critical_velocity",
        }
    }
}

impl fmt::Display for ZoneMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneMethod {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "jack_daniels" | "daniels" | "vdot" => Ok(Self::JackDaniels),
            "critical_velocity" | "cv" => Ok(Self::CriticalVelocity),
            _ => Err(PlanError::UnknownMethod(s.to_owned())),
        }
    }
}

/// Which point of a zone's pace range to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaceTarget {
    /// Fastest pace of the zone (fewest seconds per km)
    Min,
    /// Slowest pace of the zone (most seconds per km)
    Max,
    /// Midpoint of the range
    #[default]
    Middle,
}

/// Pace range of a zone in seconds per km; `min_pace` is the faster bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    /// Fastest pace (seconds per km)
    pub min_pace: f64,
    /// Slowest pace (seconds per km)
    pub max_pace: f64,
}

impl PaceRange {
    /// Read one end or the midpoint of the range
    #[must_use]
    pub fn at(&self, target: PaceTarget) -> f64 {
        match target {
            PaceTarget::Min => self.min_pace,
            PaceTarget::Max => self.max_pace,
            PaceTarget::Middle => (self.min_pace + self.max_pace) / 2.0,
        }
    }
}
