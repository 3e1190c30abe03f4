// ABOUTME: Immutable race performance sample (distance plus elapsed time) used to calibrate zones
// ABOUTME: Includes time-string construction and the distance label table for common races
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::utils::time_format::{format_duration, format_pace, parse_time_string};
use serde::{Deserialize, Serialize};
use std::fmt;
use stride_core::constants::race_distances::{
    DISTANCE_EPSILON_KM, FIFTEEN_K, FIVE_K, HALF_MARATHON, MARATHON, TEN_K,
};
use stride_core::constants::units::METERS_PER_KM;
use stride_core::errors::PlanError;

/// Named race distances recognised by [`distance_for_label`] and [`label_for_distance`]
const DISTANCE_LABELS: [(&str, f64); 7] = [
    ("5K", FIVE_K),
    ("10K", TEN_K),
    ("15K", FIFTEEN_K),
    ("Half Marathon", HALF_MARATHON),
    ("21K", HALF_MARATHON),
    ("Marathon", MARATHON),
    ("42K", MARATHON),
];

/// A single race performance.
///
/// Both fields are private so the `distance > 0`, `time > 0` invariant holds for
/// every value, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRaceTime")]
pub struct RaceTime {
    distance_km: f64,
    time_seconds: u64,
}

#[derive(Deserialize)]
struct RawRaceTime {
    distance_km: f64,
    time_seconds: u64,
}

impl TryFrom<RawRaceTime> for RaceTime {
    type Error = PlanError;

    fn try_from(raw: RawRaceTime) -> Result<Self, Self::Error> {
        Self::new(raw.distance_km, raw.time_seconds)
    }
}

impl RaceTime {
    /// Create a sample from a distance in km and a time in whole seconds
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRaceSample`] when the distance is not a
    /// positive finite number or the time is zero.
    pub fn new(distance_km: f64, time_seconds: u64) -> Result<Self, PlanError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(PlanError::InvalidRaceSample(format!(
                "distance must be positive, got {distance_km}"
            )));
        }
        if time_seconds == 0 {
            return Err(PlanError::InvalidRaceSample(
                "time must be positive".to_owned(),
            ));
        }
        Ok(Self {
            distance_km,
            time_seconds,
        })
    }

    /// Create a sample from `"MM:SS"` or `"HH:MM:SS"`
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MalformedTimeString`] if the string cannot be parsed
    /// and [`PlanError::InvalidRaceSample`] if the sample is not positive.
    pub fn from_time_string(distance_km: f64, time: &str) -> Result<Self, PlanError> {
        let seconds = parse_time_string(time)?;
        Self::new(distance_km, seconds)
    }

    /// Race distance in km
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Elapsed time in seconds
    #[must_use]
    pub const fn time_seconds(&self) -> u64 {
        self.time_seconds
    }

    /// Average pace in seconds per km
    #[must_use]
    pub fn pace_per_km(&self) -> f64 {
        self.time_seconds as f64 / self.distance_km
    }

    /// Average velocity in meters per second
    #[must_use]
    pub fn velocity_mps(&self) -> f64 {
        self.distance_km * METERS_PER_KM / self.time_seconds as f64
    }

    /// Label of this sample's distance, falling back to `"<n>K"`
    #[must_use]
    pub fn distance_label(&self) -> String {
        label_for_distance(self.distance_km)
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} ({}/km)",
            self.distance_label(),
            format_duration(self.time_seconds),
            format_pace(self.pace_per_km())
        )
    }
}

/// Resolve a race label such as `"5K"`, `"Half Marathon"` or `"12K"` to km.
///
/// Matching is case-insensitive. Returns `None` for labels that are neither a
/// named race nor a positive `<number>K`.
#[must_use]
pub fn distance_for_label(label: &str) -> Option<f64> {
    let label = label.trim();
    if let Some((_, km)) = DISTANCE_LABELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
    {
        return Some(*km);
    }

    let number = label
        .strip_suffix('K')
        .or_else(|| label.strip_suffix('k'))?;
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite() && *km > 0.0)
}

/// Label for a distance in km: the first named race within tolerance, else `"<n>K"`
#[must_use]
pub fn label_for_distance(distance_km: f64) -> String {
    DISTANCE_LABELS
        .iter()
        .find(|(_, km)| (km - distance_km).abs() < DISTANCE_EPSILON_KM)
        .map_or_else(
            || {
                if (distance_km - distance_km.round()).abs() < DISTANCE_EPSILON_KM {
                    format!("{}K", distance_km.round())
                } else {
                    format!("{distance_km}K")
                }
            },
            |(name, _)| (*name).to_owned(),
        )
}
