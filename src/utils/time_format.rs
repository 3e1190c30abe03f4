// ABOUTME: Time-string parsing plus pace and duration formatting for race samples and workouts
// ABOUTME: Half-up rounding helpers used by the final formatting pass of plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::constants::units::SECONDS_PER_HOUR;

const SECONDS_PER_MINUTE: u64 = 60;
use stride_core::errors::PlanError;

/// Parse `"MM:SS"` or `"HH:MM:SS"` into whole seconds.
///
/// Every part must be a non-empty run of ASCII digits. When a larger unit is
/// present the smaller ones must be below 60, so `"75:00"` is a valid 75
/// minute time but `"1:75:00"` is not.
///
/// # Errors
///
/// Returns [`PlanError::MalformedTimeString`] for any other shape.
pub fn parse_time_string(input: &str) -> Result<u64, PlanError> {
    let malformed = || PlanError::MalformedTimeString(input.to_owned());
    let trimmed = input.trim();

    let mut parts = Vec::with_capacity(3);
    for part in trimmed.split(':') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        parts.push(part.parse::<u64>().map_err(|_| malformed())?);
    }

    let total = match parts.as_slice() {
        [minutes, seconds] if *seconds < 60 => minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|s| s.checked_add(*seconds)),
        [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|s| s.checked_add(minutes * SECONDS_PER_MINUTE + seconds)),
        _ => None,
    };
    total.ok_or_else(malformed)
}

/// Format a pace in seconds per km as `M:SS` (seconds truncated)
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    let whole = seconds_per_km.max(0.0).floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Format whole seconds as `M:SS`, or `H:MM:SS` from one hour up
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds >= SECONDS_PER_HOUR {
        let hours = seconds / SECONDS_PER_HOUR;
        let minutes = (seconds % SECONDS_PER_HOUR) / 60;
        format!("{hours}:{minutes:02}:{:02}", seconds % 60)
    } else {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Round half-up to the nearest multiple of a whole-number unit.
///
/// `22.5` to the nearest 5 is `25.0`; `12.4` is `10.0`.
#[must_use]
pub fn round_half_up_to_multiple(value: f64, multiple: f64) -> f64 {
    (value / multiple + 0.5).floor() * multiple
}

/// Round half-up to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
