// ABOUTME: Critical velocity from the linear distance-time model across two race samples
// ABOUTME: Zone paces are fixed fractions of the critical velocity

use crate::models::{PaceRange, RaceTime};
use stride_core::constants::race_distances::DISTANCE_EPSILON_KM;
use stride_core::constants::units::METERS_PER_KM;
use stride_core::errors::PlanError;

const METHOD: &str = "critical_velocity";

/// Critical velocity in metres per second.
///
/// Uses the pair spanning the widest distance gap: the shortest and the
/// longest sample. `CV = (d2 - d1) / (t2 - t1)`.
///
/// # Errors
///
/// Returns [`PlanError::InsufficientData`] when fewer than two distinct
/// distances are present, or when the longer sample is not slower in total
/// time (no positive velocity fits).
pub fn critical_velocity<'a, I>(samples: I) -> Result<f64, PlanError>
where
    I: IntoIterator<Item = &'a RaceTime>,
{
    let samples: Vec<&RaceTime> = samples.into_iter().collect();
    let shortest = samples
        .iter()
        .min_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));
    let longest = samples
        .iter()
        .max_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));

    let (Some(short), Some(long)) = (shortest, longest) else {
        return Err(PlanError::InsufficientData {
            method: METHOD,
            reason: "no race samples".to_owned(),
        });
    };
    let distance_gap_m = (long.distance_km() - short.distance_km()) * METERS_PER_KM;
    if distance_gap_m < DISTANCE_EPSILON_KM * METERS_PER_KM {
        return Err(PlanError::InsufficientData {
            method: METHOD,
            reason: "at least two samples of distinct distances are required".to_owned(),
        });
    }

    let time_gap_s = long.time_seconds() as f64 - short.time_seconds() as f64;
    if time_gap_s <= 0.0 {
        return Err(PlanError::InsufficientData {
            method: METHOD,
            reason: format!(
                "{} sample is not slower than {} sample",
                long.distance_label(),
                short.distance_label()
            ),
        });
    }

    Ok(distance_gap_m / time_gap_s)
}

/// Pace range (seconds per km) for a `(lower, upper)` fraction-of-CV bracket.
///
/// The upper fraction gives the faster bound.
#[must_use]
pub fn pace_range(cv_mps: f64, (lower, upper): (f64, f64)) -> PaceRange {
    PaceRange {
        min_pace: METERS_PER_KM / (cv_mps * upper),
        max_pace: METERS_PER_KM / (cv_mps * lower),
    }
}
