// ABOUTME: Jack Daniels VDOT calculation from race performances and its inversion into zone paces
// ABOUTME: Oxygen-cost regression solved with a fixed number of Newton iterations

use crate::models::{PaceRange, RaceTime};
use stride_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use stride_core::constants::vdot::{
    NEWTON_ITERATIONS, OXYGEN_COST_INTERCEPT, OXYGEN_COST_LINEAR, OXYGEN_COST_QUADRATIC,
    UTILISATION_AMPLITUDE_FAST, UTILISATION_AMPLITUDE_SLOW, UTILISATION_BASE,
    UTILISATION_DECAY_FAST, UTILISATION_DECAY_SLOW,
};

/// Oxygen cost (ml/kg/min) of running at `velocity` metres per minute
///
/// Formula: VO2 = -4.60 + 0.182258 x v + 0.000104 x v²
#[must_use]
pub fn oxygen_cost(velocity: f64) -> f64 {
    (OXYGEN_COST_QUADRATIC * velocity).mul_add(
        velocity,
        OXYGEN_COST_LINEAR.mul_add(velocity, OXYGEN_COST_INTERCEPT),
    )
}

/// Fraction of VO2max sustainable for an effort of `minutes`
#[must_use]
pub fn sustainable_fraction(minutes: f64) -> f64 {
    UTILISATION_AMPLITUDE_FAST.mul_add(
        (-UTILISATION_DECAY_FAST * minutes).exp(),
        UTILISATION_AMPLITUDE_SLOW.mul_add((-UTILISATION_DECAY_SLOW * minutes).exp(), UTILISATION_BASE),
    )
}

/// VDOT implied by a race performance
///
/// The oxygen cost of the race's average velocity divided by the fraction of
/// VO2max sustainable for the race's duration.
#[must_use]
pub fn vdot_from_race(race: &RaceTime) -> f64 {
    let minutes = race.time_seconds() as f64 / SECONDS_PER_MINUTE;
    let velocity = race.distance_km() * METERS_PER_KM / minutes;
    oxygen_cost(velocity) / sustainable_fraction(minutes)
}

/// Velocity (m/min) whose oxygen cost is `fraction` of `vdot`
///
/// Starts from the linear approximation and refines with Newton's method; the
/// cost curve is monotonic over running velocities so this converges well
/// within the fixed iteration count.
#[must_use]
pub fn velocity_at_fraction(vdot: f64, fraction: f64) -> f64 {
    let target = vdot * fraction;
    let mut velocity = (target - OXYGEN_COST_INTERCEPT) / OXYGEN_COST_LINEAR;
    for _ in 0..NEWTON_ITERATIONS {
        let slope = (2.0 * OXYGEN_COST_QUADRATIC).mul_add(velocity, OXYGEN_COST_LINEAR);
        velocity -= (oxygen_cost(velocity) - target) / slope;
    }
    velocity
}

/// Pace range (seconds per km) for a `(lower, upper)` %VO2max bracket.
///
/// The upper fraction gives the faster bound.
#[must_use]
pub fn pace_range(vdot: f64, (lower, upper): (f64, f64)) -> PaceRange {
    let meters_per_km_minutes = METERS_PER_KM * SECONDS_PER_MINUTE;
    PaceRange {
        min_pace: meters_per_km_minutes / velocity_at_fraction(vdot, upper),
        max_pace: meters_per_km_minutes / velocity_at_fraction(vdot, lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_matches_oxygen_cost() {
        let velocity = velocity_at_fraction(45.0, 0.88);
        assert!((oxygen_cost(velocity) - 45.0 * 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_sustainable_fraction_decreases_with_duration() {
        assert!(sustainable_fraction(20.0) > sustainable_fraction(45.0));
        assert!(sustainable_fraction(45.0) > sustainable_fraction(180.0));
        assert!(sustainable_fraction(10_000.0) > UTILISATION_BASE - 1e-9);
    }

    #[test]
    fn test_five_k_vdot() {
        let race = RaceTime::new(5.0, 1350).unwrap();
        let vdot = vdot_from_race(&race);
        assert!((vdot - 43.4).abs() < 0.1, "vdot {vdot}");
    }
}
