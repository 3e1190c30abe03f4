// ABOUTME: Training zone bracket tables for the VDOT and critical-velocity methods
// ABOUTME: Each bracket is a (lower, upper) fraction of VO2max or of critical velocity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Brackets as fractions of VO2max, inverted through the oxygen-cost curve.
///
/// Threshold and marathon overlap at 83-84%; both zones are valid there.
pub mod vdot {
    /// Easy / recovery running
    pub const EASY: (f64, f64) = (0.59, 0.74);
    /// Marathon pace
    pub const MARATHON: (f64, f64) = (0.75, 0.84);
    /// Threshold / tempo
    pub const THRESHOLD: (f64, f64) = (0.83, 0.88);
    /// Interval (VO2max)
    pub const INTERVAL: (f64, f64) = (0.95, 1.00);
    /// Repetition (faster than VO2max pace)
    pub const REPETITION: (f64, f64) = (1.05, 1.20);
}

/// Brackets as fractions of critical velocity (speed, not pace).
///
/// These are the reciprocals of the classic CV pace multipliers
/// (easy 1.25-1.45 x CV pace ... repetition 0.85-0.92 x CV pace), rounded to
/// two decimals.
pub mod critical_velocity {
    /// Easy / recovery running
    pub const EASY: (f64, f64) = (0.69, 0.80);
    /// Marathon pace
    pub const MARATHON: (f64, f64) = (0.80, 0.91);
    /// Threshold, centred on critical velocity
    pub const THRESHOLD: (f64, f64) = (0.95, 1.02);
    /// Interval
    pub const INTERVAL: (f64, f64) = (1.02, 1.09);
    /// Repetition
    pub const REPETITION: (f64, f64) = (1.09, 1.18);
}
