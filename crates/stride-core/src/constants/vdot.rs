// ABOUTME: Jack Daniels / Jimmy Gilbert VDOT regression coefficients
// ABOUTME: Oxygen-cost curve, fractional-utilisation curve and solver settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Published VDOT formulas.
//!
//! Oxygen cost of running at velocity `v` (metres per minute):
//!
//! ```text
//! VO2(v) = -4.60 + 0.182258 * v + 0.000104 * v^2
//! ```
//!
//! Fraction of VO2max sustainable for a race lasting `t` minutes:
//!
//! ```text
//! %max(t) = 0.8 + 0.1894393 * e^(-0.012778 * t) + 0.2989558 * e^(-0.1932605 * t)
//! ```
//!
//! References:
//! - Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables for Distance Runners*
//! - Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.). Human Kinetics.

/// Constant term of the oxygen-cost curve (ml/kg/min)
pub const OXYGEN_COST_INTERCEPT: f64 = -4.60;

/// Linear coefficient of the oxygen-cost curve
pub const OXYGEN_COST_LINEAR: f64 = 0.182_258;

/// Quadratic coefficient of the oxygen-cost curve
pub const OXYGEN_COST_QUADRATIC: f64 = 0.000_104;

/// Asymptotic fraction of VO2max for very long efforts
pub const UTILISATION_BASE: f64 = 0.8;

/// First exponential amplitude of the utilisation curve
pub const UTILISATION_AMPLITUDE_SLOW: f64 = 0.189_439_3;

/// First exponential decay rate (per minute)
pub const UTILISATION_DECAY_SLOW: f64 = 0.012_778;

/// Second exponential amplitude of the utilisation curve
pub const UTILISATION_AMPLITUDE_FAST: f64 = 0.298_955_8;

/// Second exponential decay rate (per minute)
pub const UTILISATION_DECAY_FAST: f64 = 0.193_260_5;

/// Newton iterations used to invert the oxygen-cost curve
pub const NEWTON_ITERATIONS: usize = 10;
