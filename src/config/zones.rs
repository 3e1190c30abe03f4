// ABOUTME: Zone bracket configuration for the VDOT and critical-velocity methods
// ABOUTME: Each zone maps to a (lower, upper) fraction; env overrides via STRIDE_<METHOD>_<ZONE>_MIN/MAX
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{apply_env_var, ConfigError};
use crate::models::{ZoneMethod, ZoneName};
use serde::{Deserialize, Serialize};
use stride_core::constants::zones::{critical_velocity, vdot};

/// `(lower, upper)` fraction per zone; the upper fraction is the faster pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBrackets {
    /// Easy / recovery
    pub easy: (f64, f64),
    /// Marathon pace
    pub marathon: (f64, f64),
    /// Threshold
    pub threshold: (f64, f64),
    /// Interval
    pub interval: (f64, f64),
    /// Repetition
    pub repetition: (f64, f64),
}

impl ZoneBrackets {
    /// %VO2max brackets for the Jack Daniels method
    #[must_use]
    pub const fn vdot_defaults() -> Self {
        Self {
            easy: vdot::EASY,
            marathon: vdot::MARATHON,
            threshold: vdot::THRESHOLD,
            interval: vdot::INTERVAL,
            repetition: vdot::REPETITION,
        }
    }

    /// Fraction-of-CV brackets for the critical-velocity method
    #[must_use]
    pub const fn critical_velocity_defaults() -> Self {
        Self {
            easy: critical_velocity::EASY,
            marathon: critical_velocity::MARATHON,
            threshold: critical_velocity::THRESHOLD,
            interval: critical_velocity::INTERVAL,
            repetition: critical_velocity::REPETITION,
        }
    }

    /// Bracket of one zone
    #[must_use]
    pub const fn bracket(&self, zone: ZoneName) -> (f64, f64) {
        match zone {
            ZoneName::Easy => self.easy,
            ZoneName::Marathon => self.marathon,
            ZoneName::Threshold => self.threshold,
            ZoneName::Interval => self.interval,
            ZoneName::Repetition => self.repetition,
        }
    }

    fn bracket_mut(&mut self, zone: ZoneName) -> &mut (f64, f64) {
        match zone {
            ZoneName::Easy => &mut self.easy,
            ZoneName::Marathon => &mut self.marathon,
            ZoneName::Threshold => &mut self.threshold,
            ZoneName::Interval => &mut self.interval,
            ZoneName::Repetition => &mut self.repetition,
        }
    }

    fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigError> {
        for zone in ZoneName::ALL {
            let name = zone.as_str().to_uppercase();
            let bracket = self.bracket_mut(zone);
            apply_env_var(&format!("{prefix}_{name}_MIN"), &mut bracket.0)?;
            apply_env_var(&format!("{prefix}_{name}_MAX"), &mut bracket.1)?;
        }
        Ok(())
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        for zone in ZoneName::ALL {
            let (lower, upper) = self.bracket(zone);
            if !(lower.is_finite() && upper.is_finite()) || lower <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{label} {zone} bracket bounds must be positive, got ({lower}, {upper})"
                )));
            }
            if lower > upper {
                return Err(ConfigError::InvalidRange(format!(
                    "{label} {zone} bracket lower bound {lower} exceeds upper bound {upper}"
                )));
            }
        }
        Ok(())
    }
}

/// Brackets for both zone calculation methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBracketsConfig {
    /// Jack Daniels %VO2max brackets
    pub vdot: ZoneBrackets,
    /// Critical-velocity fraction brackets
    pub critical_velocity: ZoneBrackets,
}

impl Default for ZoneBracketsConfig {
    fn default() -> Self {
        Self {
            vdot: ZoneBrackets::vdot_defaults(),
            critical_velocity: ZoneBrackets::critical_velocity_defaults(),
        }
    }
}

impl ZoneBracketsConfig {
    /// Defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or a bracket is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `STRIDE_VDOT_<ZONE>_MIN/MAX` and `STRIDE_CV_<ZONE>_MIN/MAX` applied
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a variable is set but unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.vdot.apply_env_overrides("STRIDE_VDOT")?;
        config.critical_velocity.apply_env_overrides("STRIDE_CV")?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any bracket has non-positive bounds or min > max
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vdot.validate("vdot")?;
        self.critical_velocity.validate("critical_velocity")
    }

    /// Brackets used by a calculation method
    #[must_use]
    pub const fn for_method(&self, method: ZoneMethod) -> &ZoneBrackets {
        match method {
            ZoneMethod::JackDaniels => &self.vdot,
            ZoneMethod::CriticalVelocity => &self.critical_velocity,
        }
    }
}
