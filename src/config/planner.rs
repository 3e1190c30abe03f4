// ABOUTME: Plan generation policy configuration (recovery-week behaviour)
// ABOUTME: Loaded from STRIDE_RECOVERY_WEEK_POLICY and STRIDE_RECOVERY_WEEK_FACTOR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{apply_env_var, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stride_core::constants::planning::periodization::RECOVERY_WEEK_FACTOR;

/// What happens on recovery weeks (every fourth week before the taper)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryWeekPolicy {
    /// Add a recovery note; volume follows the periodization curve unchanged
    #[default]
    Annotate,
    /// Add the note and scale the week's volume by the recovery factor
    Reduce,
}

impl fmt::Display for RecoveryWeekPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Annotate => "annotate",
            Self::Reduce => "reduce",
        })
    }
}

impl FromStr for RecoveryWeekPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annotate" => Ok(Self::Annotate),
            "reduce" => Ok(Self::Reduce),
            other => Err(ConfigError::Parse(format!(
                "Unknown recovery week policy '{other}'. Valid options: annotate, reduce"
            ))),
        }
    }
}

/// Plan generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Recovery-week behaviour
    pub recovery_week_policy: RecoveryWeekPolicy,
    /// Volume multiplier for recovery weeks under [`RecoveryWeekPolicy::Reduce`]
    pub recovery_week_factor: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            recovery_week_policy: RecoveryWeekPolicy::Annotate,
            recovery_week_factor: RECOVERY_WEEK_FACTOR,
        }
    }
}

impl PlannerConfig {
    /// Defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied, unvalidated
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a variable is set but unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var(
            "STRIDE_RECOVERY_WEEK_POLICY",
            &mut config.recovery_week_policy,
        )?;
        apply_env_var(
            "STRIDE_RECOVERY_WEEK_FACTOR",
            &mut config.recovery_week_factor,
        )?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the recovery factor is outside (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(f64::MIN_POSITIVE..=1.0).contains(&self.recovery_week_factor) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "recovery_week_factor must be in (0, 1], got {}",
                self.recovery_week_factor
            )));
        }
        Ok(())
    }

    /// Volume multiplier for a week flagged as a recovery week
    #[must_use]
    pub fn recovery_multiplier(&self) -> f64 {
        match self.recovery_week_policy {
            RecoveryWeekPolicy::Annotate => 1.0,
            RecoveryWeekPolicy::Reduce => self.recovery_week_factor,
        }
    }
}
