// ABOUTME: Environment-driven configuration for plan generation and zone brackets
// ABOUTME: Defaults equal the built-in constants; nothing changes unless a variable is set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Every config type follows the same lifecycle: start from `Default`, apply
//! environment overrides, then `validate()`. `load()` does all three.

/// Configuration error types
pub mod error;
/// Plan generation policy
pub mod planner;
/// Zone bracket tables
pub mod zones;

pub use error::ConfigError;
pub use planner::{PlannerConfig, RecoveryWeekPolicy};
pub use zones::{ZoneBrackets, ZoneBracketsConfig};

use std::env;
use std::str::FromStr;

/// Parse an environment variable into `target` when it is set
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
    }
    Ok(())
}
