// ABOUTME: JSON file persistence for running plans and athlete profiles
// ABOUTME: Pretty-printed output; loading preserves every field including created_date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{AthleteProfile, RunningPlan};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

fn io_error(action: &str, path: &Path, error: io::Error) -> AppError {
    if error.kind() == io::ErrorKind::NotFound {
        AppError::not_found(format!("File {}", path.display())).with_source(error)
    } else {
        AppError::storage(format!("Failed to {action} {}: {error}", path.display()))
            .with_source(error)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Invalid {what} file {}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Write a plan as pretty-printed JSON, replacing any existing file
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn save_plan(plan: &RunningPlan, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json).map_err(|e| io_error("write", path, e))?;

    debug!(path = %path.display(), weeks = plan.weeks, "saved plan");
    Ok(())
}

/// Read a plan written by [`save_plan`]
///
/// # Errors
///
/// Returns [`ErrorCode::ResourceNotFound`] for a missing file and
/// [`ErrorCode::SerializationError`] for content that is not a plan
pub fn load_plan(path: impl AsRef<Path>) -> AppResult<RunningPlan> {
    let path = path.as_ref();
    let plan: RunningPlan = read_json(path, "plan")?;

    debug!(path = %path.display(), weeks = plan.weeks, "loaded plan");
    Ok(plan)
}

/// Read an athlete profile; omitted fields take their defaults
///
/// # Errors
///
/// Returns [`ErrorCode::ResourceNotFound`] for a missing file and
/// [`ErrorCode::SerializationError`] for malformed content
pub fn load_profile(path: impl AsRef<Path>) -> AppResult<AthleteProfile> {
    read_json(path.as_ref(), "profile")
}
