// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: clap value parsers for stride-cli arguments
// ABOUTME: Parses LABEL=TIME race samples and YYYY-MM-DD dates

use chrono::NaiveDate;
use stride_planner::models::{distance_for_label, RaceTime};

/// A `--race LABEL=TIME` argument
#[derive(Debug, Clone)]
pub struct RaceArg {
    pub label: String,
    pub race_time: RaceTime,
}

/// Parse `5K=22:30`, `Half Marathon=1:45:00` or `8K=35:10`
pub fn parse_race_arg(value: &str) -> Result<RaceArg, String> {
    let (label, time) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=TIME (e.g. 5K=22:30), got '{value}'"))?;
    let label = label.trim();
    let distance_km = distance_for_label(label)
        .ok_or_else(|| format!("unknown race distance '{label}' (use 5K, 10K, Half Marathon, Marathon or <n>K)"))?;
    let race_time =
        RaceTime::from_time_string(distance_km, time.trim()).map_err(|e| e.to_string())?;

    Ok(RaceArg {
        label: label.to_owned(),
        race_time,
    })
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}
