// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Show command for stride-cli
// ABOUTME: Loads a saved plan and prints its summary, weekly totals and zone distribution

use std::path::Path;

use chrono::NaiveDate;
use stride_planner::errors::AppResult;
use stride_planner::persistence::load_plan;

use crate::helpers::display::{
    display_plan_summary, display_weekly_totals, display_zone_distribution,
};

/// Print a saved plan, optionally re-anchored to a new start date
pub fn run(path: &Path, start_date: Option<NaiveDate>) -> AppResult<()> {
    let mut plan = load_plan(path)?;
    if let Some(start_date) = start_date {
        plan = plan.with_start_date(start_date);
    }

    display_plan_summary(&plan);
    display_weekly_totals(&plan);
    display_zone_distribution(&plan);
    Ok(())
}
