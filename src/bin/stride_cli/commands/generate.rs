// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Generate command for stride-cli
// ABOUTME: Builds a periodized plan, prints it and optionally saves it as JSON

use std::path::PathBuf;

use chrono::NaiveDate;
use stride_planner::config::{PlannerConfig, ZoneBracketsConfig};
use stride_planner::errors::AppResult;
use stride_planner::intelligence::{PlanGenerator, PlanRequest};
use stride_planner::models::ZoneMethod;
use stride_planner::persistence::{load_profile, save_plan};
use tracing::info;

use super::zones::zones_from_races;
use crate::helpers::args::RaceArg;
use crate::helpers::display::{display_plan_summary, display_schedule};

type Result<T> = AppResult<T>;

/// Everything `generate` needs besides the plan request
pub struct GenerateOptions {
    pub races: Vec<RaceArg>,
    pub method: ZoneMethod,
    pub profile: Option<PathBuf>,
    pub start_date: Option<NaiveDate>,
    pub output: Option<PathBuf>,
}

/// Generate, print and optionally save a plan
pub fn run(request: &PlanRequest, options: GenerateOptions) -> Result<()> {
    let config = PlannerConfig::load()?;
    let brackets = ZoneBracketsConfig::load()?;
    let zones = zones_from_races(options.method, options.races, &brackets)?;
    let profile = options.profile.as_deref().map(load_profile).transpose()?;

    let mut plan = PlanGenerator::new(config)
        .with_brackets(brackets)
        .generate(request, zones.as_ref(), profile.as_ref())?;
    if let Some(start_date) = options.start_date {
        plan = plan.with_start_date(start_date);
    }

    display_plan_summary(&plan);
    display_schedule(&plan);

    if let Some(path) = options.output {
        save_plan(&plan, &path)?;
        info!(path = %path.display(), "plan saved");
        println!("\nPlan saved to {}", path.display());
    }
    Ok(())
}
