// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Zones command for stride-cli
// ABOUTME: Calculates and prints training zones from race samples or a known VDOT

use crate::helpers::args::RaceArg;
use stride_planner::config::ZoneBracketsConfig;
use stride_planner::errors::{AppError, AppResult};
use stride_planner::intelligence::TrainingZones;
use stride_planner::models::ZoneMethod;
use tracing::info;

type Result<T> = AppResult<T>;

/// Build zones from `--race` samples with the configured brackets
///
/// Returns `None` when no sample was given.
pub fn zones_from_races(
    method: ZoneMethod,
    races: Vec<RaceArg>,
    brackets: &ZoneBracketsConfig,
) -> Result<Option<TrainingZones>> {
    if races.is_empty() {
        return Ok(None);
    }

    let mut zones = TrainingZones::new(method);
    for race in races {
        zones.add_race_time(race.label, race.race_time);
    }
    zones.calculate_zones_with(brackets)?;
    Ok(Some(zones))
}

/// Print the zone table
pub fn run(method: ZoneMethod, races: Vec<RaceArg>, vdot: Option<f64>) -> Result<()> {
    let brackets = ZoneBracketsConfig::load()?;
    let zones = match vdot {
        Some(value) => {
            let mut zones = TrainingZones::new(ZoneMethod::JackDaniels);
            zones.calculate_zones_from_vdot_with(value, &brackets)?;
            zones
        }
        None => zones_from_races(method, races, &brackets)?.ok_or_else(|| {
            AppError::invalid_input("Provide at least one --race LABEL=TIME or --vdot")
        })?,
    };

    info!(method = %zones.method(), samples = zones.race_times().len(), "calculated zones");
    print!("{zones}");
    Ok(())
}
