// ABOUTME: Zone calculator turning race samples into pace ranges for the five training zones
// ABOUTME: Dispatches on ZoneMethod; recalculation replaces the whole pace table or nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::algorithms::{critical_velocity, vdot};
use crate::config::{ZoneBrackets, ZoneBracketsConfig};
use crate::models::{label_for_distance, PaceRange, PaceTarget, RaceTime, ZoneMethod, ZoneName};
use crate::utils::time_format::format_pace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use stride_core::errors::PlanError;
use tracing::debug;

/// Pace table for the five zones
pub type PaceTable = BTreeMap<ZoneName, PaceRange>;

/// Race samples plus the pace table calculated from them.
///
/// The pace table is absent until [`TrainingZones::calculate_zones`] succeeds
/// and is dropped whenever a sample is added. A failed calculation leaves the
/// previous state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingZones {
    method: ZoneMethod,
    #[serde(default)]
    race_times: BTreeMap<String, RaceTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zones: Option<PaceTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vdot: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    critical_velocity: Option<f64>,
}

impl Default for TrainingZones {
    fn default() -> Self {
        Self::new(ZoneMethod::default())
    }
}

impl TrainingZones {
    /// Empty calculator for a method
    #[must_use]
    pub const fn new(method: ZoneMethod) -> Self {
        Self {
            method,
            race_times: BTreeMap::new(),
            zones: None,
            vdot: None,
            critical_velocity: None,
        }
    }

    /// Calculator with zones derived directly from a known VDOT
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InsufficientData`] if `vdot` is not positive
    pub fn from_vdot(vdot: f64) -> Result<Self, PlanError> {
        let mut zones = Self::new(ZoneMethod::JackDaniels);
        zones.calculate_zones_from_vdot(vdot)?;
        Ok(zones)
    }

    /// Calculation method
    #[must_use]
    pub const fn method(&self) -> ZoneMethod {
        self.method
    }

    /// Race samples by name
    #[must_use]
    pub const fn race_times(&self) -> &BTreeMap<String, RaceTime> {
        &self.race_times
    }

    /// VDOT of the last Jack Daniels calculation
    #[must_use]
    pub const fn vdot(&self) -> Option<f64> {
        self.vdot
    }

    /// Critical velocity (m/s) of the last critical-velocity calculation
    #[must_use]
    pub const fn critical_velocity(&self) -> Option<f64> {
        self.critical_velocity
    }

    /// Calculated pace table, if any
    #[must_use]
    pub const fn zones(&self) -> Option<&PaceTable> {
        self.zones.as_ref()
    }

    /// Whether a pace table is available
    #[must_use]
    pub const fn is_calculated(&self) -> bool {
        self.zones.is_some()
    }

    /// Insert or overwrite a named sample; invalidates calculated zones
    pub fn add_race_time(&mut self, name: impl Into<String>, race_time: RaceTime) {
        self.race_times.insert(name.into(), race_time);
        self.invalidate();
    }

    /// Parse a race result, add it and recalculate.
    ///
    /// The sample is named `label`, or the standard label of its distance.
    /// Returns the new VDOT (`None` for the critical-velocity method).
    ///
    /// # Errors
    ///
    /// Parsing errors leave the calculator untouched. Calculation errors
    /// (e.g. a single sample under critical velocity) keep the new sample and
    /// leave the zones uncalculated.
    pub fn add_race_result(
        &mut self,
        distance_km: f64,
        time: &str,
        label: Option<&str>,
    ) -> Result<Option<f64>, PlanError> {
        let race_time = RaceTime::from_time_string(distance_km, time)?;
        let name = label.map_or_else(|| label_for_distance(distance_km), str::to_owned);
        self.add_race_time(name, race_time);
        self.calculate_zones()?;
        Ok(self.vdot)
    }

    /// Calculate zones with the default brackets
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InsufficientData`] when the samples cannot support
    /// the method: none at all, or fewer than two distinct distances for
    /// critical velocity.
    pub fn calculate_zones(&mut self) -> Result<(), PlanError> {
        self.calculate_zones_with(&ZoneBracketsConfig::default())
    }

    /// Calculate zones with explicit brackets
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::calculate_zones`]
    pub fn calculate_zones_with(&mut self, brackets: &ZoneBracketsConfig) -> Result<(), PlanError> {
        let method_brackets = brackets.for_method(self.method);
        match self.method {
            ZoneMethod::JackDaniels => {
                let best = self
                    .race_times
                    .values()
                    .map(vdot::vdot_from_race)
                    .max_by(f64::total_cmp)
                    .ok_or_else(|| PlanError::InsufficientData {
                        method: ZoneMethod::JackDaniels.as_str(),
                        reason: "at least one race sample is required".to_owned(),
                    })?;
                debug!(vdot = best, samples = self.race_times.len(), "calculated VDOT zones");
                self.zones = Some(vdot_table(best, method_brackets));
                self.vdot = Some(best);
                self.critical_velocity = None;
            }
            ZoneMethod::CriticalVelocity => {
                let cv = critical_velocity::critical_velocity(self.race_times.values())?;
                debug!(critical_velocity_mps = cv, "calculated critical velocity zones");
                self.zones = Some(cv_table(cv, method_brackets));
                self.critical_velocity = Some(cv);
                self.vdot = None;
            }
        }
        Ok(())
    }

    /// Replace the pace table with one derived from a known VDOT.
    ///
    /// Switches the method to Jack Daniels.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InsufficientData`] if `vdot` is not a positive number
    pub fn calculate_zones_from_vdot(&mut self, vdot: f64) -> Result<(), PlanError> {
        self.calculate_zones_from_vdot_with(vdot, &ZoneBracketsConfig::default())
    }

    /// Replace the pace table with one derived from a known VDOT and explicit brackets
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::calculate_zones_from_vdot`]
    pub fn calculate_zones_from_vdot_with(
        &mut self,
        vdot: f64,
        brackets: &ZoneBracketsConfig,
    ) -> Result<(), PlanError> {
        if !vdot.is_finite() || vdot <= 0.0 {
            return Err(PlanError::InsufficientData {
                method: ZoneMethod::JackDaniels.as_str(),
                reason: format!("VDOT must be positive, got {vdot}"),
            });
        }
        self.method = ZoneMethod::JackDaniels;
        self.zones = Some(vdot_table(vdot, &brackets.vdot));
        self.vdot = Some(vdot);
        self.critical_velocity = None;
        Ok(())
    }

    /// Pace range of a zone
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownZone`] if zones are not calculated
    pub fn zone_range(&self, zone: ZoneName) -> Result<PaceRange, PlanError> {
        self.zones
            .as_ref()
            .and_then(|table| table.get(&zone).copied())
            .ok_or_else(|| PlanError::UnknownZone(format!("{zone} (zones not calculated)")))
    }

    /// Pace (seconds per km) at one end or the middle of a zone
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownZone`] if zones are not calculated
    pub fn zone_pace(&self, zone: ZoneName, target: PaceTarget) -> Result<f64, PlanError> {
        Ok(self.zone_range(zone)?.at(target))
    }

    /// [`Self::zone_pace`] with the zone given by name
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownZone`] if the name is not one of the five
    /// zones or zones are not calculated
    pub fn zone_pace_by_name(&self, zone: &str, target: PaceTarget) -> Result<f64, PlanError> {
        self.zone_pace(zone.parse()?, target)
    }

    /// Zone pace formatted as `M:SS`
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownZone`] if zones are not calculated
    pub fn zone_pace_string(&self, zone: ZoneName, target: PaceTarget) -> Result<String, PlanError> {
        Ok(format_pace(self.zone_pace(zone, target)?))
    }

    /// Zone range formatted as `M:SS - M:SS`, fastest first
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownZone`] if zones are not calculated
    pub fn zone_pace_range_string(&self, zone: ZoneName) -> Result<String, PlanError> {
        let range = self.zone_range(zone)?;
        Ok(format!(
            "{} - {}",
            format_pace(range.min_pace),
            format_pace(range.max_pace)
        ))
    }

    /// Seconds needed to cover `distance_km` at `pace_seconds_per_km`
    #[must_use]
    pub fn pace_to_time(distance_km: f64, pace_seconds_per_km: f64) -> f64 {
        distance_km * pace_seconds_per_km
    }

    fn invalidate(&mut self) {
        self.zones = None;
        self.vdot = None;
        self.critical_velocity = None;
    }
}

fn vdot_table(value: f64, brackets: &ZoneBrackets) -> PaceTable {
    ZoneName::ALL
        .into_iter()
        .map(|zone| (zone, vdot::pace_range(value, brackets.bracket(zone))))
        .collect()
}

fn cv_table(cv_mps: f64, brackets: &ZoneBrackets) -> PaceTable {
    ZoneName::ALL
        .into_iter()
        .map(|zone| {
            (
                zone,
                critical_velocity::pace_range(cv_mps, brackets.bracket(zone)),
            )
        })
        .collect()
}

impl fmt::Display for TrainingZones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training Zones (Method: {})", self.method)?;
        writeln!(f, "{}", "=".repeat(60))?;
        if let Some(value) = self.vdot {
            writeln!(f, "VDOT: {value:.1}")?;
        }
        if let Some(cv) = self.critical_velocity {
            writeln!(f, "Critical Velocity: {cv:.2} m/s ({}/km)", format_pace(1000.0 / cv))?;
        }
        if !self.race_times.is_empty() {
            writeln!(f, "Race samples:")?;
            for (name, race) in &self.race_times {
                writeln!(f, "  {name}: {race}")?;
            }
        }

        let Some(table) = &self.zones else {
            return writeln!(f, "Zones not calculated");
        };
        writeln!(f)?;
        writeln!(f, "{:<20} {:>15}", "Zone", "Pace (min/km)")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for (zone, range) in table {
            writeln!(
                f,
                "{:<20} {:>15}",
                zone.label(),
                format!("{} - {}", format_pace(range.min_pace), format_pace(range.max_pace))
            )?;
        }
        Ok(())
    }
}
