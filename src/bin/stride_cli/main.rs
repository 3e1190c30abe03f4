// ABOUTME: Stride CLI - command-line front end for zone calculation and plan generation
// ABOUTME: Prints zone tables, generates and saves plans, and shows saved plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Zones from one or more race results
//! stride-cli zones --race 5K=22:30 --race 10K=47:00
//!
//! # Critical-velocity zones (needs two different distances)
//! stride-cli zones --method critical-velocity --race 5K=22:30 --race "Half Marathon=1:45:00"
//!
//! # Zones from a known VDOT
//! stride-cli zones --vdot 45
//!
//! # 16-week 10K plan, 4 days per week, paced from a 5K and saved as JSON
//! stride-cli generate --name "Spring 10K" --goal 10K --level intermediate \
//!     --weeks 16 --days 4 --race 5K=22:30 --start-date 2025-03-03 --output plan.json
//!
//! # Summary, weekly totals and zone distribution of a saved plan
//! stride-cli show plan.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use stride_planner::errors::AppResult;
use stride_planner::intelligence::PlanRequest;
use stride_planner::logging::LoggingConfig;
use stride_planner::models::{ExperienceLevel, Goal, ZoneMethod};

use commands::generate::GenerateOptions;
use helpers::args::{parse_date, parse_race_arg, RaceArg};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride running plan generator",
    long_about = "Calculate training zones from race results and generate periodized running plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate and print training zones
    Zones {
        /// Zone calculation method (jack-daniels, critical-velocity)
        #[arg(long, default_value = "jack-daniels")]
        method: ZoneMethod,

        /// Race result as LABEL=TIME, e.g. 5K=22:30 (repeatable)
        #[arg(long = "race", value_parser = parse_race_arg)]
        races: Vec<RaceArg>,

        /// Derive zones directly from a known VDOT
        #[arg(long, conflicts_with = "races")]
        vdot: Option<f64>,
    },

    /// Generate a training plan
    Generate {
        /// Plan name
        #[arg(long)]
        name: String,

        /// Goal race (5K, 10K, "Half Marathon", Marathon)
        #[arg(long)]
        goal: Goal,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        level: ExperienceLevel,

        /// Plan length in weeks (defaults to the goal's standard length)
        #[arg(long)]
        weeks: Option<u32>,

        /// Training days per week (3-6)
        #[arg(long, default_value = "4")]
        days: u8,

        /// Race result used for paces, as LABEL=TIME (repeatable)
        #[arg(long = "race", value_parser = parse_race_arg)]
        races: Vec<RaceArg>,

        /// Zone calculation method for --race samples
        #[arg(long, default_value = "jack-daniels")]
        method: ZoneMethod,

        /// Athlete profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// First day of the plan (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Save the plan as JSON
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show a saved plan
    Show {
        /// Plan JSON file
        path: PathBuf,

        /// Re-anchor the plan to a start date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Zones {
            method,
            races,
            vdot,
        } => commands::zones::run(method, races, vdot),
        Command::Generate {
            name,
            goal,
            level,
            weeks,
            days,
            races,
            method,
            profile,
            start_date,
            output,
        } => {
            let mut request = PlanRequest::new(name, goal, level).days_per_week(days);
            if let Some(weeks) = weeks {
                request = request.weeks(weeks);
            }
            commands::generate::run(
                &request,
                GenerateOptions {
                    races,
                    method,
                    profile,
                    start_date,
                    output,
                },
            )
        }
        Command::Show { path, start_date } => commands::show::run(&path, start_date),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}
