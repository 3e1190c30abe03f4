// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for stride-cli
// ABOUTME: Prints zone tables, plan summaries, weekly totals and zone distribution

use stride_planner::models::{RunningPlan, ZoneName};

/// Print the summary block plus the zone table the plan was paced from
pub fn display_plan_summary(plan: &RunningPlan) {
    print!("{plan}");
    println!("Created: {}", plan.created_date.format("%Y-%m-%d %H:%M UTC"));
    if let Some(zones) = &plan.zones {
        println!();
        print!("{zones}");
    }
}

/// Print every week with its workouts and notes
pub fn display_schedule(plan: &RunningPlan) {
    for week in &plan.schedule {
        println!();
        print!("{week}");
    }
}

/// Print one line per week with its total distance
pub fn display_weekly_totals(plan: &RunningPlan) {
    println!("\nWeekly Distance");
    println!("{}", "-".repeat(50));
    let peak = plan.weekly_distances().into_iter().fold(0.0, f64::max);
    for week in &plan.schedule {
        let bar_len = if peak > 0.0 {
            (week.total_distance_km / peak * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "Week {:>2}: {:>5} km  {}",
            week.week_number,
            week.total_distance_km,
            "#".repeat(bar_len)
        );
    }
    println!("{}", "-".repeat(50));
    println!("Total: {} km", plan.total_distance());
}

/// Print the per-week distance in each zone
pub fn display_zone_distribution(plan: &RunningPlan) {
    println!("\nZone Distribution (km)");
    print!("{:<8}", "Week");
    for zone in ZoneName::ALL {
        print!(" {:>11}", zone.label());
    }
    println!();
    println!("{}", "-".repeat(8 + 12 * ZoneName::ALL.len()));

    for (week, distribution) in plan.schedule.iter().zip(plan.zone_distribution()) {
        print!("{:<8}", week.week_number);
        for zone in ZoneName::ALL {
            print!(" {:>11.1}", distribution.get(&zone).copied().unwrap_or(0.0));
        }
        println!();
    }
}
