// ABOUTME: Periodization, day-template and workout-structure constants
// ABOUTME: Fixed ratios the plan generator reproduces exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Three-phase periodization curve
pub mod periodization {
    /// Fraction of the plan spent ramping linearly to the peak volume
    pub const BUILD_FRACTION: f64 = 0.7;
    /// Number of taper weeks at the end of every plan
    pub const TAPER_WEEKS: u32 = 2;
    /// Second-to-last week as a fraction of peak volume
    pub const PENULTIMATE_TAPER_FACTOR: f64 = 0.7;
    /// Final (race) week as a fraction of peak volume
    pub const FINAL_TAPER_FACTOR: f64 = 0.5;
    /// Shortest plan: one build week, one more week, and two taper weeks
    pub const MIN_PLAN_WEEKS: u32 = 4;
    /// Recovery weeks fall on every Nth week before the taper
    pub const RECOVERY_WEEK_INTERVAL: u32 = 4;
    /// Volume multiplier used only when recovery reduction is enabled
    pub const RECOVERY_WEEK_FACTOR: f64 = 0.75;
}

/// Final formatting pass
pub mod rounding {
    /// Workout distances are rounded half-up to this multiple (km)
    pub const DISTANCE_UNIT_KM: f64 = 5.0;
    /// Workout durations are rounded half-up to this multiple (minutes)
    pub const DURATION_UNIT_MINUTES: f64 = 30.0;
}

/// Percentage of the week's distance assigned to each training slot
pub mod templates {
    /// 3 days: easy, quality, long
    pub const THREE_DAY: [f64; 3] = [0.30, 0.25, 0.45];
    /// 4 days: easy, quality, easy, long
    pub const FOUR_DAY: [f64; 4] = [0.25, 0.22, 0.18, 0.35];
    /// 5 days: easy, easy, quality, easy, long
    pub const FIVE_DAY: [f64; 5] = [0.20, 0.18, 0.20, 0.15, 0.27];
    /// 6 days: easy, easy, quality, easy, easy, long
    pub const SIX_DAY: [f64; 6] = [0.18, 0.16, 0.18, 0.14, 0.12, 0.22];
    /// Quality slot stays easy up to and including this week on 3-day plans
    pub const THREE_DAY_ADAPTATION_WEEKS: u32 = 3;
    /// Quality slot stays easy up to and including this week on 4-6 day plans
    pub const ADAPTATION_WEEKS: u32 = 2;
}

/// Segment splits within structured workouts
pub mod workouts {
    /// Tempo: warmup, threshold block, cooldown
    pub const TEMPO_SPLIT: [f64; 3] = [0.18, 0.60, 0.22];
    /// Interval: warmup, work block total, recovery block total, cooldown
    pub const INTERVAL_SPLIT: [f64; 4] = [0.20, 0.36, 0.24, 0.20];
    /// Fartlek: warmup, variable-pace block, cooldown
    pub const FARTLEK_SPLIT: [f64; 3] = [0.20, 0.65, 0.15];
    /// Nominal interval repetition length (km)
    pub const INTERVAL_REP_KM: f64 = 0.8;
    /// Fewest interval repetitions
    pub const MIN_INTERVAL_REPS: u32 = 4;
    /// Most interval repetitions
    pub const MAX_INTERVAL_REPS: u32 = 8;
    /// Jog recovery between interval repetitions (minutes)
    pub const INTERVAL_RECOVERY_MINUTES: u32 = 2;
}

/// Default plan length in weeks per goal
pub mod default_weeks {
    /// 5K
    pub const FIVE_K: u32 = 8;
    /// 10K
    pub const TEN_K: u32 = 10;
    /// Half marathon
    pub const HALF_MARATHON: u32 = 12;
    /// Marathon
    pub const MARATHON: u32 = 16;
}

/// Peak (maintenance-phase) weekly volume in km, indexed
/// `[beginner, intermediate, advanced]`
pub mod peak_volume {
    /// 5K
    pub const FIVE_K: [f64; 3] = [20.0, 30.0, 40.0];
    /// 10K
    pub const TEN_K: [f64; 3] = [30.0, 45.0, 60.0];
    /// Half marathon
    pub const HALF_MARATHON: [f64; 3] = [40.0, 60.0, 80.0];
    /// Marathon
    pub const MARATHON: [f64; 3] = [50.0, 75.0, 100.0];
}
