// ABOUTME: Day-count week templates: which weekdays run, each slot's share of weekly volume
// ABOUTME: Quality-slot rotation rule deciding easy, tempo, interval or fartlek per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Weekday;
use stride_core::constants::planning::templates::{
    ADAPTATION_WEEKS, FIVE_DAY, FOUR_DAY, SIX_DAY, THREE_DAY, THREE_DAY_ADAPTATION_WEEKS,
};
use stride_core::errors::PlanError;

/// Role of a training slot within the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// Plain easy run
    Easy,
    /// Quality session, typed by [`quality_session`]
    Quality,
    /// Long run
    Long,
}

/// One training day of a template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Day of the week
    pub day: Weekday,
    /// What kind of session runs on this day
    pub role: SlotRole,
    /// Fraction of the week's target distance
    pub share: f64,
}

/// Session type filling the quality slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitySession {
    /// Adaptation weeks: the quality slot stays easy
    Easy,
    /// Threshold block
    Tempo,
    /// VO2max repetitions
    Interval,
    /// Variable-pace run
    Fartlek,
}

const fn slot(day: Weekday, role: SlotRole, share: f64) -> Slot {
    Slot { day, role, share }
}

static THREE_DAY_SLOTS: [Slot; 3] = [
    slot(Weekday::Tue, SlotRole::Easy, THREE_DAY[0]),
    slot(Weekday::Thu, SlotRole::Quality, THREE_DAY[1]),
    slot(Weekday::Sat, SlotRole::Long, THREE_DAY[2]),
];

static FOUR_DAY_SLOTS: [Slot; 4] = [
    slot(Weekday::Tue, SlotRole::Easy, FOUR_DAY[0]),
    slot(Weekday::Thu, SlotRole::Quality, FOUR_DAY[1]),
    slot(Weekday::Fri, SlotRole::Easy, FOUR_DAY[2]),
    slot(Weekday::Sun, SlotRole::Long, FOUR_DAY[3]),
];

static FIVE_DAY_SLOTS: [Slot; 5] = [
    slot(Weekday::Mon, SlotRole::Easy, FIVE_DAY[0]),
    slot(Weekday::Tue, SlotRole::Easy, FIVE_DAY[1]),
    slot(Weekday::Thu, SlotRole::Quality, FIVE_DAY[2]),
    slot(Weekday::Fri, SlotRole::Easy, FIVE_DAY[3]),
    slot(Weekday::Sun, SlotRole::Long, FIVE_DAY[4]),
];

static SIX_DAY_SLOTS: [Slot; 6] = [
    slot(Weekday::Mon, SlotRole::Easy, SIX_DAY[0]),
    slot(Weekday::Tue, SlotRole::Easy, SIX_DAY[1]),
    slot(Weekday::Wed, SlotRole::Quality, SIX_DAY[2]),
    slot(Weekday::Thu, SlotRole::Easy, SIX_DAY[3]),
    slot(Weekday::Fri, SlotRole::Easy, SIX_DAY[4]),
    slot(Weekday::Sun, SlotRole::Long, SIX_DAY[5]),
];

/// Training slots for a number of days per week, in weekday order
///
/// # Errors
///
/// Returns [`PlanError::InvalidSchedule`] outside 3-6 days
pub fn slots_for(days_per_week: u8) -> Result<&'static [Slot], PlanError> {
    match days_per_week {
        3 => Ok(&THREE_DAY_SLOTS),
        4 => Ok(&FOUR_DAY_SLOTS),
        5 => Ok(&FIVE_DAY_SLOTS),
        6 => Ok(&SIX_DAY_SLOTS),
        _ => Err(PlanError::InvalidSchedule { days_per_week }),
    }
}

/// Session type of the quality slot in `week`.
///
/// - 3 days: easy through week 3, then intervals
/// - 4 and 5 days: easy through week 2, then intervals on even weeks and
///   tempo on odd weeks
/// - 6 days: easy through week 2, then by `week % 3`: 0 fartlek, 1 interval,
///   2 tempo
#[must_use]
pub const fn quality_session(days_per_week: u8, week: u32) -> QualitySession {
    match days_per_week {
        3 if week <= THREE_DAY_ADAPTATION_WEEKS => QualitySession::Easy,
        3 => QualitySession::Interval,
        _ if week <= ADAPTATION_WEEKS => QualitySession::Easy,
        6 => match week % 3 {
            0 => QualitySession::Fartlek,
            1 => QualitySession::Interval,
            _ => QualitySession::Tempo,
        },
        _ if week % 2 == 0 => QualitySession::Interval,
        _ => QualitySession::Tempo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shares_sum_to_one() {
        for days in 3..=6 {
            let total: f64 = slots_for(days).unwrap().iter().map(|s| s.share).sum();
            assert!((total - 1.0).abs() < 1e-9, "{days} days sum to {total}");
        }
    }

    #[test]
    fn test_unsupported_day_counts() {
        assert_eq!(
            slots_for(2),
            Err(PlanError::InvalidSchedule { days_per_week: 2 })
        );
        assert!(slots_for(7).is_err());
    }

    #[test]
    fn test_quality_rotation() {
        assert_eq!(quality_session(3, 3), QualitySession::Easy);
        assert_eq!(quality_session(3, 4), QualitySession::Interval);
        assert_eq!(quality_session(4, 2), QualitySession::Easy);
        assert_eq!(quality_session(4, 3), QualitySession::Tempo);
        assert_eq!(quality_session(5, 4), QualitySession::Interval);
        assert_eq!(quality_session(6, 3), QualitySession::Fartlek);
        assert_eq!(quality_session(6, 4), QualitySession::Interval);
        assert_eq!(quality_session(6, 5), QualitySession::Tempo);
    }
}
