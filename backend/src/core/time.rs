//! Time management for the simulation
//!
//! The simulated calendar is deliberately simple: every month has 30 days,
//! every year has 12 months. A day is a fixed number of abstract tick units;
//! `Tick` commands accumulate fractional ticks and the engine performs a day
//! rollover when a full day's worth has elapsed.

use serde::{Deserialize, Serialize};

/// Tick units that make up one simulated day.
pub const TICKS_PER_DAY: f64 = 1000.0;

/// Days per simplified month.
pub const DAYS_PER_MONTH: u32 = 30;

/// Months per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// A point in simulated time.
///
/// `ticks` is intraday progress in tick units, `0.0 <= ticks < TICKS_PER_DAY`.
/// Calendar comparisons ignore intraday progress; only (year, month, day)
/// matter for settlement scheduling and income freezes.
///
/// # Example
/// ```
/// use market_tycoon_core_rs::GameDate;
///
/// let mut date = GameDate::new(2024, 1, 30);
/// date.advance_day();
/// assert_eq!((date.year, date.month, date.day), (2024, 2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameDate {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=30
    pub day: u32,
    /// Intraday progress in tick units, [0, TICKS_PER_DAY)
    pub ticks: f64,
}

impl GameDate {
    /// Create a date at the start of the given day.
    ///
    /// # Panics
    /// Panics when month or day are outside the simplified calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        assert!((1..=MONTHS_PER_YEAR).contains(&month), "month out of range");
        assert!((1..=DAYS_PER_MONTH).contains(&day), "day out of range");
        Self {
            year,
            month,
            day,
            ticks: 0.0,
        }
    }

    /// Fractional progress through the current day, in [0, 1).
    pub fn day_progress(&self) -> f64 {
        self.ticks / TICKS_PER_DAY
    }

    /// The calendar date of the following day, intraday progress reset.
    pub fn next_day(&self) -> GameDate {
        let mut next = *self;
        next.ticks = 0.0;
        next.day += 1;
        if next.day > DAYS_PER_MONTH {
            next.day = 1;
            next.month += 1;
            if next.month > MONTHS_PER_YEAR {
                next.month = 1;
                next.year += 1;
            }
        }
        next
    }

    /// Advance to the following day in place.
    pub fn advance_day(&mut self) {
        *self = self.next_day();
    }

    /// The first day of the month after this one.
    ///
    /// Used for income freezes ("frozen until the start of next month").
    pub fn start_of_next_month(&self) -> GameDate {
        let (year, month) = if self.month >= MONTHS_PER_YEAR {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        GameDate::new(year, month, 1)
    }

    /// Calendar comparison ignoring intraday progress.
    pub fn is_on_or_after(&self, other: &GameDate) -> bool {
        (self.year, self.month, self.day) >= (other.year, other.month, other.day)
    }
}

impl std::fmt::Display for GameDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
