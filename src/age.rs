//! age.rs
//!
//! Turns a pair of dates into a years/months/days breakdown.
//!
//! Two decompositions are available:
//!   • `Approximate` (default): whole elapsed days folded with fixed
//!     365-day years and 30-day months. Month lengths and leap days are
//!     ignored, so results drift near month boundaries.
//!   • `Calendar`: month/day borrowing against real month lengths.
//!
//! The approximate one is what the form reports unless asked otherwise.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Placeholder shown for a component that has not been computed.
pub const PLACEHOLDER: &str = "--";

/// How elapsed time is folded into years, months and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownMode {
    #[default]
    Approximate,
    Calendar,
}

/// Years, months and days since birth. Each component is `None` until a
/// valid birth date has been evaluated; the three are always set together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: Option<u32>,
    pub months: Option<u32>,
    pub days: Option<u32>,
}

impl AgeBreakdown {
    /// The "not computed" state.
    pub const NOT_COMPUTED: Self = Self {
        years: None,
        months: None,
        days: None,
    };

    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years: Some(years),
            months: Some(months),
            days: Some(days),
        }
    }

    pub fn is_computed(&self) -> bool {
        self.years.is_some()
    }

    /// Component values as display strings, placeholder when absent.
    pub fn display_parts(&self) -> [String; 3] {
        [self.years, self.months, self.days].map(|c| match c {
            Some(n) => n.to_string(),
            None => PLACEHOLDER.to_string(),
        })
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [y, m, d] = self.display_parts();
        write!(f, "{y} years, {m} months, {d} days")
    }
}

/// Breakdown of the time between `birthdate` and `today` in the given mode.
///
/// Callers are expected to have rejected birth dates after `today`.
pub fn breakdown(birthdate: NaiveDate, today: NaiveDate, mode: BreakdownMode) -> AgeBreakdown {
    match mode {
        BreakdownMode::Approximate => approximate_breakdown(elapsed_days(birthdate, today)),
        BreakdownMode::Calendar => calendar_breakdown(birthdate, today),
    }
}

/// Absolute number of whole days between two dates.
pub fn elapsed_days(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    (today - birthdate).num_days().abs()
}

/// Fold a day count with 365-day years and 30-day months.
pub fn approximate_breakdown(total_days: i64) -> AgeBreakdown {
    let total_days = total_days.max(0);
    let years = total_days / DAYS_PER_YEAR;
    let rest = total_days % DAYS_PER_YEAR;
    let months = rest / DAYS_PER_MONTH;
    let days = rest % DAYS_PER_MONTH;

    AgeBreakdown::new(years as u32, months as u32, days as u32)
}

/// Calendar-aware years/months/days.
///
/// Chrono does not provide a year/month/day diff, so the borrowing rules are
/// done by hand:
///   • day underflow borrows the length of the month before `today`
///   • month underflow borrows a year
pub fn calendar_breakdown(birthdate: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    debug_assert!(birthdate <= today, "birth date {birthdate} after {today}");

    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeBreakdown::new(years as u32, months as u32, days as u32)
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
