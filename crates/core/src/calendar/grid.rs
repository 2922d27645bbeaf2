//! Year grid coordinates.
//!
//! The grid is seven columns wide, Sunday first, and starts on the Sunday on
//! or before January 1. A *grid ordinal* is the day offset from that Sunday.

use chrono::{Datelike, Duration, NaiveDate};

/// Days per grid row.
pub const DAYS_PER_WEEK: i64 = 7;

/// Coordinate mapper for one year's week-row grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearGrid {
    year: i32,
    start: NaiveDate,
    days: i64,
}

impl YearGrid {
    /// Builds the grid for `year`. Returns `None` for years chrono cannot
    /// represent.
    pub fn new(year: i32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)?;

        let start = first.checked_sub_signed(Duration::days(
            first.weekday().num_days_from_sunday().into(),
        ))?;
        let end = last.checked_add_signed(Duration::days(
            (6 - last.weekday().num_days_from_sunday()).into(),
        ))?;

        Some(Self {
            year,
            start,
            days: (end - start).num_days() + 1,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First rendered day (a Sunday).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Number of rendered days, a multiple of 7.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Number of week rows.
    pub fn rows(&self) -> i64 {
        self.days / DAYS_PER_WEEK
    }

    /// Grid ordinal of `date`. Negative before the grid start.
    pub fn ord(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Date at grid ordinal `ord`.
    pub fn date(&self, ord: i64) -> NaiveDate {
        self.start + Duration::days(ord)
    }

    /// Week row of an ordinal.
    pub fn row(ord: i64) -> i64 {
        ord.div_euclid(DAYS_PER_WEEK)
    }

    /// Column of an ordinal, 0 for Sunday.
    pub fn col(ord: i64) -> i64 {
        ord.rem_euclid(DAYS_PER_WEEK)
    }

    /// Returns true if `date` falls on a rendered cell.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (0..self.days).contains(&self.ord(date))
    }

    /// Iterates every rendered day with its ordinal.
    pub fn dates(&self) -> impl Iterator<Item = (i64, NaiveDate)> + '_ {
        (0..self.days).map(|ord| (ord, self.date(ord)))
    }
}
