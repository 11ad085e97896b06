//! Grid cell model for the month view.
//!
//! A month is always rendered as 42 cells (6 rows of 7 days). Cells that
//! pad the grid with days of the neighbouring months are flagged with
//! `is_last` / `is_next`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of cells in a month grid.
pub const GRID_CELLS: usize = 42;

/// Number of rows in a month grid.
pub const GRID_ROWS: usize = 6;

pub const DAYS_PER_WEEK: usize = 7;

/// Lunar calendar data for a single Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub month: u32,
    pub day: u32,
    /// Display name of the lunar month, leap months included (e.g. "闰四月")
    pub month_name: String,
    /// Display name of the lunar day (e.g. "初一")
    pub day_name: String,
    /// Solar term falling on this day, empty when there is none
    #[serde(default)]
    pub term: String,
}

impl LunarDate {
    pub fn is_first_day(&self) -> bool {
        self.day == 1
    }

    /// Label shown under the day number: the solar term if any, the month
    /// name on the first lunar day, otherwise the lunar day name.
    pub fn display_label(&self) -> &str {
        if !self.term.is_empty() {
            &self.term
        } else if self.is_first_day() {
            &self.month_name
        } else {
            &self.day_name
        }
    }
}

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSlot {
    Previous,
    Current,
    Next,
}

/// One cell of the rendered month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCell {
    pub date: NaiveDate,
    pub lunar: Option<LunarDate>,
    /// Term, lunar month or lunar day name; empty without lunar data
    pub label: String,
    /// Solar festival title, else lunar festival title, else empty
    pub festival_name: String,
    pub is_holiday: bool,
    pub is_additional_workday: bool,
    pub is_last: bool,
    pub is_next: bool,
    /// Position in the flat 42-cell sequence
    pub date_index: usize,
}

impl DateCell {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn slot(&self) -> MonthSlot {
        if self.is_last {
            MonthSlot::Previous
        } else if self.is_next {
            MonthSlot::Next
        } else {
            MonthSlot::Current
        }
    }

    pub fn is_current_month(&self) -> bool {
        self.slot() == MonthSlot::Current
    }

    /// Whether this cell opens a new week row.
    pub fn is_week_start(&self) -> bool {
        is_week_start(self.date_index)
    }
}

/// Whether a linear grid index opens a new week row.
pub fn is_week_start(date_index: usize) -> bool {
    date_index % DAYS_PER_WEEK == 0
}
