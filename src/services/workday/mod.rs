//! Statutory holiday and make-up workday lookup.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarResult;

/// Answers whether a day is a public holiday or an extra working day.
pub trait WorkdayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Weekend day that is worked to compensate for a holiday.
    fn is_additional_workday(&self, date: NaiveDate) -> bool;
}

/// Date sets loaded from configuration.
///
/// ```toml
/// holidays = ["2024-05-01", "2024-05-02"]
/// additional_workdays = ["2024-04-28"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayTable {
    pub holidays: BTreeSet<NaiveDate>,
    pub additional_workdays: BTreeSet<NaiveDate>,
}

impl WorkdayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(content: &str) -> CalendarResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    pub fn with_additional_workdays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.additional_workdays.extend(dates);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.additional_workdays.is_empty()
    }
}

impl WorkdayCalendar for WorkdayTable {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    fn is_additional_workday(&self, date: NaiveDate) -> bool {
        self.additional_workdays.contains(&date)
    }
}
