//! Solar to lunar date conversion port.
//!
//! The conversion tables live outside this crate; callers plug a converter
//! in through [`LunarCalendar`].

use chrono::NaiveDate;

use crate::models::calendar_day::LunarDate;

/// Converts Gregorian dates to lunar calendar data.
pub trait LunarCalendar {
    /// Lunar data for `date`, or `None` when the date is outside the
    /// converter's supported range.
    fn convert(&self, date: NaiveDate) -> Option<LunarDate>;
}

/// Converter that knows no lunar dates. Cells get empty labels and only
/// solar festivals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarCalendar;

impl LunarCalendar for NoLunarCalendar {
    fn convert(&self, _date: NaiveDate) -> Option<LunarDate> {
        None
    }
}

impl<F> LunarCalendar for F
where
    F: Fn(NaiveDate) -> Option<LunarDate>,
{
    fn convert(&self, date: NaiveDate) -> Option<LunarDate> {
        self(date)
    }
}
