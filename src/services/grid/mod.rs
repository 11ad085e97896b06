//! Month grid construction.
//!
//! Builds the fixed 6×7 grid for a month: trailing days of the previous
//! month, every day of the month, then leading days of the next month until
//! 42 cells are emitted. Each cell is enriched through the lunar, festival
//! and workday ports.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};
use crate::models::calendar_day::{DateCell, MonthSlot, DAYS_PER_WEEK, GRID_CELLS};
use crate::models::settings::WeekStart;
use crate::services::festival::{FestivalLookup, FestivalTable};
use crate::services::lunar::{LunarCalendar, NoLunarCalendar};
use crate::services::workday::{WorkdayCalendar, WorkdayTable};
use crate::utils::date::{days_in_month, end_of_day, format_timestamp, next_month, previous_month, start_of_day};

/// The 42 cells of one month view. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    cells: Vec<DateCell>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    pub fn cell(&self, date_index: usize) -> Option<&DateCell> {
        self.cells.get(date_index)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells.first().map(|cell| cell.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.last().map(|cell| cell.date)
    }

    /// Grid index of `date`, if the date is on the grid.
    pub fn date_index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first_date()?;
        let offset = date.signed_duration_since(first).num_days();
        usize::try_from(offset).ok().filter(|index| *index < self.cells.len())
    }

    /// Cells grouped into week rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DateCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Time window covered by the grid: first cell 00:00:00 to last cell 23:59:59.
    pub fn visible_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((start_of_day(self.first_date()?), end_of_day(self.last_date()?)))
    }

    /// Query parameters for fetching the events shown on this grid.
    pub fn event_query(&self) -> Option<EventQuery> {
        let (start, end) = self.visible_range()?;
        Some(EventQuery {
            start_time: format_timestamp(start),
            end_time: format_timestamp(end),
        })
    }
}

/// Time window sent to the event backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    pub start_time: String,
    pub end_time: String,
}

/// Builds month grids from the lunar, festival and workday ports.
pub struct GridBuilder<L = NoLunarCalendar, F = FestivalTable, W = WorkdayTable> {
    lunar: L,
    festivals: F,
    workdays: W,
}

impl GridBuilder {
    /// Built-in festival table, no lunar data, no workday data.
    pub fn standard() -> Self {
        Self {
            lunar: NoLunarCalendar,
            festivals: FestivalTable::chinese(),
            workdays: WorkdayTable::default(),
        }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

impl<L, F, W> GridBuilder<L, F, W>
where
    L: LunarCalendar,
    F: FestivalLookup,
    W: WorkdayCalendar,
{
    pub fn new(lunar: L, festivals: F, workdays: W) -> Self {
        Self {
            lunar,
            festivals,
            workdays,
        }
    }

    pub fn with_lunar<L2: LunarCalendar>(self, lunar: L2) -> GridBuilder<L2, F, W> {
        GridBuilder {
            lunar,
            festivals: self.festivals,
            workdays: self.workdays,
        }
    }

    pub fn with_festivals<F2: FestivalLookup>(self, festivals: F2) -> GridBuilder<L, F2, W> {
        GridBuilder {
            lunar: self.lunar,
            festivals,
            workdays: self.workdays,
        }
    }

    pub fn with_workdays<W2: WorkdayCalendar>(self, workdays: W2) -> GridBuilder<L, F, W2> {
        GridBuilder {
            lunar: self.lunar,
            festivals: self.festivals,
            workdays,
        }
    }

    /// Build the 42-cell grid for `year`/`month`.
    pub fn build(&self, year: i32, month: u32, week_start: WeekStart) -> CalendarResult<MonthGrid> {
        let invalid = || CalendarError::InvalidMonth { year, month };

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let month_days = days_in_month(year, month).ok_or_else(invalid)?;
        let previous = previous_month(first).ok_or_else(invalid)?;
        let previous_days = days_in_month(previous.year(), previous.month()).ok_or_else(invalid)?;
        let following = next_month(first).ok_or_else(invalid)?;

        let padding = week_start.offset_of(first.weekday());

        let mut dates: Vec<(NaiveDate, MonthSlot)> = Vec::with_capacity(GRID_CELLS);

        for day in (previous_days - padding + 1)..=previous_days {
            let date = previous.with_day(day).ok_or_else(invalid)?;
            dates.push((date, MonthSlot::Previous));
        }
        for day in 1..=month_days {
            let date = first.with_day(day).ok_or_else(invalid)?;
            dates.push((date, MonthSlot::Current));
        }
        let mut day = 1;
        while dates.len() < GRID_CELLS {
            let date = following.with_day(day).ok_or_else(invalid)?;
            dates.push((date, MonthSlot::Next));
            day += 1;
        }
        dates.truncate(GRID_CELLS);

        let cells = dates
            .into_iter()
            .enumerate()
            .map(|(date_index, (date, slot))| self.cell(date, slot, date_index))
            .collect();

        log::debug!(
            "Built grid for {}-{:02} ({:?} start, {} leading days)",
            year,
            month,
            week_start,
            padding
        );

        Ok(MonthGrid {
            year,
            month,
            week_start,
            cells,
        })
    }

    fn cell(&self, date: NaiveDate, slot: MonthSlot, date_index: usize) -> DateCell {
        let lunar = self.lunar.convert(date);
        let label = lunar
            .as_ref()
            .map(|lunar| lunar.display_label().to_string())
            .unwrap_or_default();
        let festival_name = self.festivals.festival_name(
            date.month(),
            date.day(),
            lunar.as_ref().map(|lunar| (lunar.month, lunar.day)),
        );

        DateCell {
            date,
            lunar,
            label,
            festival_name,
            is_holiday: self.workdays.is_holiday(date),
            is_additional_workday: self.workdays.is_additional_workday(date),
            is_last: slot == MonthSlot::Previous,
            is_next: slot == MonthSlot::Next,
            date_index,
        }
    }
}

/// Build a grid with the built-in festival table and no lunar or workday data.
pub fn build_grid(year: i32, month: u32, week_start: WeekStart) -> CalendarResult<MonthGrid> {
    GridBuilder::standard().build(year, month, week_start)
}
