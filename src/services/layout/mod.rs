//! Event layout for a month grid.
//!
//! Resolves which events show on each cell and assigns lanes day by day.
//! Days are processed in grid order; each day's lanes are the input of the
//! next day's assignment.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CalendarResult;
use crate::models::event::{RenderEvent, SourceEvent};
use crate::services::events::validate_events;
use crate::services::grid::MonthGrid;

mod lanes;
mod resolver;

pub use lanes::{assign_day, DayLanes};
pub use resolver::{continuation_order, has_next_events, resolve_day, sort_for_layout};

/// Layout of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    pub date: NaiveDate,
    /// Visible events in layout order, before lane assignment
    pub resolved: Vec<RenderEvent>,
    pub lanes: DayLanes,
}

impl DayLayout {
    pub fn date_index(&self) -> usize {
        self.lanes.date_index
    }

    /// Visible events that continue into the next day.
    pub fn has_next(&self) -> Vec<&RenderEvent> {
        has_next_events(&self.resolved)
    }
}

/// Layout of every cell of a month grid, in grid order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    days: Vec<DayLayout>,
}

impl MonthLayout {
    pub fn days(&self) -> &[DayLayout] {
        &self.days
    }

    pub fn day(&self, date_index: usize) -> Option<&DayLayout> {
        self.days.get(date_index)
    }

    /// Lane rows per day, the structure the month view renders.
    pub fn render_rows(&self) -> Vec<&[Option<RenderEvent>]> {
        self.days.iter().map(|day| day.lanes.slots()).collect()
    }

    /// Largest lane count of any day.
    pub fn max_lanes(&self) -> usize {
        self.days
            .iter()
            .map(|day| day.lanes.lane_count())
            .max()
            .unwrap_or(0)
    }
}

/// Lay out `events` over every cell of `grid`.
///
/// Fails without a partial result if any event ends before it starts.
pub fn layout_month(grid: &MonthGrid, events: &[SourceEvent]) -> CalendarResult<MonthLayout> {
    let dates: Vec<NaiveDate> = grid.cells().iter().map(|cell| cell.date).collect();
    layout_dates(&dates, events)
}

/// Lay out `events` over consecutive `dates`, treating every seventh date
/// (starting with the first) as a week start.
pub fn layout_dates(dates: &[NaiveDate], events: &[SourceEvent]) -> CalendarResult<MonthLayout> {
    validate_events(events)?;

    let mut days: Vec<DayLayout> = Vec::with_capacity(dates.len());

    for (date_index, &date) in dates.iter().enumerate() {
        let resolved = resolve_day(date, events);
        let previous = days.last().map(|day| &day.lanes);
        let lanes = assign_day(date_index, previous, resolved.clone());

        days.push(DayLayout {
            date,
            resolved,
            lanes,
        });
    }

    let layout = MonthLayout { days };
    log::debug!(
        "Laid out {} events over {} days (max {} lanes)",
        events.len(),
        dates.len(),
        layout.max_lanes()
    );
    Ok(layout)
}
