// Property-based tests for grid construction and lane assignment
// Random months and random event sets must keep the layout invariants

use std::collections::HashSet;

use calendar_layout::models::event::SourceEvent;
use calendar_layout::models::settings::WeekStart;
use calendar_layout::services::grid::build_grid;
use calendar_layout::services::layout::{layout_month, resolve_day};
use calendar_layout::services::placement::{place_for, place_for_range};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Monday), Just(WeekStart::Sunday)]
}

/// (start day offset, start minute of day, length in minutes)
fn event_spec() -> impl Strategy<Value = (i64, i64, i64)> {
    (0..42i64, 0..1440i64, 0..(6 * 1440i64))
}

fn events_from(first: NaiveDate, specs: &[(i64, i64, i64)]) -> Vec<SourceEvent> {
    let origin = first.and_hms_opt(0, 0, 0).unwrap() - Duration::days(2);
    specs
        .iter()
        .enumerate()
        .map(|(id, &(day, minute, length))| {
            let start = origin + Duration::days(day) + Duration::minutes(minute);
            let end = start + Duration::minutes(length);
            SourceEvent::new(id as i64, format!("Event {}", id), start, end).unwrap()
        })
        .collect()
}

proptest! {
    /// Property: every month yields 42 consecutive days starting on the week start
    #[test]
    fn prop_grid_is_42_consecutive_days(
        year in 1900..2100i32,
        month in 1..=12u32,
        start in week_start(),
    ) {
        let grid = build_grid(year, month, start).unwrap();
        let cells = grid.cells();

        prop_assert_eq!(cells.len(), 42);
        prop_assert_eq!(cells[0].date.weekday(), start.weekday());
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        for (index, cell) in cells.iter().enumerate() {
            prop_assert_eq!(cell.date_index, index);
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let index = grid.date_index_of(first).unwrap();
        prop_assert!(index < 7);
        prop_assert!(cells[..index].iter().all(|cell| cell.is_last));
        prop_assert!(cells[index].is_current_month());
    }

    /// Property: every visible event lands in exactly one lane and no lane is shared
    #[test]
    fn prop_each_visible_event_placed_once(
        month in 1..=12u32,
        start in week_start(),
        specs in prop::collection::vec(event_spec(), 0..24),
    ) {
        let grid = build_grid(2024, month, start).unwrap();
        let events = events_from(grid.first_date().unwrap(), &specs);
        let layout = layout_month(&grid, &events).unwrap();

        for day in layout.days() {
            let expected: HashSet<i64> = resolve_day(day.date, &events).iter().map(|e| e.id()).collect();
            let placed: Vec<i64> = day.lanes.events().map(|(_, e)| e.id()).collect();
            let unique: HashSet<i64> = placed.iter().copied().collect();

            prop_assert_eq!(placed.len(), unique.len());
            prop_assert_eq!(unique, expected);
        }
    }

    /// Property: a bar keeps its lane from one day to the next inside a week row
    #[test]
    fn prop_continuing_event_keeps_lane_within_row(
        month in 1..=12u32,
        start in week_start(),
        specs in prop::collection::vec(event_spec(), 0..24),
    ) {
        let grid = build_grid(2024, month, start).unwrap();
        let events = events_from(grid.first_date().unwrap(), &specs);
        let layout = layout_month(&grid, &events).unwrap();

        for pair in layout.days().windows(2) {
            let (previous, today) = (&pair[0].lanes, &pair[1].lanes);
            if today.date_index % 7 == 0 {
                continue;
            }
            for (lane, event) in previous.continuing() {
                prop_assert_eq!(today.lane_of(event.id()), Some(lane));
            }
        }
    }

    /// Property: week rows open with compacted lanes
    #[test]
    fn prop_week_start_has_no_empty_lanes(
        month in 1..=12u32,
        start in week_start(),
        specs in prop::collection::vec(event_spec(), 0..24),
    ) {
        let grid = build_grid(2024, month, start).unwrap();
        let events = events_from(grid.first_date().unwrap(), &specs);
        let layout = layout_month(&grid, &events).unwrap();

        for day in layout.days().iter().step_by(7) {
            prop_assert!(day.lanes.slots().iter().all(Option::is_some));
        }
    }

    /// Property: placements only ever use the documented values
    #[test]
    fn prop_range_placement_is_total(a in 0..42usize, b in 0..42usize) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let single = place_for(start);
        prop_assert!((1..=6).contains(&single.row));
        prop_assert!((1..=7).contains(&single.col));

        let range = place_for_range(start, end);
        prop_assert!(!matches!(
            range.placement,
            calendar_layout::models::placement::Placement::Bottom
                | calendar_layout::models::placement::Placement::BottomEnd
                | calendar_layout::models::placement::Placement::TopEnd
        ));
    }
}
