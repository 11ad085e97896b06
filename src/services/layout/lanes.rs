//! Lane assignment for one day of the month grid.
//!
//! Lanes are the horizontal rows an event occupies inside a day cell. A
//! multi-day event keeps the lane it had the previous day so the UI can draw
//! one continuous bar. Lane numbers are compacted at every week start.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::calendar_day::is_week_start;
use crate::models::event::RenderEvent;

/// Lane slots of one day. `None` is an empty lane kept for alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLanes {
    pub date_index: usize,
    slots: Vec<Option<RenderEvent>>,
    #[serde(skip)]
    lanes: HashMap<i64, usize>,
}

impl DayLanes {
    /// An empty day at `date_index`.
    pub fn empty(date_index: usize) -> Self {
        Self {
            date_index,
            ..Self::default()
        }
    }

    fn from_slots(date_index: usize, slots: Vec<Option<RenderEvent>>) -> Self {
        let mut lanes = HashMap::with_capacity(slots.len());
        for (lane, slot) in slots.iter().enumerate() {
            if let Some(event) = slot {
                lanes.entry(event.id()).or_insert(lane);
            }
        }
        Self {
            date_index,
            slots,
            lanes,
        }
    }

    pub fn slots(&self) -> &[Option<RenderEvent>] {
        &self.slots
    }

    /// Number of lanes, empty ones included.
    pub fn lane_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of events placed on the day.
    pub fn event_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Lane of the event with `id` on this day.
    pub fn lane_of(&self, id: i64) -> Option<usize> {
        self.lanes.get(&id).copied()
    }

    /// Placed events with their lanes, in lane order.
    pub fn events(&self) -> impl Iterator<Item = (usize, &RenderEvent)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(lane, slot)| slot.as_ref().map(|event| (lane, event)))
    }

    /// Events that continue into the next day, with the lane they hold.
    pub fn continuing(&self) -> impl Iterator<Item = (usize, &RenderEvent)> {
        self.events().filter(|(_, event)| event.has_next)
    }
}

/// Lay out one day given the previous day's lanes.
///
/// Events continuing from `previous` are pinned to the lane they held there;
/// the remaining events, in the order given, take the first empty lane or a
/// new one at the end. On a week start the result is compacted: empty lanes
/// are dropped and lanes renumbered in order.
pub fn assign_day(
    date_index: usize,
    previous: Option<&DayLanes>,
    resolved: Vec<RenderEvent>,
) -> DayLanes {
    let mut pending: Vec<Option<RenderEvent>> = resolved.into_iter().map(Some).collect();
    let mut slots: Vec<Option<RenderEvent>> = Vec::new();

    if let Some(previous) = previous {
        for (lane, carried) in previous.continuing() {
            let matched = pending
                .iter_mut()
                .find(|candidate| matches!(candidate, Some(event) if event.id() == carried.id()))
                .and_then(Option::take);

            if let Some(event) = matched {
                if slots.len() <= lane {
                    slots.resize_with(lane + 1, || None);
                }
                slots[lane] = Some(event);
            }
        }
    }

    for event in pending.into_iter().flatten() {
        match slots.iter().position(Option::is_none) {
            Some(gap) => slots[gap] = Some(event),
            None => slots.push(Some(event)),
        }
    }

    if is_week_start(date_index) {
        slots = slots.into_iter().flatten().map(Some).collect();
    }

    DayLanes::from_slots(date_index, slots)
}
