//! Per-day event visibility and continuation ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::event::{RenderEvent, SourceEvent};

/// Events visible on `date`, with continuation flags, in layout order.
///
/// An event is visible when `date` falls within its start and end days,
/// both inclusive.
pub fn resolve_day(date: NaiveDate, events: &[SourceEvent]) -> Vec<RenderEvent> {
    let mut resolved: Vec<RenderEvent> = events
        .iter()
        .filter(|event| event.covers_date(date))
        .map(|event| RenderEvent::for_day(event, date))
        .collect();

    sort_for_layout(&mut resolved);
    resolved
}

/// Stable sort putting bars that run through the day ahead of single-day
/// events. Ties keep their input order.
pub fn sort_for_layout(events: &mut [RenderEvent]) {
    events.sort_by(continuation_order);
}

/// Layout ordering between two events of the same day.
///
/// 1. Events continuing from the previous day first; among those the later
///    end first.
/// 2. Then events continuing into the next day; among those the later end
///    first.
/// 3. Everything else compares equal.
pub fn continuation_order(a: &RenderEvent, b: &RenderEvent) -> Ordering {
    b.has_last
        .cmp(&a.has_last)
        .then_with(|| {
            if a.has_last && b.has_last {
                b.end_time().cmp(&a.end_time())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.has_next.cmp(&a.has_next))
        .then_with(|| {
            if a.has_next && b.has_next {
                b.end_time().cmp(&a.end_time())
            } else {
                Ordering::Equal
            }
        })
}

/// Events of a resolved day that continue into the next day.
pub fn has_next_events(events: &[RenderEvent]) -> Vec<&RenderEvent> {
    events.iter().filter(|event| event.has_next).collect()
}
