// Test fixtures - reusable test data
// Provides consistent months and event sets across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use calendar_layout::models::event::SourceEvent;
use calendar_layout::utils::date::parse_timestamp;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ts(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// January 2024 starts on a Monday
    pub fn jan_1_2024() -> NaiveDate {
        date(2024, 1, 1)
    }

    /// September 2024 starts on a Sunday
    pub fn sep_1_2024() -> NaiveDate {
        date(2024, 9, 1)
    }

    /// Leap day
    pub fn feb_29_2024() -> NaiveDate {
        date(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::ts;
    use super::*;

    pub fn event(id: i64, start: &str, end: &str) -> SourceEvent {
        SourceEvent::new(id, format!("Event {}", id), ts(start), ts(end)).unwrap()
    }

    /// Creates a simple single-day event
    pub fn standup() -> SourceEvent {
        event(1, "2024-01-10 09:00:00", "2024-01-10 09:15:00")
    }

    /// Three-day event crossing nothing but days
    pub fn offsite() -> SourceEvent {
        event(2, "2024-01-05 10:00:00", "2024-01-07 18:00:00")
    }

    /// Event running across the Sunday/Monday row boundary of a Monday grid
    pub fn long_weekend() -> SourceEvent {
        event(3, "2024-01-13 08:00:00", "2024-01-16 18:00:00")
    }

    /// A busy January: overlapping bars, single-day events and a December carry-in
    pub fn busy_january() -> Vec<SourceEvent> {
        vec![
            event(10, "2023-12-30 09:00:00", "2024-01-02 12:00:00"),
            event(11, "2024-01-02 08:00:00", "2024-01-02 09:00:00"),
            event(12, "2024-01-03 10:00:00", "2024-01-05 10:00:00"),
            event(13, "2024-01-04 09:00:00", "2024-01-04 10:00:00"),
            event(14, "2024-01-04 13:00:00", "2024-01-09 10:00:00"),
            event(15, "2024-01-08 07:00:00", "2024-01-08 08:00:00"),
            event(16, "2024-01-20 00:00:00", "2024-01-20 23:59:59"),
            event(17, "2024-01-29 10:00:00", "2024-02-02 10:00:00"),
        ]
    }

    /// Backend JSON for a handful of May events
    pub fn may_json() -> &'static str {
        r#"[
            {"id": 1, "startTime": "2024-04-30 18:00:00", "endTime": "2024-05-03 12:00:00",
             "title": "Holiday trip", "priority": 2, "isDone": 0},
            {"id": 2, "startTime": "2024-05-01 10:00:00", "endTime": "2024-05-01 11:00:00",
             "title": "Call home", "description": "weekly", "priority": 1, "isDone": 1},
            {"id": 3, "startTime": "2024-05-02", "endTime": "2024-05-02 23:59:59",
             "title": "Museum", "priority": 3, "isDone": 0}
        ]"#
    }
}
