// Event module
// Server-supplied events and their per-day render form

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;
use crate::utils::date::{end_of_day, format_timestamp, parse_timestamp, start_of_day};

/// Eisenhower-style priority code used by the event backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    UnimportantNotUrgent,
    UnimportantUrgent,
    ImportantNotUrgent,
    ImportantUrgent,
}

impl TryFrom<u8> for Priority {
    type Error = CalendarError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::UnimportantNotUrgent),
            2 => Ok(Self::UnimportantUrgent),
            3 => Ok(Self::ImportantNotUrgent),
            4 => Ok(Self::ImportantUrgent),
            other => Err(CalendarError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::UnimportantNotUrgent => 1,
            Priority::UnimportantUrgent => 2,
            Priority::ImportantNotUrgent => 3,
            Priority::ImportantUrgent => 4,
        }
    }
}

/// Completion state of an event (`0` undone, `1` done on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DoneStatus {
    #[default]
    Undone,
    Done,
}

impl TryFrom<u8> for DoneStatus {
    type Error = CalendarError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Undone),
            1 => Ok(Self::Done),
            other => Err(CalendarError::InvalidDoneStatus(other)),
        }
    }
}

impl From<DoneStatus> for u8 {
    fn from(status: DoneStatus) -> Self {
        match status {
            DoneStatus::Undone => 0,
            DoneStatus::Done => 1,
        }
    }
}

/// Event as delivered by the backend. Read-only input to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEvent {
    pub id: i64,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_done: DoneStatus,
}

impl SourceEvent {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::SourceEvent;
    /// use calendar_layout::utils::date::parse_timestamp;
    ///
    /// let start = parse_timestamp("2024-01-05 10:00:00").unwrap();
    /// let end = parse_timestamp("2024-01-07 18:00:00").unwrap();
    /// let event = SourceEvent::new(1, "Offsite", start, end).unwrap();
    /// assert!(event.spans_multiple_days());
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            start_time,
            end_time,
            title: title.into(),
            description: None,
            priority: Priority::default(),
            is_done: DoneStatus::default(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> SourceEventBuilder {
        SourceEventBuilder::new()
    }

    /// Validate the event. Zero-length events are allowed.
    pub fn validate(&self) -> Result<(), String> {
        if self.end_time < self.start_time {
            return Err("Event end time must not be before start time".to_string());
        }
        Ok(())
    }

    /// Whether the event touches `date`, compared at day granularity with
    /// both ends inclusive.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.start_time.date() <= date && date <= self.end_time.date()
    }

    pub fn spans_multiple_days(&self) -> bool {
        self.start_time.date() != self.end_time.date()
    }

    pub fn is_done(&self) -> bool {
        self.is_done == DoneStatus::Done
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct SourceEventBuilder {
    id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    priority: Priority,
    is_done: DoneStatus,
}

impl SourceEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.is_done = if done { DoneStatus::Done } else { DoneStatus::Undone };
        self
    }

    /// Build the event
    pub fn build(self) -> Result<SourceEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start_time = self.start_time.ok_or("Event start time is required")?;
        let end_time = self.end_time.ok_or("Event end time is required")?;

        let event = SourceEvent {
            id,
            start_time,
            end_time,
            title,
            description: self.description,
            priority: self.priority,
            is_done: self.is_done,
        };

        event.validate()?;
        Ok(event)
    }
}

/// One event as shown on one day, with its continuation flags.
///
/// The same source event visible on five days yields five `RenderEvent`s
/// sharing an id. Lane indexes are kept by the layout engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEvent {
    #[serde(flatten)]
    pub event: SourceEvent,
    pub has_last: bool,
    pub has_next: bool,
}

impl RenderEvent {
    /// Derive the render form of `event` on `date`.
    ///
    /// `has_last` holds when the event starts strictly before the previous
    /// day's 23:59:59; `has_next` when it ends strictly after this day's
    /// 23:59:59.
    pub fn for_day(event: &SourceEvent, date: NaiveDate) -> Self {
        let day_start = start_of_day(date) - chrono::Duration::seconds(1);
        let day_end = end_of_day(date);

        Self {
            event: event.clone(),
            has_last: event.start_time < day_start,
            has_next: event.end_time > day_end,
        }
    }

    pub fn id(&self) -> i64 {
        self.event.id
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.event.end_time
    }
}

mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
