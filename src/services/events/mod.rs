// Event input service
// Decodes backend event lists and checks them before layout

use std::fs;
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};
use crate::models::event::SourceEvent;

/// Decode a JSON array of events and reject any event that ends before it
/// starts.
pub fn parse_events(json: &str) -> CalendarResult<Vec<SourceEvent>> {
    let events: Vec<SourceEvent> = serde_json::from_str(json)?;
    validate_events(&events)?;
    log::debug!("Decoded {} events", events.len());
    Ok(events)
}

/// Read and decode the events file at `path`.
pub fn load_events(path: &Path) -> CalendarResult<Vec<SourceEvent>> {
    let content = fs::read_to_string(path)?;
    parse_events(&content)
}

pub fn validate_events(events: &[SourceEvent]) -> CalendarResult<()> {
    match events.iter().find(|event| event.validate().is_err()) {
        Some(invalid) => {
            log::warn!("Rejecting event {} ({}): end precedes start", invalid.id, invalid.title);
            Err(CalendarError::InvertedSpan { id: invalid.id })
        }
        None => Ok(()),
    }
}
