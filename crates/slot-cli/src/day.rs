//! Day file format: the JSON shape read from disk or stdin, and the JSON
//! shape written back out.
//!
//! Times are `HH:MM` clock strings on the wire and minutes from midnight
//! inside the engine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slot_engine::clock::{format_minutes, parse_minutes};
use slot_engine::{Event, MeetingRequest, ResolutionTier, TimeRange};

/// A day's events and, optionally, the meeting to fit into it.
#[derive(Debug, Deserialize)]
pub struct DayFile {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: Option<RequestInput>,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    pub start: String,
    pub end: String,
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestInput {
    pub duration: u32,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub optional_attendees: Vec<String>,
}

impl DayFile {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse day file")
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        self.events.iter().map(EventInput::to_event).collect()
    }
}

impl EventInput {
    fn to_event(&self) -> Result<Event> {
        let when = parse_range(&self.start, &self.end)
            .with_context(|| format!("Invalid time range for event '{}'", self.title))?;
        Ok(Event::new(self.title.clone(), when, self.attendees.iter().cloned()))
    }
}

impl RequestInput {
    pub fn to_request(&self) -> MeetingRequest {
        MeetingRequest::new(self.attendees.iter().cloned(), self.duration)
            .with_optional_attendees(self.optional_attendees.iter().cloned())
    }
}

fn parse_range(start: &str, end: &str) -> Result<TimeRange> {
    let start = parse_minutes(start)?;
    let end = parse_minutes(end)?;
    Ok(TimeRange::from_start_end(start, end, false)?)
}

/// A slot as printed in JSON output.
#[derive(Debug, Serialize)]
pub struct SlotOutput {
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
}

impl From<&TimeRange> for SlotOutput {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: format_minutes(r.start()),
            end: format_minutes(r.end()),
            duration_minutes: r.duration(),
        }
    }
}

/// JSON output of `slots find`.
#[derive(Debug, Serialize)]
pub struct FindOutput {
    pub tier: ResolutionTier,
    pub slots: Vec<SlotOutput>,
}
