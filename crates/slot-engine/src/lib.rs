//! # slot-engine
//!
//! Single-day meeting slot resolution for calendars.
//!
//! Given the day's events (each naming the attendees it keeps busy) and a
//! meeting request (duration, mandatory attendees, optional attendees), the
//! resolver returns every range of the day in which the meeting fits. All
//! mandatory attendees are always free in the returned ranges; optional
//! attendees are accommodated as far as possible.
//!
//! Times are minutes from midnight. Everything here is pure and synchronous.
//!
//! ## Modules
//!
//! - [`range`] -- `TimeRange` value type and day-boundary constants
//! - [`event`] -- `Event`, a busy period tagged with its attendees
//! - [`request`] -- `MeetingRequest`, the duration and attendee lists
//! - [`gaps`] -- Relevance filtering and free-gap scanning
//! - [`resolver`] -- The full mandatory/optional resolution policy
//! - [`clock`] -- `HH:MM` parsing and formatting
//! - [`error`] -- Error types

mod availability;
pub mod clock;
pub mod error;
pub mod event;
pub mod gaps;
pub mod range;
pub mod request;
pub mod resolver;

pub use error::SlotError;
pub use event::Event;
pub use gaps::{find_gaps, relevant_events};
pub use range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
pub use request::MeetingRequest;
pub use resolver::{find_meeting_times, resolve, Resolution, ResolutionTier};
