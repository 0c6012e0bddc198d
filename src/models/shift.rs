// SPDX-License-Identifier: MIT

//! Shift record as served by the remote shift service, plus the
//! client-side status label derived from booking outcomes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A bookable time-boxed work slot with an area tag.
///
/// `start_time` / `end_time` are epoch milliseconds, as on the wire.
/// `status` exists only on the client; the server never sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Opaque unique identifier.
    pub id: String,
    /// Category label grouping shifts (e.g. department/location).
    pub area: String,
    /// Shift start, epoch milliseconds.
    pub start_time: i64,
    /// Shift end, epoch milliseconds. Assumed after `start_time`.
    pub end_time: i64,
    /// Whether the current user has booked this shift (server-authoritative).
    pub booked: bool,
    /// Derived UI label, never persisted server-side.
    #[serde(skip)]
    pub status: ShiftStatus,
}

impl Shift {
    pub fn start(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.start_time).unwrap_or_default()
    }

    pub fn end(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.end_time).unwrap_or_default()
    }

    /// Length of the shift. Negative if the record violates the
    /// start-before-end assumption; callers do not guard against that.
    pub fn duration(&self) -> Duration {
        Duration::milliseconds(self.end_time - self.start_time)
    }

    /// A finished shift is permanently non-actionable.
    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.end() < now
    }

    /// Booked shifts can only be cancelled from "My Shifts" before they start.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start() <= now
    }
}

/// Client-side status label shown next to a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShiftStatus {
    /// No label (the empty string in the UI).
    #[default]
    None,
    Booked,
    Error,
    Overlapping,
    Finished,
    Started,
    NotFound,
}

impl ShiftStatus {
    /// The label text rendered in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::None => "",
            ShiftStatus::Booked => "Booked",
            ShiftStatus::Error => "Error",
            ShiftStatus::Overlapping => "Overlapping",
            ShiftStatus::Finished => "Finished",
            ShiftStatus::Started => "Started",
            ShiftStatus::NotFound => "Not Found",
        }
    }

    /// Classify a server failure message into a status label.
    ///
    /// The service reports failures as free text, so this is substring and
    /// equality matching against known wordings (case-sensitive). Anything
    /// unrecognized degrades to the generic `Error` label. Brittle by
    /// construction; kept as one pure function so the policy is testable.
    pub fn from_failure_message(message: &str) -> ShiftStatus {
        if message == "Cannot book an overlapping shift" {
            ShiftStatus::Overlapping
        } else if message.contains("already booked") {
            ShiftStatus::Booked
        } else if message == "Shift is already finished" {
            ShiftStatus::Finished
        } else if message.contains("already started") {
            ShiftStatus::Started
        } else if message.contains("Shift not found") {
            ShiftStatus::NotFound
        } else {
            ShiftStatus::Error
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
