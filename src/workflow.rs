// SPDX-License-Identifier: MIT

//! Booking workflow: per-item state transitions for book/cancel calls.
//!
//! Each item moves `Idle -> Pending -> {Success, Failed}`. A screen
//! tracks at most one pending item at a time via its `active_id`; the
//! flag is advisory (it drives control disablement) and also blocks
//! actions on other items while a call is in flight.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{Shift, ShiftStatus};
use crate::store::ShiftStore;

/// Which remote call a trigger maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Book,
    Cancel,
}

impl BookingAction {
    /// Booked shifts get cancelled, unbooked ones get booked.
    pub fn for_shift(shift: &Shift) -> Self {
        if shift.booked {
            BookingAction::Cancel
        } else {
            BookingAction::Book
        }
    }
}

/// Whether a trigger on `shift` may start a call right now.
///
/// False once the shift's end time has passed (permanently
/// non-actionable), and while any call on this screen is pending.
pub fn can_act(shift: &Shift, active_id: Option<&str>, now: DateTime<Utc>) -> bool {
    !shift.is_finished(now) && active_id.is_none()
}

/// Reconcile a successful call into the store: flip the booked flag and
/// set the matching status label.
pub fn apply_success(store: &mut ShiftStore, id: &str, action: BookingAction) {
    if let Some(shift) = store.get_mut(id) {
        match action {
            BookingAction::Book => {
                shift.booked = true;
                shift.status = ShiftStatus::Booked;
            }
            BookingAction::Cancel => {
                shift.booked = false;
                shift.status = ShiftStatus::None;
            }
        }
    }
}

/// Reconcile a failed call: classify the server message into the item's
/// status label and return the banner text to show.
pub fn apply_failure(store: &mut ShiftStore, id: &str, err: &AppError, fallback: &str) -> String {
    let status = match err.api_message() {
        Some(message) => ShiftStatus::from_failure_message(message),
        None => ShiftStatus::Error,
    };

    if let Some(shift) = store.get_mut(id) {
        shift.status = status;
    }

    banner_message(err, fallback)
}

/// Banner text for a failure: the server's message verbatim when there
/// is one, otherwise the screen's fallback wording.
pub fn banner_message(err: &AppError, fallback: &str) -> String {
    match err.api_message() {
        Some(message) => message.to_string(),
        None => fallback.to_string(),
    }
}
