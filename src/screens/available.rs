// SPDX-License-Identifier: MIT

//! "Available shifts" screen: the full list with area filter chips,
//! book/cancel on each item in place.

use chrono::Utc;

use crate::client::ShiftsClient;
use crate::grouping::{self, AreaCount, DateGroup};
use crate::models::{Shift, ShiftStatus};
use crate::screens::FETCH_ERROR_MESSAGE;
use crate::store::ShiftStore;
use crate::workflow::{self, BookingAction};

const BOOKING_ERROR_MESSAGE: &str = "An error occurred during booking.";

/// Controller state for the available-shifts tab.
pub struct AvailableShiftsScreen {
    client: ShiftsClient,
    store: ShiftStore,
    loading: bool,
    selected_area: Option<String>,
    active_id: Option<String>,
    error_message: Option<String>,
}

impl AvailableShiftsScreen {
    pub fn new(client: ShiftsClient) -> Self {
        Self {
            client,
            store: ShiftStore::new(),
            loading: true,
            selected_area: None,
            active_id: None,
            error_message: None,
        }
    }

    /// Refetch the full list; called on every screen focus.
    ///
    /// On failure the previous collection stays visible (stale is fine)
    /// and only the banner changes.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.list_shifts().await {
            Ok(mut shifts) => {
                for shift in &mut shifts {
                    shift.status = if shift.booked {
                        ShiftStatus::Booked
                    } else {
                        ShiftStatus::None
                    };
                }
                tracing::info!(count = shifts.len(), "Fetched shifts");
                self.store.replace(shifts);
                self.error_message = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "Fetching shifts failed");
                self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Toggle the area filter: selecting the active area clears it.
    pub fn select_area(&mut self, area: &str) {
        if self.selected_area.as_deref() == Some(area) {
            self.selected_area = None;
        } else {
            self.selected_area = Some(area.to_string());
        }
    }

    /// Date-grouped view of the current collection under the area filter.
    pub fn grouped(&self) -> Vec<DateGroup> {
        grouping::group_by_date(self.store.shifts(), self.selected_area.as_deref())
    }

    /// Per-area counts over the unfiltered collection, for the chips.
    pub fn area_counts(&self) -> Vec<AreaCount> {
        grouping::area_tally(self.store.shifts())
    }

    /// Whether the book/cancel control for `shift` is enabled.
    pub fn is_actionable(&self, shift: &Shift) -> bool {
        workflow::can_act(shift, self.active_id.as_deref(), Utc::now())
    }

    /// Book or cancel one shift, depending on its `booked` flag.
    ///
    /// No-op while another call is pending or once the shift has ended.
    /// The pending marker is cleared when the call settles, on both
    /// outcomes.
    pub async fn toggle_booking(&mut self, id: &str) {
        let now = Utc::now();
        let action = match self.store.get(id) {
            Some(shift) if workflow::can_act(shift, self.active_id.as_deref(), now) => {
                BookingAction::for_shift(shift)
            }
            _ => return,
        };

        self.active_id = Some(id.to_string());
        self.error_message = None;

        let result = match action {
            BookingAction::Book => self.client.book_shift(id).await,
            BookingAction::Cancel => self.client.cancel_shift(id).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(id, ?action, "Booking call succeeded");
                workflow::apply_success(&mut self.store, id, action);
            }
            Err(err) => {
                tracing::error!(id, ?action, error = %err, "Booking call failed");
                let banner =
                    workflow::apply_failure(&mut self.store, id, &err, BOOKING_ERROR_MESSAGE);
                self.error_message = Some(banner);
            }
        }

        self.active_id = None;
    }

    pub fn shifts(&self) -> &[Shift] {
        self.store.shifts()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_area(&self) -> Option<&str> {
        self.selected_area.as_deref()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
