// SPDX-License-Identifier: MIT

//! "My shifts" screen: booked shifts only, grouped by date with count
//! and cumulative hours per group. Cancelling removes the item from the
//! visible list.

use chrono::Utc;

use crate::client::ShiftsClient;
use crate::grouping::{self, DateGroup};
use crate::models::Shift;
use crate::screens::FETCH_ERROR_MESSAGE;
use crate::store::ShiftStore;
use crate::workflow;

const CANCEL_ERROR_MESSAGE: &str = "An error occurred during cancellation.";

/// Controller state for the my-shifts tab.
pub struct MyShiftsScreen {
    client: ShiftsClient,
    store: ShiftStore,
    loading: bool,
    active_id: Option<String>,
    error_message: Option<String>,
}

impl MyShiftsScreen {
    pub fn new(client: ShiftsClient) -> Self {
        Self {
            client,
            store: ShiftStore::new(),
            loading: true,
            active_id: None,
            error_message: None,
        }
    }

    /// Refetch and keep only booked shifts; called on every focus.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.list_shifts().await {
            Ok(shifts) => {
                let booked: Vec<Shift> = shifts.into_iter().filter(|s| s.booked).collect();
                tracing::info!(count = booked.len(), "Fetched booked shifts");
                self.store.replace(booked);
                self.error_message = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "Fetching shifts failed");
                self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Date-grouped view; per-group count and hours come from
    /// [`DateGroup::count`] and [`DateGroup::cumulative_time`].
    pub fn grouped(&self) -> Vec<DateGroup> {
        grouping::group_by_date(self.store.shifts(), None)
    }

    /// A booked shift can be cancelled until it starts, and only while
    /// no other call is pending.
    pub fn is_cancelable(&self, shift: &Shift) -> bool {
        let now = Utc::now();
        !shift.has_started(now) && self.active_id.is_none()
    }

    /// Cancel one booked shift. On success the item disappears from
    /// this screen; on failure only the banner is set (this screen has
    /// no per-item error label). The pending marker clears on both
    /// outcomes.
    pub async fn cancel(&mut self, id: &str) {
        match self.store.get(id) {
            Some(shift) if self.is_cancelable(shift) => {}
            _ => return,
        }

        self.active_id = Some(id.to_string());
        self.error_message = None;

        match self.client.cancel_shift(id).await {
            Ok(()) => {
                tracing::info!(id, "Cancellation succeeded");
                self.store.remove(id);
            }
            Err(err) => {
                tracing::error!(id, error = %err, "Cancellation failed");
                self.error_message = Some(workflow::banner_message(&err, CANCEL_ERROR_MESSAGE));
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

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
