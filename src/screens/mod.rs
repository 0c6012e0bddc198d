// SPDX-License-Identifier: MIT

//! Screen controllers: one per tab, each owning its own store and
//! request-scoped state. No state is shared between them; both refetch
//! the list on every focus.

pub mod available;
pub mod my_shifts;

pub use available::AvailableShiftsScreen;
pub use my_shifts::MyShiftsScreen;

/// Banner text when the list fetch fails.
pub(crate) const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching shifts.";
