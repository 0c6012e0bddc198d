// SPDX-License-Identifier: MIT

//! In-memory shift collection for one screen visit.
//!
//! Populated wholesale on each fetch, mutated in place by id after a
//! booking or cancellation settles. Lives only as long as the screen.

use crate::models::Shift;

/// Ordered collection of shifts, keyed by unique `id`.
#[derive(Debug, Default, Clone)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection (fetch result).
    pub fn replace(&mut self, shifts: Vec<Shift>) {
        self.shifts = shifts;
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| s.id == id)
    }

    /// Remove one shift (successful cancel on "My Shifts").
    pub fn remove(&mut self, id: &str) -> Option<Shift> {
        let idx = self.shifts.iter().position(|s| s.id == id)?;
        Some(self.shifts.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}
