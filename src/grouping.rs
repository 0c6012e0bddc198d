// SPDX-License-Identifier: MIT

//! Pure presentation transforms: area filtering, date grouping, and the
//! per-group aggregates shown on the "My Shifts" screen.
//!
//! These run on every render over tens of items, so nothing here is
//! memoized.

use chrono::NaiveDate;

use crate::models::Shift;
use crate::time_utils::{calendar_date, format_date_label};

/// One date section of the rendered list.
#[derive(Debug, Clone)]
pub struct DateGroup {
    /// UTC calendar date shared by every shift in the group.
    pub date: NaiveDate,
    /// Shifts on that date, ascending by start time.
    pub shifts: Vec<Shift>,
}

/// Whole hours and leftover minutes, for the "7h 30min" header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeTime {
    pub hours: i64,
    pub minutes: i64,
}

/// Shift count for one distinct area, for the filter chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCount {
    pub area: String,
    pub count: usize,
}

impl DateGroup {
    pub fn count(&self) -> usize {
        self.shifts.len()
    }

    /// Section header text: "Today" or the long date form.
    pub fn label(&self, today: NaiveDate) -> String {
        format_date_label(self.date, today)
    }

    /// Total booked time across the group: sum of per-shift durations,
    /// floored to whole minutes before splitting into hours/minutes.
    pub fn cumulative_time(&self) -> CumulativeTime {
        let total_millis: i64 = self
            .shifts
            .iter()
            .map(|s| s.end_time - s.start_time)
            .sum();

        let total_minutes = total_millis / (1000 * 60);
        CumulativeTime {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

/// Filter by area, sort ascending by start time, and group by calendar
/// date. `None` area filter is the identity. Group order follows the
/// first occurrence of each date in the sorted sequence; the stable sort
/// keeps equal start times in input order.
pub fn group_by_date(shifts: &[Shift], area_filter: Option<&str>) -> Vec<DateGroup> {
    let mut selected: Vec<Shift> = shifts
        .iter()
        .filter(|s| area_filter.map_or(true, |area| s.area == area))
        .cloned()
        .collect();
    selected.sort_by_key(|s| s.start_time);

    let mut groups: Vec<DateGroup> = Vec::new();
    for shift in selected {
        let date = calendar_date(shift.start_time);
        match groups.last_mut() {
            Some(group) if group.date == date => group.shifts.push(shift),
            _ => groups.push(DateGroup {
                date,
                shifts: vec![shift],
            }),
        }
    }
    groups
}

/// Count shifts per distinct area, in first-occurrence order, over the
/// unfiltered collection.
pub fn area_tally(shifts: &[Shift]) -> Vec<AreaCount> {
    let mut tally: Vec<AreaCount> = Vec::new();
    for shift in shifts {
        match tally.iter_mut().find(|entry| entry.area == shift.area) {
            Some(entry) => entry.count += 1,
            None => tally.push(AreaCount {
                area: shift.area.clone(),
                count: 1,
            }),
        }
    }
    tally
}
