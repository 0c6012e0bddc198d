// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod shift;

pub use shift::{Shift, ShiftStatus};
