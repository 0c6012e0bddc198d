// SPDX-License-Identifier: MIT

//! Shiftbook: client library for browsing and booking work shifts.
//!
//! Talks to a remote shift service over HTTP and drives the two screens
//! of the app — available shifts and booked ("my") shifts — as headless
//! controllers that any renderer can sit on top of.

pub mod client;
pub mod config;
pub mod error;
pub mod grouping;
pub mod models;
pub mod screens;
pub mod store;
pub mod time_utils;
pub mod workflow;

pub use client::ShiftsClient;
pub use config::Config;
pub use error::AppError;
pub use models::{Shift, ShiftStatus};
pub use screens::{AvailableShiftsScreen, MyShiftsScreen};
pub use store::ShiftStore;
