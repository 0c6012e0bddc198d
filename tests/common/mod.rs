// SPDX-License-Identifier: MIT

//! Shared test helpers: an in-process mock of the shift service with
//! the same wire contract (and failure wordings) as the real one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use shiftbook::models::{Shift, ShiftStatus};
use std::sync::{Arc, Mutex};

/// Mutable server-side state, shared with the test body so tests can
/// change the remote view behind the client's back.
#[derive(Default)]
pub struct MockShiftService {
    shifts: Mutex<Vec<Shift>>,
    fail_list: Mutex<bool>,
}

impl MockShiftService {
    #[allow(dead_code)]
    pub fn get(&self, id: &str) -> Option<Shift> {
        self.shifts.lock().unwrap().iter().find(|s| s.id == id).cloned()
    }

    #[allow(dead_code)]
    pub fn set_booked(&self, id: &str, booked: bool) {
        let mut shifts = self.shifts.lock().unwrap();
        if let Some(shift) = shifts.iter_mut().find(|s| s.id == id) {
            shift.booked = booked;
        }
    }

    #[allow(dead_code)]
    pub fn remove(&self, id: &str) {
        self.shifts.lock().unwrap().retain(|s| s.id != id);
    }

    /// Make `GET /shifts` return a 500 with a non-JSON body.
    #[allow(dead_code)]
    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

async fn list_shifts(
    State(state): State<Arc<MockShiftService>>,
) -> Result<Json<Vec<Shift>>, (StatusCode, String)> {
    if *state.fail_list.lock().unwrap() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()));
    }
    Ok(Json(state.shifts.lock().unwrap().clone()))
}

async fn book_shift(
    State(state): State<Arc<MockShiftService>>,
    Path(id): Path<String>,
) -> Result<Json<Shift>, ApiError> {
    let now = Utc::now().timestamp_millis();
    let mut shifts = state.shifts.lock().unwrap();

    let (start, end) = {
        let shift = shifts
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Shift not found"))?;

        if shift.end_time < now {
            return Err(api_error(StatusCode::BAD_REQUEST, "Shift is already finished"));
        }
        if shift.start_time <= now {
            return Err(api_error(StatusCode::BAD_REQUEST, "Shift is already started"));
        }
        if shift.booked {
            return Err(api_error(StatusCode::BAD_REQUEST, "Shift is already booked"));
        }
        (shift.start_time, shift.end_time)
    };

    let overlaps = shifts
        .iter()
        .any(|other| other.booked && other.id != id && start < other.end_time && other.start_time < end);
    if overlaps {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Cannot book an overlapping shift",
        ));
    }

    let shift = shifts.iter_mut().find(|s| s.id == id).unwrap();
    shift.booked = true;
    Ok(Json(shift.clone()))
}

async fn cancel_shift(
    State(state): State<Arc<MockShiftService>>,
    Path(id): Path<String>,
) -> Result<Json<Shift>, ApiError> {
    let now = Utc::now().timestamp_millis();
    let mut shifts = state.shifts.lock().unwrap();

    let shift = shifts
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Shift not found"))?;

    if shift.start_time <= now {
        return Err(api_error(StatusCode::BAD_REQUEST, "Shift is already started"));
    }
    if !shift.booked {
        return Err(api_error(StatusCode::BAD_REQUEST, "Shift is already cancelled"));
    }

    shift.booked = false;
    Ok(Json(shift.clone()))
}

/// Spin up the mock service on an ephemeral port. Returns the base URL
/// for a `ShiftsClient` and the shared state handle.
pub async fn spawn_mock_service(seed: Vec<Shift>) -> (String, Arc<MockShiftService>) {
    init_tracing();

    let state = Arc::new(MockShiftService {
        shifts: Mutex::new(seed),
        fail_list: Mutex::new(false),
    });

    let router = Router::new()
        .route("/shifts", get(list_shifts))
        .route("/shifts/{id}/book", get(book_shift))
        .route("/shifts/{id}/cancel", get(cancel_shift))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock service");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock service");
    });

    (format!("http://{}", addr), state)
}

/// Build a shift with times given as offsets (in minutes) from now.
#[allow(dead_code)]
pub fn shift_at(id: &str, area: &str, start_in_mins: i64, end_in_mins: i64, booked: bool) -> Shift {
    let now = Utc::now().timestamp_millis();
    Shift {
        id: id.to_string(),
        area: area.to_string(),
        start_time: now + start_in_mins * 60_000,
        end_time: now + end_in_mins * 60_000,
        booked,
        status: ShiftStatus::None,
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
