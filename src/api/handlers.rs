//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_stats, analyze_work_pattern, calculate_earnings, check_overlaps,
    derive_shift_figures, overlaps_on, would_overlap,
};
use crate::models::find_workplace;
use crate::validation::{ShiftDraft, validate_shift, validate_workplace};

use super::request::{DeriveRequest, OverlapRequest, StatsRequest, ValidateWorkplaceRequest};
use super::response::{
    ApiError, ApiErrorResponse, DeriveResponse, DerivedShift, OverlapResponse, StatsResponse,
    ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/derive", post(derive_handler))
        .route("/overlaps", post(overlaps_handler))
        .route("/stats", post(stats_handler))
        .route("/validate/shift", post(validate_shift_handler))
        .route("/validate/workplace", post(validate_workplace_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Unwraps a JSON body or turns the rejection into a 400 response.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(error_response(ApiErrorResponse::bad_request(error)))
}

/// Handler for POST /shifts/derive.
///
/// Returns every derived figure for each shift, ordered by start time.
async fn derive_handler(payload: Result<Json<DeriveRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing derive request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let mut ordered: Vec<_> = request.shifts.iter().collect();
    ordered.sort_by_key(|s| (s.start_time, s.id));

    let shifts: Vec<DerivedShift> = ordered
        .into_iter()
        .map(|shift| DerivedShift {
            figures: derive_shift_figures(shift, &request.workplaces),
            audit_steps: if request.include_audit {
                calculate_earnings(shift, find_workplace(&request.workplaces, shift.workplace_id), 1)
                    .audit_steps
            } else {
                Vec::new()
            },
        })
        .collect();

    let total_working_minutes: i64 = shifts.iter().map(|s| s.figures.working_minutes).sum();
    let total_earnings = shifts
        .iter()
        .fold(Decimal::ZERO, |total, s| total.saturating_add(s.figures.earnings.total));

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        total_earnings = %total_earnings,
        duration_us = started.elapsed().as_micros(),
        "Derive completed"
    );

    json_response(
        StatusCode::OK,
        DeriveResponse {
            shifts,
            total_working_minutes,
            total_earnings,
        },
    )
}

/// Handler for POST /overlaps.
async fn overlaps_handler(payload: Result<Json<OverlapRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overlap request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let overlaps = match (&request.candidate, request.date) {
        (Some(candidate), _) => would_overlap(
            candidate,
            &request.shifts,
            &request.workplaces,
            request.excluding,
        ),
        (None, Some(date)) => {
            overlaps_on(&request.shifts, date, request.excluding, &request.workplaces)
        }
        (None, None) => {
            let shifts: Vec<_> = request
                .shifts
                .iter()
                .filter(|s| Some(s.id) != request.excluding)
                .cloned()
                .collect();
            check_overlaps(&shifts, &request.workplaces)
        }
    };

    info!(
        correlation_id = %correlation_id,
        shifts_count = request.shifts.len(),
        conflicts = overlaps.len(),
        "Overlap check completed"
    );

    json_response(StatusCode::OK, OverlapResponse { overlaps })
}

/// Handler for POST /stats.
async fn stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing stats request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let week_start = state.config().config().week_starts_on();
    let range = match (request.range, request.preset) {
        (Some(range), None) => range,
        (None, Some(preset)) => {
            let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
            preset.date_range(today, week_start)
        }
        _ => {
            warn!(
                correlation_id = %correlation_id,
                "Stats request needs exactly one of range or preset"
            );
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                "exactly one of 'range' or 'preset' must be provided",
            )));
        }
    };

    let stats = aggregate_stats(range, &request.shifts, &request.workplaces);
    let pattern = analyze_work_pattern(range, &request.shifts, &request.workplaces, week_start);

    info!(
        correlation_id = %correlation_id,
        range_start = %range.start,
        range_end = %range.end,
        total_shifts = stats.total_shifts,
        total_earnings = %stats.total_earnings,
        "Stats completed"
    );

    json_response(
        StatusCode::OK,
        StatsResponse {
            range,
            stats,
            pattern,
        },
    )
}

/// Handler for POST /validate/shift.
async fn validate_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let draft = match parse_body(correlation_id, payload) {
        Ok(draft) => draft,
        Err(response) => return response,
    };

    let response = ValidationResponse::from(validate_shift(&draft, state.config().config().limits()));
    info!(
        correlation_id = %correlation_id,
        valid = response.valid,
        "Validated shift"
    );
    json_response(StatusCode::OK, response)
}

/// Handler for POST /validate/workplace.
async fn validate_workplace_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateWorkplaceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let response = ValidationResponse::from(validate_workplace(
        &request.workplace,
        &request.existing,
        state.config().config().limits(),
    ));
    info!(
        correlation_id = %correlation_id,
        workplace_id = %request.workplace.id,
        valid = response.valid,
        "Validated workplace"
    );
    json_response(StatusCode::OK, response)
}
