//! HTTP request handlers for the Payment Allocation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{allocate, summarize_outstanding};
use crate::models::{PayPeriod, PaymentBatch, WageRecord};

use super::request::{AllocationRequest, OutstandingRequest};
use super::response::{AllocationResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/allocate", post(allocate_handler))
        .route("/payroll/outstanding", post(outstanding_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /payroll/allocate.
///
/// Computes the allocation plan over the submitted snapshot and returns it
/// without persisting anything.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let employee = request.employee;
    let records: Vec<WageRecord> = request
        .records
        .into_iter()
        .map(|r| r.into_record(&employee))
        .collect();
    let batch = PaymentBatch {
        employee: employee.clone(),
        mode: request.mode,
        requested_amount: request.requested_amount,
        period: request.period.map(PayPeriod::from),
        note: request.note,
        proof: request.proof_url,
    };
    let value_date = request
        .value_date
        .unwrap_or_else(|| Utc::now().date_naive());

    match allocate(&records, &batch, value_date, state.config()) {
        Ok(plan) => {
            info!(
                correlation_id = %correlation_id,
                employee = %employee,
                amount_allocated = %plan.amount_allocated,
                mutations = plan.mutations.len(),
                "Allocation plan computed"
            );
            let response = AllocationResponse {
                allocation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee,
                total_outstanding: plan.total_outstanding,
                amount_allocated: plan.amount_allocated,
                mutations: plan.mutations,
                audit: plan.audit,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee = %employee,
                error = %err,
                "Allocation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /payroll/outstanding.
///
/// Returns the outstanding-balance summary for the submitted snapshot.
async fn outstanding_handler(
    State(_state): State<AppState>,
    payload: Result<Json<OutstandingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let records: Vec<WageRecord> = request
        .records
        .into_iter()
        .map(|r| r.into_record(""))
        .collect();
    let period = request.period.map(PayPeriod::from);

    let summary = summarize_outstanding(&records, period.as_ref());
    info!(
        correlation_id = %correlation_id,
        lines = summary.lines.len(),
        total = %summary.total_outstanding,
        "Outstanding summary computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}
