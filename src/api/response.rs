//! Response types for the Payment Allocation Engine API.
//!
//! This module defines the allocation response wrapper and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{AuditTransaction, RecordMutation};

/// Response body for the `/payroll/allocate` endpoint.
///
/// Wraps the computed plan with request-tracking metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// Unique identifier for this allocation preview.
    pub allocation_id: Uuid,
    /// When the plan was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the plan.
    pub engine_version: String,
    /// The employee the plan pays.
    pub employee: String,
    /// The total outstanding balance before the run.
    pub total_outstanding: Decimal,
    /// The amount the plan allocates.
    pub amount_allocated: Decimal,
    /// Record updates in apply order.
    pub mutations: Vec<RecordMutation>,
    /// The audit transaction to insert before any mutation.
    pub audit: AuditTransaction,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::NoTargetSelected => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NO_TARGET_SELECTED", error.to_string()),
            },
            PayrollError::NothingToPay => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NOTHING_TO_PAY", error.to_string()),
            },
            PayrollError::MissingProof => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_PROOF",
                    error.to_string(),
                    "Attach a proof-of-payment file and retry",
                ),
            },
            PayrollError::InvalidPartialAmount { amount } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PARTIAL_AMOUNT",
                    format!("Invalid partial payment amount: {}", amount),
                    "The partial amount must be greater than zero",
                ),
            },
            PayrollError::NoRemainingBalance => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NO_REMAINING_BALANCE", error.to_string()),
            },
            PayrollError::FetchFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "FETCH_FAILED",
                    "Failed to fetch outstanding wage records",
                    message,
                ),
            },
            PayrollError::AttachmentUploadFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "ATTACHMENT_UPLOAD_FAILED",
                    "Proof upload failed; nothing was recorded",
                    message,
                ),
            },
            PayrollError::AuditInsertFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "AUDIT_INSERT_FAILED",
                    "Audit transaction insert failed; no records were updated",
                    message,
                ),
            },
            PayrollError::MutationApplyFailed {
                record_id,
                applied,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "MUTATION_APPLY_FAILED",
                    format!(
                        "Payment partially applied: {} record update(s) succeeded before record {} failed",
                        applied, record_id
                    ),
                    message,
                ),
            },
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
