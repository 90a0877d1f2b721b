//! Error types for the Payment Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payment allocation and
//! settlement.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Payment Allocation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::MissingProof;
/// assert_eq!(error.to_string(), "Proof of payment must be attached before paying");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No employee was selected as the payment target.
    #[error("No employee selected for payment")]
    NoTargetSelected,

    /// The employee has no outstanding wage records to pay.
    #[error("No approved or partially paid wage records to pay")]
    NothingToPay,

    /// No proof-of-payment attachment was provided.
    #[error("Proof of payment must be attached before paying")]
    MissingProof,

    /// The requested partial payment amount was zero or negative.
    #[error("Invalid partial payment amount: {amount}")]
    InvalidPartialAmount {
        /// The amount that was requested.
        amount: Decimal,
    },

    /// The outstanding balance is zero, so there is nothing to allocate.
    #[error("No remaining balance to pay")]
    NoRemainingBalance,

    /// Reading the outstanding wage records from the store failed.
    #[error("Failed to fetch outstanding wage records: {message}")]
    FetchFailed {
        /// A description of the store failure.
        message: String,
    },

    /// Uploading the proof-of-payment attachment failed. Nothing was
    /// persisted; the whole run may be retried.
    #[error("Proof upload failed: {message}")]
    AttachmentUploadFailed {
        /// A description of the upload failure.
        message: String,
    },

    /// Inserting the audit transaction failed. No record mutations were
    /// attempted; the whole run may be retried.
    #[error("Audit transaction insert failed: {message}")]
    AuditInsertFailed {
        /// A description of the insert failure.
        message: String,
    },

    /// A record mutation failed after the audit transaction was written.
    /// Mutations applied before the failure remain in place; manual
    /// reconciliation against the audit row is required.
    #[error("Failed to update wage record {record_id} ({applied} update(s) already applied): {message}")]
    MutationApplyFailed {
        /// The record whose update failed.
        record_id: Uuid,
        /// How many mutations had already been applied when the failure hit.
        applied: usize,
        /// A description of the update failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
