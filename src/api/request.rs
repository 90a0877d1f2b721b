//! Request types for the Payment Allocation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/allocate` and `/payroll/outstanding` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PayMode, PayPeriod, WageRecord, WageStatus};

/// Request body for the `/payroll/allocate` endpoint.
///
/// Carries the payment parameters plus the outstanding-records snapshot
/// the plan is computed over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The employee being paid.
    pub employee: String,
    /// Full or partial payment.
    pub mode: PayMode,
    /// The amount to pay; required when `mode` is `partial`.
    #[serde(default)]
    pub requested_amount: Option<Decimal>,
    /// Optional date window for month-scoped runs.
    #[serde(default)]
    pub period: Option<PayPeriodRequest>,
    /// Free text appended to the audit description.
    #[serde(default)]
    pub note: Option<String>,
    /// Reference to the already-uploaded proof of payment.
    #[serde(default)]
    pub proof_url: Option<String>,
    /// The wage records to allocate over.
    pub records: Vec<WageRecordRequest>,
    /// The date recorded on the audit transaction; defaults to today.
    #[serde(default)]
    pub value_date: Option<NaiveDate>,
}

/// Request body for the `/payroll/outstanding` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutstandingRequest {
    /// The wage records to summarize.
    pub records: Vec<WageRecordRequest>,
    /// Optional date window restricting the summary.
    #[serde(default)]
    pub period: Option<PayPeriodRequest>,
}

/// Pay period information in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The first date of the period (inclusive).
    pub start: NaiveDate,
    /// The first date after the period (exclusive).
    pub end: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(request: PayPeriodRequest) -> Self {
        PayPeriod {
            start: request.start,
            end: request.end,
        }
    }
}

/// Wage record information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageRecordRequest {
    /// The record's store-assigned id.
    pub id: Uuid,
    /// The date the wage was earned.
    pub date: NaiveDate,
    /// Free-text label.
    #[serde(default)]
    pub description: String,
    /// The amount owed.
    pub wage_amount: Decimal,
    /// The amount already paid.
    #[serde(default)]
    pub paid_amount: Decimal,
    /// The record's lifecycle state.
    pub status: WageStatus,
}

impl WageRecordRequest {
    /// Converts into the domain record, attaching the employee the
    /// snapshot belongs to.
    pub fn into_record(self, employee: &str) -> WageRecord {
        WageRecord {
            id: self.id,
            employee: employee.to_string(),
            date: self.date,
            description: self.description,
            wage_amount: self.wage_amount,
            paid_amount: self.paid_amount,
            status: self.status,
        }
    }
}
