//! Wage record model and related types.
//!
//! This module defines the WageRecord struct and WageStatus enum for
//! representing one employee's earnings entry for one work date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the lifecycle state of a wage record.
///
/// A record is created `pending` by the worker-submission flow, moved to
/// `approved` or `rejected` by a reviewer, and moved to `partial` or
/// `paid` by payment allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageStatus {
    /// Submitted by the worker, awaiting review.
    Pending,
    /// Approved by a reviewer, eligible for payment.
    Approved,
    /// Partially paid; some balance remains outstanding.
    Partial,
    /// Fully paid; `paid_amount` equals `wage_amount`.
    Paid,
    /// Rejected by a reviewer; never paid.
    Rejected,
}

impl WageStatus {
    /// Returns true if a record in this status is eligible for payment
    /// allocation.
    ///
    /// Only `approved` and `partial` records carry an outstanding balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::WageStatus;
    ///
    /// assert!(WageStatus::Approved.is_outstanding());
    /// assert!(WageStatus::Partial.is_outstanding());
    /// assert!(!WageStatus::Paid.is_outstanding());
    /// assert!(!WageStatus::Pending.is_outstanding());
    /// ```
    pub fn is_outstanding(self) -> bool {
        matches!(self, WageStatus::Approved | WageStatus::Partial)
    }
}

/// Represents one employee's earnings entry for one work date.
///
/// Invariant: `0 <= paid_amount <= wage_amount`. `wage_amount` is fixed at
/// creation; `paid_amount` only ever grows, driven by allocation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageRecord {
    /// Unique identifier, assigned by the store on creation.
    pub id: Uuid,
    /// Identifier/name of the earner.
    pub employee: String,
    /// The calendar date the wage was earned.
    pub date: NaiveDate,
    /// Free-text label (e.g., "daily work", "overtime").
    #[serde(default)]
    pub description: String,
    /// The amount owed for this record, fixed at creation.
    pub wage_amount: Decimal,
    /// The amount already paid against this record.
    pub paid_amount: Decimal,
    /// The lifecycle state of this record.
    pub status: WageStatus,
}

impl WageRecord {
    /// Returns true if this record is eligible for payment allocation.
    pub fn is_outstanding(&self) -> bool {
        self.status.is_outstanding()
    }
}
