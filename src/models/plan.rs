//! Allocation plan models.
//!
//! This module contains the types produced by an allocation run: the
//! per-record mutations, the audit transaction, the plan that bundles them,
//! the outstanding-balance summary shown before a run, and the receipt
//! returned after settlement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WageStatus;

/// Represents the review state of an audit transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Awaiting review.
    Pending,
    /// Approved; counts toward reports.
    Approved,
    /// Rejected; excluded from reports.
    Rejected,
}

/// One planned update to a wage record.
///
/// Carries the full new values rather than deltas, matching the field-wise
/// update surface of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMutation {
    /// The record to update.
    pub record_id: Uuid,
    /// The new paid amount (major units).
    pub paid_amount: Decimal,
    /// The new status.
    pub status: WageStatus,
}

/// One append-only ledger entry recording a money movement.
///
/// Produced as a side effect of a successful allocation and written before
/// any record mutation is applied, so a crash between the two leaves a
/// reconcilable trail rather than silently losing the movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTransaction {
    /// The date the payment was made.
    pub date: NaiveDate,
    /// The ledger category (configured; expense semantics).
    pub category: String,
    /// Synthesized description: employee, mode, amount, optional period and
    /// note.
    pub description: String,
    /// The amount paid (major units).
    pub amount: Decimal,
    /// The review state; allocations are recorded as approved.
    pub status: TransactionStatus,
    /// Reference to the proof-of-payment attachment.
    pub proof_url: String,
}

/// The complete output of one allocation run.
///
/// Nothing is persisted by the allocator itself; applying the plan durably
/// is the settlement layer's responsibility, in the order: proof upload,
/// audit insert, record mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// Record updates in the order they must be applied.
    pub mutations: Vec<RecordMutation>,
    /// The audit transaction to insert before any mutation.
    pub audit: AuditTransaction,
    /// The total outstanding balance before the run (major units).
    pub total_outstanding: Decimal,
    /// The amount this run allocates (major units); never exceeds
    /// `total_outstanding`.
    pub amount_allocated: Decimal,
}

/// One line of the outstanding-balance summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutstandingLine {
    /// The wage record this line describes.
    pub record_id: Uuid,
    /// The date the wage was earned.
    pub date: NaiveDate,
    /// The record's free-text label.
    pub description: String,
    /// The amount owed.
    pub wage_amount: Decimal,
    /// The amount already paid.
    pub paid_amount: Decimal,
    /// The remaining balance, never negative.
    pub remainder: Decimal,
}

/// The outstanding balance of one employee, shown before a payment run and
/// used for reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutstandingSummary {
    /// Per-record remainders, oldest first.
    pub lines: Vec<OutstandingLine>,
    /// Sum of all remainders (major units).
    pub total_outstanding: Decimal,
}

/// The confirmation returned after a successful settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// The employee that was paid.
    pub employee: String,
    /// The amount actually paid (major units).
    pub amount_paid: Decimal,
    /// How many records this run settled in full.
    pub records_paid: usize,
    /// How many records were left partially paid (0 or 1).
    pub records_partial: usize,
    /// The id of the inserted audit transaction.
    pub audit_id: Uuid,
    /// The durable reference to the uploaded proof of payment.
    pub proof_url: String,
}
