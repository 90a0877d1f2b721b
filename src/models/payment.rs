//! Payment batch and pay period models.
//!
//! This module contains the [`PaymentBatch`] describing one payment action,
//! the [`PayPeriod`] date window used by month-scoped payment runs, and the
//! explicit [`Caller`] context passed into settlement instead of being read
//! from ambient state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much of the outstanding balance a payment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayMode {
    /// Pay the entire outstanding remainder.
    Full,
    /// Pay a caller-specified amount, capped at the outstanding remainder.
    Partial,
}

/// A half-open date window `[start, end)` restricting a payment run.
///
/// A record dated outside the period is never touched by a scoped run, so
/// an employee can carry outstanding balances in several disjoint periods,
/// each settled independently.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let january = PayPeriod::month(2024, 1).unwrap();
/// assert!(january.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
/// assert!(!january.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first date of the period (inclusive).
    pub start: NaiveDate,
    /// The first date after the period (exclusive).
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Builds the period covering one calendar month.
    ///
    /// Returns `None` if `month` is not in `1..=12` or the dates are not
    /// representable.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self { start, end })
    }

    /// Checks whether a date falls within this period.
    ///
    /// The start is inclusive, the end exclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// The act of paying one employee: target, mode, scoping, and proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBatch {
    /// The employee being paid.
    pub employee: String,
    /// Full or partial payment.
    pub mode: PayMode,
    /// The amount to pay; only meaningful when `mode` is `partial`.
    #[serde(default)]
    pub requested_amount: Option<Decimal>,
    /// Optional date window; present for month-scoped runs.
    #[serde(default)]
    pub period: Option<PayPeriod>,
    /// Free text appended to the audit transaction description.
    #[serde(default)]
    pub note: Option<String>,
    /// Reference to the proof-of-payment attachment. Mandatory: allocation
    /// does not proceed without it.
    #[serde(default)]
    pub proof: Option<String>,
}

/// The role of the operator triggering a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerRole {
    /// Full access, including payroll.
    Admin,
    /// Bookkeeping access, including payroll.
    Bookkeeper,
    /// Worker access; submits wage records only.
    Worker,
}

/// The identity of the operator triggering a payment.
///
/// Passed explicitly into settlement rather than read from ambient global
/// state. Used for structured logging; audit rows do not carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// The operator's employee identifier/name.
    pub employee: String,
    /// The operator's role.
    pub role: CallerRole,
}
