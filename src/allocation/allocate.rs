//! The payment allocation loop.
//!
//! Distributes a payment across an employee's outstanding wage records,
//! oldest date first, producing the exact set of record mutations and the
//! audit transaction, without touching anything until the whole plan is
//! validated.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AllocationPlan, PayMode, PaymentBatch, RecordMutation, WageRecord, WageStatus};

use super::audit::build_audit_transaction;
use super::money::{clamp_non_negative, from_minor_units, to_minor_units};
use super::outstanding::{eligible_records, total_outstanding_cents};

/// Computes the allocation plan for one payment.
///
/// `records` is a snapshot of the employee's wage records; only records
/// with status `approved` or `partial` (and inside `batch.period`, when
/// set) take part. The payment is walked across them in ascending date
/// order, ties broken by record id, so repeated runs over identical input
/// produce identical plans.
///
/// Fails fast with no side effects when the preconditions do not hold:
/// a target employee must be named, at least one eligible record must
/// exist, a proof-of-payment reference must be attached, a partial amount
/// must be positive, and the resolved amount must leave something to pay.
/// A partial amount larger than the outstanding total is silently capped,
/// so over-payment is impossible by construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::allocation::allocate;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{PayMode, PaymentBatch, WageRecord, WageStatus};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let records = vec![WageRecord {
///     id: Uuid::new_v4(),
///     employee: "somchai".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     description: "daily work".to_string(),
///     wage_amount: Decimal::from_str("300.00").unwrap(),
///     paid_amount: Decimal::ZERO,
///     status: WageStatus::Approved,
/// }];
/// let batch = PaymentBatch {
///     employee: "somchai".to_string(),
///     mode: PayMode::Full,
///     requested_amount: None,
///     period: None,
///     note: None,
///     proof: Some("slip.jpg".to_string()),
/// };
///
/// let plan = allocate(
///     &records,
///     &batch,
///     NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
///     &PayrollConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(plan.amount_allocated, Decimal::from_str("300.00").unwrap());
/// assert_eq!(plan.mutations.len(), 1);
/// ```
pub fn allocate(
    records: &[WageRecord],
    batch: &PaymentBatch,
    value_date: NaiveDate,
    config: &PayrollConfig,
) -> PayrollResult<AllocationPlan> {
    if batch.employee.trim().is_empty() {
        return Err(PayrollError::NoTargetSelected);
    }

    let mut eligible = eligible_records(records, batch.period.as_ref());
    if eligible.is_empty() {
        return Err(PayrollError::NothingToPay);
    }

    let proof = batch
        .proof
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(PayrollError::MissingProof)?;

    let total_cents = total_outstanding_cents(eligible.iter().copied());

    let pay_cents = match batch.mode {
        PayMode::Full => total_cents,
        PayMode::Partial => {
            let requested = batch.requested_amount.unwrap_or(Decimal::ZERO);
            let requested_cents = to_minor_units(requested);
            if requested_cents <= 0 {
                return Err(PayrollError::InvalidPartialAmount { amount: requested });
            }
            requested_cents.min(total_cents)
        }
    };

    if total_cents == 0 || pay_cents <= 0 {
        return Err(PayrollError::NoRemainingBalance);
    }

    eligible.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let mut remaining = pay_cents;
    let mut mutations = Vec::new();

    for record in eligible {
        if remaining <= 0 {
            break;
        }

        let paid_cents = to_minor_units(record.paid_amount);
        let remainder = clamp_non_negative(to_minor_units(record.wage_amount) - paid_cents);

        if remainder <= 0 {
            // Stale-data anomaly: already covered but never marked paid.
            mutations.push(RecordMutation {
                record_id: record.id,
                paid_amount: record.paid_amount,
                status: WageStatus::Paid,
            });
            continue;
        }

        if remaining >= remainder {
            mutations.push(RecordMutation {
                record_id: record.id,
                paid_amount: from_minor_units(paid_cents + remainder),
                status: WageStatus::Paid,
            });
            remaining -= remainder;
        } else {
            mutations.push(RecordMutation {
                record_id: record.id,
                paid_amount: from_minor_units(paid_cents + remaining),
                status: WageStatus::Partial,
            });
            remaining = 0;
        }
    }

    let audit = build_audit_transaction(batch, pay_cents, value_date, proof, &config.audit);

    Ok(AllocationPlan {
        mutations,
        audit,
        total_outstanding: from_minor_units(total_cents),
        amount_allocated: from_minor_units(pay_cents),
    })
}
