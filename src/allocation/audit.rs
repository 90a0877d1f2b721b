//! Audit transaction synthesis.
//!
//! Builds the append-only ledger entry recorded alongside every successful
//! allocation: the configured expense category, a description identifying
//! the employee, mode and amount (plus period and note when present), and
//! the proof-of-payment reference.

use chrono::NaiveDate;

use crate::config::AuditLabels;
use crate::models::{AuditTransaction, PayMode, PaymentBatch, TransactionStatus};

use super::money::{Cents, from_minor_units};

/// Builds the audit transaction for one allocation run.
///
/// The description reads, with the default labels:
/// `Wages somchai (paid in full)` or
/// `Wages somchai (partial payment 350.00)`, with
/// ` for 2024-01-01 to 2024-02-01` appended for period-scoped runs and
/// `, <note>` appended when a note was given.
pub fn build_audit_transaction(
    batch: &PaymentBatch,
    pay_cents: Cents,
    value_date: NaiveDate,
    proof_url: &str,
    labels: &AuditLabels,
) -> AuditTransaction {
    let amount = from_minor_units(pay_cents);

    let mode_part = match batch.mode {
        PayMode::Full => labels.paid_in_full.clone(),
        PayMode::Partial => format!("{} {}", labels.partial_payment, amount),
    };

    let mut description = format!("{} {} ({})", labels.wages, batch.employee, mode_part);
    if let Some(period) = &batch.period {
        description.push_str(&format!(" for {} to {}", period.start, period.end));
    }
    if let Some(note) = batch.note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        description.push_str(", ");
        description.push_str(note);
    }

    AuditTransaction {
        date: value_date,
        category: labels.expense_category.clone(),
        description,
        amount,
        status: TransactionStatus::Approved,
        proof_url: proof_url.to_string(),
    }
}
