//! The end-to-end settlement flow.
//!
//! Takes one payment request from input validation through plan
//! computation to persistence, applying the plan in the mandated order:
//! proof upload, audit insert, then record mutations. The audit row goes
//! in before any mutation so a crash between the two leaves a
//! reconcilable trail. There is no rollback: a mutation failure after the
//! audit insert is reported as a partial success carrying how many
//! updates already landed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::allocation::allocate;
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Caller, PayMode, PayPeriod, PaymentBatch, PaymentReceipt, WageStatus};

use super::WageStore;

/// One payment action against the store.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    /// The employee to pay.
    pub employee: String,
    /// Full or partial payment.
    pub mode: PayMode,
    /// The amount to pay; only meaningful when `mode` is `partial`.
    pub requested_amount: Option<Decimal>,
    /// Optional date window for month-scoped runs.
    pub period: Option<PayPeriod>,
    /// Free text appended to the audit description.
    pub note: Option<String>,
    /// File name of the proof-of-payment attachment.
    pub proof_file_name: String,
    /// Content of the proof-of-payment attachment.
    pub proof_bytes: Vec<u8>,
    /// The date recorded on the audit transaction.
    pub value_date: NaiveDate,
}

/// Runs one payment end-to-end: fetch a fresh snapshot, compute the plan,
/// upload the proof, insert the audit row, apply the mutations.
///
/// Precondition failures surface before any write. `AttachmentUploadFailed`
/// and `AuditInsertFailed` abort with nothing money-moving persisted, so
/// the whole run may be retried. `MutationApplyFailed` means the audit row
/// exists and `applied` mutations landed; that run needs manual
/// reconciliation, not a blind retry.
pub async fn settle<S: WageStore>(
    store: &S,
    caller: &Caller,
    request: &PaymentRequest,
    config: &PayrollConfig,
) -> PayrollResult<PaymentReceipt> {
    if request.employee.trim().is_empty() {
        return Err(PayrollError::NoTargetSelected);
    }
    if request.proof_file_name.trim().is_empty() || request.proof_bytes.is_empty() {
        return Err(PayrollError::MissingProof);
    }

    info!(
        caller = %caller.employee,
        employee = %request.employee,
        mode = ?request.mode,
        scoped = request.period.is_some(),
        "starting payment settlement"
    );

    let records = store
        .fetch_outstanding(&request.employee, request.period.as_ref())
        .await
        .map_err(|e| PayrollError::FetchFailed {
            message: e.to_string(),
        })?;

    let batch = PaymentBatch {
        employee: request.employee.clone(),
        mode: request.mode,
        requested_amount: request.requested_amount,
        period: request.period,
        note: request.note.clone(),
        proof: Some(request.proof_file_name.clone()),
    };
    let mut plan = allocate(&records, &batch, request.value_date, config)?;

    let proof_url = store
        .upload_proof(&request.proof_file_name, &request.proof_bytes)
        .await
        .map_err(|e| {
            warn!(employee = %request.employee, error = %e, "proof upload failed");
            PayrollError::AttachmentUploadFailed {
                message: e.to_string(),
            }
        })?;
    plan.audit.proof_url = proof_url.clone();

    let audit_id = store.insert_audit(&plan.audit).await.map_err(|e| {
        warn!(employee = %request.employee, error = %e, "audit insert failed");
        PayrollError::AuditInsertFailed {
            message: e.to_string(),
        }
    })?;

    let mut records_paid = 0;
    let mut records_partial = 0;
    for (applied, mutation) in plan.mutations.iter().enumerate() {
        store.apply_mutation(mutation).await.map_err(|e| {
            warn!(
                employee = %request.employee,
                record_id = %mutation.record_id,
                applied,
                error = %e,
                "record update failed after audit insert; manual reconciliation required"
            );
            PayrollError::MutationApplyFailed {
                record_id: mutation.record_id,
                applied,
                message: e.to_string(),
            }
        })?;

        match mutation.status {
            WageStatus::Paid => records_paid += 1,
            WageStatus::Partial => records_partial += 1,
            _ => {}
        }
    }

    info!(
        employee = %request.employee,
        amount = %plan.amount_allocated,
        records_paid,
        records_partial,
        "payment settled"
    );

    Ok(PaymentReceipt {
        employee: request.employee.clone(),
        amount_paid: plan.amount_allocated,
        records_paid,
        records_partial,
        audit_id,
        proof_url,
    })
}
