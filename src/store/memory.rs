//! In-memory store implementation.
//!
//! Backs tests and examples. Keeps every table in one mutex-guarded
//! structure, records the order of persistence operations, and supports
//! per-stage failure injection so the settlement error paths can be
//! exercised.

use std::sync::Mutex;

use uuid::Uuid;

use crate::models::{AuditTransaction, PayPeriod, RecordMutation, WageRecord};

use super::{StoreError, WageStore};

#[derive(Default)]
struct Inner {
    records: Vec<WageRecord>,
    audits: Vec<(Uuid, AuditTransaction)>,
    uploads: Vec<String>,
    operations: Vec<String>,
    fail_upload: bool,
    fail_audit: bool,
    fail_mutations_after: Option<usize>,
    mutations_applied: usize,
}

/// An in-memory [`WageStore`] for tests and examples.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates a store seeded with the given wage records.
    pub fn new(records: Vec<WageRecord>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records,
                ..Inner::default()
            }),
        }
    }

    /// Makes every subsequent proof upload fail.
    pub fn fail_uploads(&self) {
        self.lock().fail_upload = true;
    }

    /// Makes every subsequent audit insert fail.
    pub fn fail_audit_inserts(&self) {
        self.lock().fail_audit = true;
    }

    /// Makes mutation application fail once `applied` mutations have
    /// succeeded.
    pub fn fail_mutations_after(&self, applied: usize) {
        self.lock().fail_mutations_after = Some(applied);
    }

    /// Returns a snapshot of all wage records.
    pub fn records(&self) -> Vec<WageRecord> {
        self.lock().records.clone()
    }

    /// Returns all inserted audit transactions.
    pub fn audits(&self) -> Vec<AuditTransaction> {
        self.lock().audits.iter().map(|(_, a)| a.clone()).collect()
    }

    /// Returns the references of all uploaded proofs.
    pub fn uploads(&self) -> Vec<String> {
        self.lock().uploads.clone()
    }

    /// Returns the persistence operations in the order they succeeded,
    /// as `fetch` / `upload` / `audit` / `mutate` entries.
    pub fn operations(&self) -> Vec<String> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }
}

impl WageStore for MemoryStore {
    async fn fetch_outstanding(
        &self,
        employee: &str,
        period: Option<&PayPeriod>,
    ) -> Result<Vec<WageRecord>, StoreError> {
        let mut inner = self.lock();
        inner.operations.push("fetch".to_string());

        let mut records: Vec<WageRecord> = inner
            .records
            .iter()
            .filter(|r| r.employee == employee)
            .filter(|r| r.is_outstanding())
            .filter(|r| period.is_none_or(|p| p.contains(r.date)))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn upload_proof(&self, file_name: &str, _bytes: &[u8]) -> Result<String, StoreError> {
        let mut inner = self.lock();
        if inner.fail_upload {
            return Err(StoreError::new("upload rejected"));
        }
        let url = format!("memory://uploads/payroll/{:04}-{}", inner.uploads.len(), file_name);
        inner.uploads.push(url.clone());
        inner.operations.push("upload".to_string());
        Ok(url)
    }

    async fn insert_audit(&self, transaction: &AuditTransaction) -> Result<Uuid, StoreError> {
        let mut inner = self.lock();
        if inner.fail_audit {
            return Err(StoreError::new("insert rejected"));
        }
        let id = Uuid::new_v4();
        inner.audits.push((id, transaction.clone()));
        inner.operations.push("audit".to_string());
        Ok(id)
    }

    async fn apply_mutation(&self, mutation: &RecordMutation) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.fail_mutations_after == Some(inner.mutations_applied) {
            return Err(StoreError::new("update rejected"));
        }

        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == mutation.record_id)
            .ok_or_else(|| StoreError::new(format!("no such record: {}", mutation.record_id)))?;
        record.paid_amount = mutation.paid_amount;
        record.status = mutation.status;

        inner.mutations_applied += 1;
        inner.operations.push("mutate".to_string());
        Ok(())
    }
}
