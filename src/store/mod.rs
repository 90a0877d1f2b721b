//! The persistence boundary and settlement flow.
//!
//! The engine itself is a pure computation; everything durable goes
//! through the [`WageStore`] trait, which maps onto the hosted data and
//! storage APIs. [`settle`] drives one payment end-to-end in the mandated
//! order: proof upload, audit insert, record mutations.

mod memory;
mod settle;

pub use memory::MemoryStore;
pub use settle::{PaymentRequest, settle};

use thiserror::Error;
use uuid::Uuid;

use crate::models::{AuditTransaction, PayPeriod, RecordMutation, WageRecord};

/// A raw failure from the backing store.
///
/// Store implementations report what went wrong; classifying the failure
/// by settlement stage is [`settle`]'s job.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    /// A description of the failure.
    pub message: String,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The abstract persistence surface for payment settlement.
///
/// Maps onto the hosted backend: a relational table of wage records, an
/// append-only transactions table, and binary object storage for proof
/// attachments.
#[allow(async_fn_in_trait)]
pub trait WageStore {
    /// Returns the employee's records with status `approved` or `partial`,
    /// optionally restricted to a date window, ordered oldest first.
    async fn fetch_outstanding(
        &self,
        employee: &str,
        period: Option<&PayPeriod>,
    ) -> Result<Vec<WageRecord>, StoreError>;

    /// Stores a proof-of-payment attachment and returns a durable
    /// reference to it.
    async fn upload_proof(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;

    /// Appends one audit transaction and returns its id.
    async fn insert_audit(&self, transaction: &AuditTransaction) -> Result<Uuid, StoreError>;

    /// Applies one planned record update.
    async fn apply_mutation(&self, mutation: &RecordMutation) -> Result<(), StoreError>;
}
