//! Data models for the Payment Allocation Engine.
//!
//! This module contains all the core data structures: wage records and
//! their statuses, payment batches and pay periods, and the allocation
//! plan types produced by an allocation run.

mod payment;
mod plan;
mod wage_record;

pub use payment::{Caller, CallerRole, PayMode, PayPeriod, PaymentBatch};
pub use plan::{
    AllocationPlan, AuditTransaction, OutstandingLine, OutstandingSummary, PaymentReceipt,
    RecordMutation, TransactionStatus,
};
pub use wage_record::{WageRecord, WageStatus};
