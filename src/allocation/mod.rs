//! Allocation logic for the Payment Allocation Engine.
//!
//! This module contains the integer-cent money helpers, the
//! outstanding-balance aggregation, the oldest-first allocation loop, and
//! the audit transaction synthesis.

mod allocate;
mod audit;
mod money;
mod outstanding;

pub use allocate::allocate;
pub use audit::build_audit_transaction;
pub use money::{Cents, clamp_non_negative, from_minor_units, to_minor_units};
pub use outstanding::{record_remainder_cents, summarize_outstanding, total_outstanding_cents};
