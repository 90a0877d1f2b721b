//! Configuration for the Payment Allocation Engine.
//!
//! The engine's only tunables are the wording of the synthesized audit
//! rows: the ledger category name and the description labels. They load
//! from a YAML file and fall back to English defaults when no file is
//! given.

mod loader;
mod types;

pub use types::{AuditLabels, PayrollConfig};
