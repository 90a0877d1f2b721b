//! HTTP API for the Payment Allocation Engine.
//!
//! Exposes the pure computation over a submitted snapshot: allocation
//! plan previews and outstanding-balance summaries. Persistence stays on
//! the caller's side of this surface.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, OutstandingRequest, PayPeriodRequest, WageRecordRequest};
pub use response::{AllocationResponse, ApiError, ApiErrorResponse};
pub use state::AppState;
