//! Integration tests for the Payment Allocation Engine API.
//!
//! This test suite covers the allocation endpoint end-to-end:
//! - Full payment across multiple records
//! - Partial payment with oldest-first ordering
//! - Capping of over-sized partial requests
//! - Month-scoped runs
//! - Outstanding-balance summaries
//! - Error cases (malformed JSON, missing proof, empty snapshots)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::PayrollConfig;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(PayrollConfig::default()))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn record(id: u32, date: &str, wage: &str, paid: &str, status: &str) -> Value {
    json!({
        "id": format!("00000000-0000-0000-0000-{:012}", id),
        "date": date,
        "description": "daily work",
        "wage_amount": wage,
        "paid_amount": paid,
        "status": status
    })
}

fn allocate_body(mode: &str, records: Vec<Value>) -> Value {
    json!({
        "employee": "somchai",
        "mode": mode,
        "proof_url": "uploads/payroll/slip.jpg",
        "records": records,
        "value_date": "2024-02-05"
    })
}

// =============================================================================
// Allocation scenarios
// =============================================================================

#[tokio::test]
async fn test_full_payment_settles_both_records() {
    let records = vec![
        record(1, "2024-01-01", "300.00", "0", "approved"),
        record(2, "2024-01-02", "150.00", "0", "approved"),
    ];

    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll/allocate",
        allocate_body("full", records),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_outstanding"], "450.00");
    assert_eq!(result["amount_allocated"], "450.00");
    assert_eq!(result["audit"]["amount"], "450.00");

    let mutations = result["mutations"].as_array().unwrap();
    assert_eq!(mutations.len(), 2);
    assert_eq!(mutations[0]["paid_amount"], "300.00");
    assert_eq!(mutations[0]["status"], "paid");
    assert_eq!(mutations[1]["paid_amount"], "150.00");
    assert_eq!(mutations[1]["status"], "paid");
}

#[tokio::test]
async fn test_partial_payment_pays_oldest_first() {
    let records = vec![
        record(1, "2024-01-01", "300.00", "0", "approved"),
        record(2, "2024-01-02", "150.00", "0", "approved"),
    ];
    let mut body = allocate_body("partial", records);
    body["requested_amount"] = json!("350");

    let (status, result) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["amount_allocated"], "350.00");
    assert_eq!(result["audit"]["amount"], "350.00");

    let mutations = result["mutations"].as_array().unwrap();
    assert_eq!(mutations.len(), 2);
    assert_eq!(mutations[0]["paid_amount"], "300.00");
    assert_eq!(mutations[0]["status"], "paid");
    assert_eq!(mutations[1]["paid_amount"], "50.00");
    assert_eq!(mutations[1]["status"], "partial");
}

#[tokio::test]
async fn test_partial_request_above_total_is_capped() {
    let records = vec![record(1, "2024-01-01", "300.00", "0", "approved")];
    let mut body = allocate_body("partial", records);
    body["requested_amount"] = json!("9999.99");

    let (status, result) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["amount_allocated"], "300.00");
    let mutations = result["mutations"].as_array().unwrap();
    assert_eq!(mutations[0]["paid_amount"], "300.00");
    assert_eq!(mutations[0]["status"], "paid");
}

#[tokio::test]
async fn test_month_scoped_run_ignores_outside_records() {
    let records = vec![
        record(1, "2023-12-15", "500.00", "0", "approved"),
        record(2, "2024-01-10", "300.00", "0", "approved"),
        record(3, "2024-02-01", "400.00", "0", "approved"),
    ];
    let mut body = allocate_body("full", records);
    body["period"] = json!({ "start": "2024-01-01", "end": "2024-02-01" });

    let (status, result) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_outstanding"], "300.00");
    let mutations = result["mutations"].as_array().unwrap();
    assert_eq!(mutations.len(), 1);
    assert_eq!(
        mutations[0]["record_id"],
        "00000000-0000-0000-0000-000000000002"
    );
}

#[tokio::test]
async fn test_stale_status_is_corrected_without_spending() {
    let records = vec![
        record(1, "2024-01-01", "200.00", "200.00", "approved"),
        record(2, "2024-01-02", "150.00", "0", "approved"),
    ];

    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll/allocate",
        allocate_body("full", records),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["amount_allocated"], "150.00");

    let mutations = result["mutations"].as_array().unwrap();
    assert_eq!(mutations.len(), 2);
    assert_eq!(mutations[0]["paid_amount"], "200.00");
    assert_eq!(mutations[0]["status"], "paid");
}

#[tokio::test]
async fn test_audit_description_identifies_the_payment() {
    let records = vec![record(1, "2024-01-01", "300.00", "0", "approved")];
    let mut body = allocate_body("partial", records);
    body["requested_amount"] = json!("120.50");
    body["note"] = json!("week 1");

    let (status, result) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["audit"]["description"],
        "Wages somchai (partial payment 120.50), week 1"
    );
    assert_eq!(result["audit"]["category"], "expense");
    assert_eq!(result["audit"]["status"], "approved");
    assert_eq!(result["audit"]["date"], "2024-02-05");
    assert_eq!(result["audit"]["proof_url"], "uploads/payroll/slip.jpg");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/allocate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_employee_field_returns_400() {
    let body = json!({
        "mode": "full",
        "proof_url": "slip.jpg",
        "records": []
    });

    let (status, error) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("missing field"),
        "Expected a missing-field message, got: {}",
        error["message"]
    );
}

#[tokio::test]
async fn test_missing_proof_returns_400() {
    let records = vec![record(1, "2024-01-01", "300.00", "0", "approved")];
    let mut body = allocate_body("full", records);
    body.as_object_mut().unwrap().remove("proof_url");

    let (status, error) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_PROOF");
}

#[tokio::test]
async fn test_empty_snapshot_returns_nothing_to_pay() {
    let (status, error) = post_json(
        create_router_for_test(),
        "/payroll/allocate",
        allocate_body("full", vec![]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "NOTHING_TO_PAY");
}

#[tokio::test]
async fn test_fully_paid_snapshot_returns_no_remaining_balance() {
    let records = vec![record(1, "2024-01-01", "300.00", "300.00", "approved")];

    let (status, error) = post_json(
        create_router_for_test(),
        "/payroll/allocate",
        allocate_body("full", records),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "NO_REMAINING_BALANCE");
}

#[tokio::test]
async fn test_zero_partial_amount_returns_400() {
    let records = vec![record(1, "2024-01-01", "300.00", "0", "approved")];
    let mut body = allocate_body("partial", records);
    body["requested_amount"] = json!("0");

    let (status, error) = post_json(create_router_for_test(), "/payroll/allocate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PARTIAL_AMOUNT");
}

// =============================================================================
// Outstanding summaries
// =============================================================================

#[tokio::test]
async fn test_outstanding_summary_sums_remainders() {
    let body = json!({
        "records": [
            record(1, "2024-01-01", "300.00", "120.50", "partial"),
            record(2, "2024-01-02", "150.00", "0", "approved"),
            record(3, "2024-01-03", "100.00", "100.00", "paid")
        ]
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/outstanding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_outstanding"], "329.50");

    let lines = result["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["remainder"], "179.50");
    assert_eq!(lines[1]["remainder"], "150.00");
}

#[tokio::test]
async fn test_outstanding_summary_respects_period() {
    let body = json!({
        "records": [
            record(1, "2023-12-31", "100.00", "0", "approved"),
            record(2, "2024-01-15", "200.00", "0", "approved")
        ],
        "period": { "start": "2024-01-01", "end": "2024-02-01" }
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/outstanding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_outstanding"], "200.00");
    assert_eq!(result["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_outstanding_summary_of_empty_snapshot_is_zero() {
    let body = json!({ "records": [] });

    let (status, result) = post_json(create_router_for_test(), "/payroll/outstanding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_outstanding"], "0.00");
    assert!(result["lines"].as_array().unwrap().is_empty());
}
