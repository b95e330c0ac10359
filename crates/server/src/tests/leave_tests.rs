// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};
use serde_json::json;

use super::helpers::{HANA, LENA, OMAR, SOFIA, create_seeded_app_state, send};
use crate::build_router;

#[tokio::test]
async fn test_submit_counts_inclusive_days() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(
        &app,
        "POST",
        "/leave/requests",
        None,
        Some(json!({
            "employee_id": LENA,
            "leave_type": "annual",
            "start_date": "2024-01-15",
            "end_date": "2024-01-19",
            "reason": "  Ski week  "
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_days"], 5);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["employee_name"], "Lena Park");
    assert_eq!(body["reason"], "Ski week");
    assert_eq!(body["submitted_at"], "2024-01-15T09:00:00Z");
}

#[tokio::test]
async fn test_submit_reversed_range_is_bad_request() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _body) = send(
        &app,
        "POST",
        "/leave/requests",
        None,
        Some(json!({
            "employee_id": LENA,
            "leave_type": "sick",
            "start_date": "2024-01-19",
            "end_date": "2024-01-15"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, summary) = send(&app, "GET", "/leave/summary", None, None).await;
    assert_eq!(summary["pending"], 1);
}

#[tokio::test]
async fn test_submit_for_unknown_employee_is_not_found() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _body) = send(
        &app,
        "POST",
        "/leave/requests",
        None,
        Some(json!({
            "employee_id": 77,
            "leave_type": "annual",
            "start_date": "2024-02-01",
            "end_date": "2024-02-02"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_may_not_review_leave() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(
        &app,
        "POST",
        "/leave/requests/1/approve",
        None,
        Some(json!({"reviewer_id": LENA})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_review_happens_once() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(
        &app,
        "POST",
        "/leave/requests/1/approve",
        None,
        Some(json!({"reviewer_id": SOFIA, "comments": "Enjoy"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
    assert_eq!(body["reviewed_by"], SOFIA);
    assert_eq!(body["comments"], "Enjoy");

    let (status, _body) = send(
        &app,
        "POST",
        "/leave/requests/1/reject",
        None,
        Some(json!({"reviewer_id": HANA})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, summary) = send(&app, "GET", "/leave/summary", None, None).await;
    assert_eq!(summary["pending"], 0);
    assert_eq!(summary["approved"], 1);
    assert_eq!(summary["rejected"], 0);
}

#[tokio::test]
async fn test_review_missing_request_is_not_found() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _body) = send(
        &app,
        "POST",
        "/leave/requests/9/reject",
        None,
        Some(json!({"reviewer_id": HANA})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_requests_filters_by_query() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(&app, "GET", "/leave/requests?status=pending", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let requests = body["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["employee_id"], OMAR);

    let (_, body) = send(&app, "GET", "/leave/requests?leave_type=sick", None, None).await;
    assert!(body["requests"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/leave/requests?search=haddad", None, None).await;
    assert_eq!(body["requests"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/leave/requests?status=lost", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_leave_balance_lookup() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(&app, "GET", &format!("/leave/balances/{OMAR}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balances"]["annual"], 20);
    assert_eq!(body["balances"]["maternity"], 0);

    let (status, _) = send(&app, "GET", "/leave/balances/99", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
