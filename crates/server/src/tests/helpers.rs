// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use hrdesk::ManualClock;
use hrdesk_domain::EmployeeId;
use serde_json::Value;
use std::sync::Arc;
use time::macros::datetime;
use tower::ServiceExt;

use crate::session::EMPLOYEE_ID_HEADER;
use crate::{AppState, seed};

/// Seeded ids: Hana (HR manager), Marco (manager), Sofia (supervisor),
/// Omar and Lena (employees).
pub const HANA: i64 = 1;
pub const MARCO: i64 = 2;
pub const SOFIA: i64 = 3;
pub const OMAR: i64 = 4;
pub const LENA: i64 = 5;

/// Hana's direct conversation with Sofia.
pub const DIRECT_CONVERSATION: i64 = 1;

/// Helper to create empty app state on a frozen clock.
pub fn create_test_app_state() -> (AppState, ManualClock) {
    let clock: ManualClock = ManualClock::new(datetime!(2024-01-15 09:00 UTC));
    (AppState::new(Arc::new(clock.clone())), clock)
}

/// Helper to create app state loaded with the demo data for Hana.
pub async fn create_seeded_app_state() -> (AppState, ManualClock) {
    let (app_state, clock) = create_test_app_state();
    {
        let mut directory = app_state.directory.lock().await;
        let mut ledger = app_state.leave.lock().await;
        let mut sessions = app_state.sessions.lock().await;
        seed::seed_demo_data(
            &mut directory,
            &mut ledger,
            &mut sessions,
            EmployeeId::new(HANA),
            datetime!(2024-01-15 09:00 UTC).date(),
        )
        .expect("seed demo data");
    }
    (app_state, clock)
}

/// Sends one request and returns the status with the decoded JSON body.
/// An empty body decodes as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<i64>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(EMPLOYEE_ID_HEADER, user.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
