// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};
use hrdesk::{InboundEvent, InboundMessage};
use hrdesk_domain::{ConversationId, EmployeeId, MessageKind};
use serde_json::{Value, json};
use time::{Duration, macros::datetime};

use super::helpers::{
    DIRECT_CONVERSATION, HANA, LENA, OMAR, SOFIA, create_seeded_app_state, send,
};
use crate::background::{apply_inbound, sweep_typing};
use crate::build_router;

fn reply_from_sofia(delivery_id: &str) -> InboundEvent {
    InboundEvent::Message(InboundMessage {
        delivery_id: delivery_id.to_string(),
        conversation_id: ConversationId::new(DIRECT_CONVERSATION),
        sender_id: EmployeeId::new(SOFIA),
        sender_name: String::from("Sofia Lind"),
        content: String::from("Sure, after standup."),
        kind: MessageKind::Text,
        sent_at: datetime!(2024-01-15 09:00 UTC),
    })
}

fn direct_conversation(body: &Value) -> &Value {
    body["conversations"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["conversation_id"] == DIRECT_CONVERSATION)
        .unwrap()
}

#[tokio::test]
async fn test_messaging_requires_identity() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(&app, "GET", "/conversations", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);

    let (status, _) = send(&app, "GET", "/notifications", Some(404), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivated_caller_is_unauthorized() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _) = send(&app, "DELETE", &format!("/employees/{LENA}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/conversations", Some(LENA), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_are_isolated_per_caller() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, body) = send(&app, "GET", "/conversations", Some(HANA), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conversations"].as_array().unwrap().len(), 2);

    let (status, created) = send(
        &app,
        "POST",
        "/conversations",
        Some(OMAR),
        Some(json!({"participants": [LENA]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["kind"], "direct");
    assert_eq!(created["participants"], json!([OMAR, LENA]));

    let (_, body) = send(&app, "GET", "/conversations", Some(OMAR), None).await;
    assert_eq!(body["conversations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_conversation_with_unknown_participant_is_not_found() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _) = send(
        &app,
        "POST",
        "/conversations",
        Some(OMAR),
        Some(json!({"participants": [42]})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_send_and_list_messages() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);
    let uri = format!("/conversations/{DIRECT_CONVERSATION}/messages");

    let (status, sent) = send(
        &app,
        "POST",
        &uri,
        Some(HANA),
        Some(json!({"content": "Agenda attached"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sent["sender_id"], HANA);
    assert_eq!(sent["read"], true);

    let (status, _) = send(&app, "POST", &uri, Some(HANA), Some(json!({"content": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", &uri, Some(HANA), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_conversation_is_not_found_or_rejected() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state);

    let (status, _) = send(&app, "GET", "/conversations/9/messages", Some(HANA), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/conversations/9/messages",
        Some(HANA),
        Some(json!({"content": "hello"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_inbound_delivery_is_ignored() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());

    apply_inbound(&app_state, EmployeeId::new(HANA), reply_from_sofia("d-1")).await;
    apply_inbound(&app_state, EmployeeId::new(HANA), reply_from_sofia("d-1")).await;

    let (_, body) = send(&app, "GET", "/conversations", Some(HANA), None).await;
    assert_eq!(direct_conversation(&body)["unread_count"], 1);

    let (_, notifications) = send(&app, "GET", "/notifications", Some(HANA), None).await;
    assert_eq!(notifications["unread_count"], 1);
    assert_eq!(
        notifications["notifications"][0]["title"],
        "New message from Sofia Lind"
    );
}

#[tokio::test]
async fn test_mark_read_never_goes_below_zero() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());

    apply_inbound(&app_state, EmployeeId::new(HANA), reply_from_sofia("d-7")).await;
    let (_, body) = send(
        &app,
        "GET",
        &format!("/conversations/{DIRECT_CONVERSATION}/messages"),
        Some(HANA),
        None,
    )
    .await;
    let inbound_id = body["messages"][1]["message_id"].as_i64().unwrap();
    let uri = format!("/conversations/{DIRECT_CONVERSATION}/messages/{inbound_id}/read");

    for _ in 0..2 {
        let (status, body) = send(&app, "POST", &uri, Some(HANA), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unread_count"], 0);
    }
}

#[tokio::test]
async fn test_notification_read_updates_count() {
    let (app_state, _clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());

    apply_inbound(&app_state, EmployeeId::new(HANA), reply_from_sofia("d-3")).await;
    let (_, body) = send(&app, "GET", "/notifications", Some(HANA), None).await;
    let id = body["notifications"][0]["notification_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/notifications/{id}/read"),
        Some(HANA),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unread_count"], 0);

    let (status, _) = send(&app, "POST", "/notifications/99/read", Some(HANA), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_typing_expires_after_three_seconds() {
    let (app_state, clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());
    let uri = format!("/conversations/{DIRECT_CONVERSATION}/typing");

    let (status, body) = send(&app, "POST", &uri, Some(HANA), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typing"], true);
    assert_eq!(body["expires_at"], "2024-01-15T09:00:03Z");

    clock.advance(Duration::seconds(2));
    assert!(sweep_typing(&app_state).await.is_empty());

    clock.advance(Duration::seconds(1));
    let expired = sweep_typing(&app_state).await;
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].0, EmployeeId::new(HANA));
}

#[tokio::test]
async fn test_fresh_typing_signal_extends_deadline() {
    let (app_state, clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());
    let uri = format!("/conversations/{DIRECT_CONVERSATION}/typing");

    send(&app, "POST", &uri, Some(HANA), None).await;
    clock.advance(Duration::seconds(2));
    let (_, body) = send(&app, "POST", &uri, Some(HANA), None).await;
    assert_eq!(body["expires_at"], "2024-01-15T09:00:05Z");

    clock.advance(Duration::seconds(1));
    assert!(sweep_typing(&app_state).await.is_empty());
}

#[tokio::test]
async fn test_stopped_typing_never_expires() {
    let (app_state, clock) = create_seeded_app_state().await;
    let app: Router = build_router(app_state.clone());
    let uri = format!("/conversations/{DIRECT_CONVERSATION}/typing");

    send(&app, "POST", &uri, Some(HANA), None).await;
    clock.advance(Duration::seconds(1));
    let (status, body) = send(&app, "DELETE", &uri, Some(HANA), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typing"], false);

    clock.advance(Duration::seconds(5));
    assert!(sweep_typing(&app_state).await.is_empty());
}
