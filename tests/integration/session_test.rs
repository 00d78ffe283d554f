//! Integration tests for the session gate.

mod helpers;

use std::time::Duration;

use backoffice_client::Method;
use backoffice_entity::AccountStatus;
use backoffice_state::{RouteTree, Session, SessionTrigger};

#[tokio::test]
async fn test_empty_token_store_publishes_anonymous_without_backend_call() {
    let app = helpers::TestApp::new();

    let session = app.ctx.gate.refresh().await;

    assert_eq!(session, Session::Anonymous);
    assert!(app.backend.sent().is_empty());
    assert_eq!(app.ctx.store.state().session, Session::Anonymous);
    assert_eq!(app.ctx.store.state().session_version, 1);
}

#[tokio::test]
async fn test_forbidden_and_embedded_failures_publish_anonymous() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .reply(403, r#"{"status":403,"message":"Forbidden"}"#)
        .reply(401, "")
        .reply(200, r#"{"status":403}"#)
        .reply(200, r#"{"status":401,"message":"Token expired"}"#)
        .reply(200, r#"{"status":500}"#);

    for _ in 0..5 {
        assert_eq!(app.ctx.gate.refresh().await, Session::Anonymous);
    }
    assert_eq!(app.backend.sent().len(), 5);
    assert!(app.ctx.store.state().alerts.is_empty());
}

#[tokio::test]
async fn test_transport_and_malformed_responses_publish_anonymous() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .fail()
        .reply(200, "<!doctype html>")
        .reply(200, r#"{"status":200}"#);

    for _ in 0..3 {
        assert_eq!(app.ctx.gate.refresh().await, Session::Anonymous);
    }
}

#[tokio::test]
async fn test_success_publishes_payload_fields() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .reply(200, &helpers::information("65f0c1", "lan", "3", "inactive"));

    let session = app.ctx.gate.refresh().await;
    let account = session.account().expect("account published");

    assert_eq!(account.id, "65f0c1");
    assert_eq!(account.username, "lan");
    assert_eq!(account.email, "lan@example.vn");
    assert_eq!(account.role_id, "3");
    assert_eq!(account.status, AccountStatus::Inactive);
    assert_eq!(app.ctx.store.state().session, session);

    let sent = app.backend.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "auth/information");
    assert_eq!(sent[0].token.as_deref(), Some("T"));
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let app = helpers::TestApp::with_token("T");
    let body = helpers::information("1", "an", "1", "active");
    app.backend.reply(200, &body).reply(200, &body);

    let first = app.ctx.gate.refresh().await;
    let second = app.ctx.gate.refresh().await;

    assert_eq!(first, second);
    assert!(first.is_authenticated());
}

#[tokio::test]
async fn test_startup_trigger_selects_route_tree() {
    let app = helpers::TestApp::with_token("T");
    assert_eq!(
        RouteTree::for_session(&app.ctx.store.state().session),
        RouteTree::Anonymous
    );

    app.backend
        .reply(200, &helpers::information("1", "an", "1", "active"));
    app.ctx.gate.run(SessionTrigger::Startup).await.unwrap();

    assert_eq!(
        RouteTree::for_session(&app.ctx.store.state().session),
        RouteTree::Authenticated
    );
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_refresh_latest_started_wins() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .reply_after(
            Duration::from_secs(3),
            200,
            &helpers::information("old", "old", "1", "active"),
        )
        .reply_after(
            Duration::from_secs(1),
            200,
            &helpers::information("new", "new", "1", "active"),
        );

    let gate = app.ctx.gate.clone();
    let slow = tokio::spawn(async move { gate.refresh().await });
    tokio::time::sleep(Duration::from_millis(10)).await;
    let fast = app.ctx.gate.refresh().await;
    let stale = slow.await.unwrap();

    assert_eq!(fast.account().unwrap().id, "new");
    assert_eq!(stale.account().unwrap().id, "new");
    let published = app.ctx.store.state();
    assert_eq!(published.session.account().unwrap().id, "new");
    assert_eq!(published.session_version, 1);
}
