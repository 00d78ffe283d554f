//! Integration tests for the login and logout flow.

mod helpers;

use std::time::Duration;

use backoffice_client::{FileTokenStore, Method, TokenStore};
use backoffice_entity::Credentials;
use backoffice_state::session::{LOGIN_FAILED_DESCRIPTION, LOGIN_FAILED_MESSAGE};
use backoffice_state::{Layout, Route, RouteTree, SessionTrigger};

#[tokio::test]
async fn test_login_success_stores_token_and_switches_tree() {
    let app = helpers::TestApp::new();
    app.backend
        .reply(200, &helpers::login_ok("T"))
        .reply(200, &helpers::information("1", "u", "1", "active"));

    let before = RouteTree::for_session(&app.ctx.store.state().session);
    assert_eq!(before.resolve("/account"), Route::Login);

    let session = app
        .ctx
        .gate
        .run(SessionTrigger::Login(Credentials::new("u", "p")))
        .await
        .expect("login succeeds");

    assert_eq!(app.token().as_deref(), Some("T"));
    assert_eq!(session.account().unwrap().username, "u");

    let after = RouteTree::for_session(&app.ctx.store.state().session);
    assert_eq!(after.layout(), Layout::Shell);
    assert_eq!(after.resolve("/account"), Route::Accounts);

    let sent = app.backend.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "auth/login");
    assert_eq!(
        sent[0].body,
        Some(serde_json::json!({ "username": "u", "password": "p" }))
    );
    assert_eq!(sent[1].token.as_deref(), Some("T"));
    assert!(app.ctx.store.state().alerts.is_empty());
}

#[tokio::test]
async fn test_login_embedded_failure_alerts_and_stores_nothing() {
    let app = helpers::TestApp::new();
    app.backend.reply(200, r#"{"status":401}"#);

    let result = app
        .ctx
        .gate
        .run(SessionTrigger::Login(Credentials::new("u", "wrong")))
        .await;

    assert!(result.is_err());
    assert_eq!(app.token(), None);
    assert_eq!(app.alert_messages(), vec![LOGIN_FAILED_MESSAGE]);
    assert_eq!(app.alert_descriptions(), vec![LOGIN_FAILED_DESCRIPTION]);
    assert!(!app.ctx.store.is_logged_in());
}

#[tokio::test]
async fn test_login_http_and_network_failures_alert_once_each() {
    let app = helpers::TestApp::new();
    app.backend.reply(500, "").fail();

    for _ in 0..2 {
        let result = app.ctx.gate.login(&Credentials::new("u", "p")).await;
        assert!(result.is_err());
    }
    assert_eq!(app.alert_messages(), vec!["Thất bại", "Thất bại"]);
    assert_eq!(app.token(), None);
}

#[tokio::test]
async fn test_empty_credentials_never_reach_backend() {
    let app = helpers::TestApp::new();

    let result = app.ctx.gate.login(&Credentials::new("", "")).await;

    assert!(result.is_err());
    assert!(app.backend.sent().is_empty());
    assert_eq!(app.alert_messages(), vec!["Thất bại"]);
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .reply(200, &helpers::information("1", "u", "1", "active"));
    app.ctx.gate.run(SessionTrigger::Startup).await.unwrap();
    assert!(app.ctx.store.is_logged_in());

    app.ctx.gate.run(SessionTrigger::Logout).await.unwrap();

    assert_eq!(app.token(), None);
    let tree = RouteTree::for_session(&app.ctx.store.state().session);
    assert_eq!(tree.resolve("/product"), Route::Login);
    assert!(tree.menu().is_empty());
}

#[test]
fn test_file_token_store_survives_restart_and_expires() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileTokenStore::new(&path, "token");
    store.write("T", Duration::from_secs(3600)).unwrap();

    let reopened = FileTokenStore::new(&path, "token");
    assert_eq!(reopened.read().unwrap().as_deref(), Some("T"));

    reopened.write("T", Duration::ZERO).unwrap();
    assert_eq!(reopened.read().unwrap(), None);

    reopened.clear().unwrap();
    assert!(!path.exists());
}
