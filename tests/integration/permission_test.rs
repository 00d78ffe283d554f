//! Integration tests for permission refusals in the management screens.

mod helpers;

use backoffice_core::error::ErrorKind;
use backoffice_entity::AccountStatus;

const ACCOUNTS: &str = r#"{"status":200,"data":{"content":[
    {"id":1,"username":"an","email":"an@example.vn","status":"active","roleId":1}
],"totalElements":1}}"#;

#[tokio::test]
async fn test_forbidden_list_fetch_alerts_once_and_keeps_empty_table() {
    let app = helpers::TestApp::with_token("T");
    app.backend.reply(403, "");
    let mut table = app.ctx.account_table();

    assert!(!table.fetch().await);

    assert!(table.view().rows().is_empty());
    assert_eq!(
        app.alert_descriptions(),
        vec!["Bạn không đủ quyền để xem danh sách tài khoản."]
    );
}

#[tokio::test]
async fn test_forbidden_refetch_keeps_previous_rows() {
    let app = helpers::TestApp::with_token("T");
    app.backend
        .reply(200, ACCOUNTS)
        .reply(200, r#"{"status":403,"message":"Access denied"}"#);
    let mut table = app.ctx.account_table();
    assert!(table.fetch().await);

    assert!(!table.fetch().await);

    assert_eq!(table.view().rows().len(), 1);
    assert_eq!(table.view().rows()[0].username, "an");
    assert_eq!(app.ctx.store.state().alerts.len(), 1);
}

#[tokio::test]
async fn test_forbidden_status_toggle_leaves_row() {
    let app = helpers::TestApp::with_token("T");
    app.backend.reply(200, ACCOUNTS).reply(403, "");
    let mut table = app.ctx.account_table();
    table.fetch().await;

    assert!(!table.toggle_status("1").await);

    assert_eq!(table.view().rows()[0].status, AccountStatus::Active);
    assert_eq!(
        app.alert_descriptions(),
        vec!["Bạn không đủ quyền để thay đổi trạng thái tài khoản này."]
    );
}

#[tokio::test]
async fn test_forbidden_product_operations_use_their_messages() {
    let app = helpers::TestApp::with_token("T");
    app.backend.reply(403, "").reply(403, "");
    let mut products = app.ctx.product_table();

    assert!(!products.delete("p1").await);
    assert!(
        !products
            .create(&backoffice_entity::NewProduct {
                name: "Bánh mì".into(),
                description: String::new(),
                price: 20000.0,
                quantity: 5,
            })
            .await
    );

    assert_eq!(
        app.alert_descriptions(),
        vec![
            "Bạn không đủ quyền để xóa sản phẩm này.",
            "Bạn không đủ quyền để tạo sản phẩm.",
        ]
    );
}

#[tokio::test]
async fn test_failed_update_form_load_returns_to_list() {
    let app = helpers::TestApp::with_token("T");
    app.backend.reply(403, "").fail();
    let accounts = app.ctx.account_table();

    assert!(accounts.load("1").await.is_none());
    assert!(accounts.load("1").await.is_none());

    assert_eq!(
        app.alert_descriptions(),
        vec![
            "Bạn không đủ quyền để xem chi tiết tài khoản này.",
            "Failed to load account details",
        ]
    );
}

#[tokio::test]
async fn test_service_error_classifies_forbidden() {
    let app = helpers::TestApp::with_token("T");
    app.backend.reply(200, r#"{"status":403}"#);

    let err = app.ctx.products.get("p1").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authorization);
    assert!(err.is_forbidden());
    assert!(err.message.contains("insufficient permission"));
}
