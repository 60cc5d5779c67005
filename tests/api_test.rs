use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use library_inventory::adapters::memory::{
    InMemoryBookStore, InMemoryMemberValidator, LoggingNotifier, NotificationKind,
};
use library_inventory::api::handlers::AppState;
use library_inventory::api::router::create_router;
use library_inventory::api::types::*;
use library_inventory::application::inventory::ServiceDependencies;
use library_inventory::domain::MemberId;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// APIテスト用のヘルパー関数
// ============================================================================

/// インメモリアダプターで組み立てたルーター
///
/// 通知の送信履歴を検証できるよう、Notifierも返す。
fn setup_app(members: &[i64]) -> (axum::Router, Arc<LoggingNotifier>) {
    let book_store = Arc::new(InMemoryBookStore::new());
    let member_validator = Arc::new(InMemoryMemberValidator::with_members(
        members.iter().copied().map(MemberId::new),
    ));
    let notifier = Arc::new(LoggingNotifier::new());

    let service_deps = ServiceDependencies {
        book_store,
        member_validator,
        notifier: notifier.clone(),
    };

    let app_state = Arc::new(AppState::new(service_deps));

    (create_router(app_state), notifier)
}

async fn post_json(app: &axum::Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup_app(&[]);

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_full_circulation_flow() {
    let (app, notifier) = setup_app(&[1]);

    // Step 1: 在庫追加（POST /books）×2 で合算される
    let response = post_json(&app, "/books", json!({ "title": "1984", "count": 2 })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: BookResponse = read_json(response).await;
    assert_eq!(
        created,
        BookResponse {
            title: "1984".to_string(),
            copies: 2
        }
    );

    let response = post_json(&app, "/books", json!({ "title": "1984", "count": 3 })).await;
    let merged: BookResponse = read_json(response).await;
    assert_eq!(merged.copies, 5);

    // Step 2: 貸出（POST /books/borrow）
    let response = post_json(
        &app,
        "/books/borrow",
        json!({ "member_id": 1, "title": "1984" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let borrowed: CirculationResponse = read_json(response).await;
    assert!(borrowed.success);
    assert_eq!(borrowed.outcome, "borrowed");

    // Step 3: 一覧（GET /books/available）
    let response = get(&app, "/books/available").await;
    assert_eq!(response.status(), StatusCode::OK);
    let available: Vec<BookResponse> = read_json(response).await;
    assert_eq!(
        available,
        vec![BookResponse {
            title: "1984".to_string(),
            copies: 4
        }]
    );

    // Step 4: 返却（POST /books/return）
    let response = post_json(
        &app,
        "/books/return",
        json!({ "member_id": 1, "title": "1984" }),
    )
    .await;
    let returned: CirculationResponse = read_json(response).await;
    assert!(returned.success);
    assert_eq!(returned.outcome, "returned");

    let kinds: Vec<NotificationKind> = notifier.sent().into_iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![NotificationKind::Borrow, NotificationKind::Return]
    );
}

// ============================================================================
// 業務上の不成立（200 + success: false）
// ============================================================================

#[tokio::test]
async fn test_borrow_unknown_title_reports_not_found() {
    let (app, notifier) = setup_app(&[1]);

    let response = post_json(
        &app,
        "/books/borrow",
        json!({ "member_id": 1, "title": "Metamorphosis" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: CirculationResponse = read_json(response).await;
    assert!(!body.success);
    assert_eq!(body.outcome, "not_found");
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_borrow_last_copy_then_unavailable() {
    let (app, _) = setup_app(&[1, 2]);
    post_json(
        &app,
        "/books",
        json!({ "title": "Metamorphosis", "count": 1 }),
    )
    .await;

    post_json(
        &app,
        "/books/borrow",
        json!({ "member_id": 1, "title": "Metamorphosis" }),
    )
    .await;
    let response = post_json(
        &app,
        "/books/borrow",
        json!({ "member_id": 2, "title": "Metamorphosis" }),
    )
    .await;

    let body: CirculationResponse = read_json(response).await;
    assert!(!body.success);
    assert_eq!(body.outcome, "unavailable");

    let available: Vec<BookResponse> = read_json(get(&app, "/books/available").await).await;
    assert!(available.is_empty());
}

#[tokio::test]
async fn test_return_unknown_title_reports_not_found() {
    let (app, _) = setup_app(&[]);

    let response = post_json(
        &app,
        "/books/return",
        json!({ "member_id": 9, "title": "Animal Farm" }),
    )
    .await;

    let body: CirculationResponse = read_json(response).await;
    assert!(!body.success);
    assert_eq!(body.outcome, "not_found");
}

// ============================================================================
// エラー系
// ============================================================================

#[tokio::test]
async fn test_add_stock_with_invalid_input_is_bad_request() {
    let (app, _) = setup_app(&[]);

    for body in [
        json!({ "title": "", "count": 1 }),
        json!({ "title": "1984", "count": 0 }),
        json!({ "title": "1984", "count": -2 }),
        json!({ "title": "1984", "count": 1.5 }),
        json!({ "title": "1984", "count": "3" }),
        json!({ "title": "1984" }),
        json!({ "title": null, "count": 1 }),
        json!({ "count": 1 }),
        json!({ "title": 1984, "count": 1 }),
        json!(["1984", 1]),
    ] {
        let response = post_json(&app, "/books", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "INVALID_ARGUMENT");
    }

    let available: Vec<BookResponse> = read_json(get(&app, "/books/available").await).await;
    assert!(available.is_empty());
}

#[tokio::test]
async fn test_add_stock_accepts_whole_number_written_as_float() {
    let (app, _) = setup_app(&[]);

    let response = post_json(&app, "/books", json!({ "title": "Dune", "count": 3.0 })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: BookResponse = read_json(response).await;
    assert_eq!(created.copies, 3);
}

#[tokio::test]
async fn test_borrow_by_invalid_member_is_forbidden() {
    let (app, notifier) = setup_app(&[]);
    post_json(&app, "/books", json!({ "title": "1984", "count": 1 })).await;

    let response = post_json(
        &app,
        "/books/borrow",
        json!({ "member_id": 1, "title": "1984" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "UNAUTHORIZED");
    assert!(notifier.sent().is_empty());

    // 在庫は変わらない
    let available: Vec<BookResponse> = read_json(get(&app, "/books/available").await).await;
    assert_eq!(available[0].copies, 1);
}
