use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use lending_catalog::api::handlers::AppState;
use lending_catalog::api::router::create_router;
use lending_catalog::api::types::*;
use lending_catalog::application::lending::ServiceDependencies;
use lending_catalog::application::seed::demo_catalog;
use lending_catalog::domain::{Availability, Catalog};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// 指定した目録でルーターを構築する
fn setup_app(catalog: Catalog) -> axum::Router {
    let service_deps = ServiceDependencies::new(catalog);
    let app_state = Arc::new(AppState { service_deps });
    create_router(app_state)
}

fn demo_app() -> axum::Router {
    setup_app(demo_catalog().unwrap())
}

async fn post_json(app: &axum::Router, uri: &str, body: Value) -> Response {
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

async fn get(app: &axum::Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn read_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let app = demo_app();

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "OK");
}

#[tokio::test]
async fn test_e2e_full_loan_flow() {
    let app = demo_app();

    // Step 1: 貸出（POST /loans）
    let response = post_json(
        &app,
        "/loans",
        json!({ "member_id": "MEM001", "item_id": "B001" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let borrowed: ItemBorrowedResponse = read_json(response).await;
    assert_eq!(borrowed.item_id, "B001");
    assert_eq!(borrowed.member_id, "MEM001");
    assert_eq!(borrowed.message, "Book \"TypeScript Guide\" borrowed by Alice");

    // Step 2: 資料の状態確認（GET /items/:id）
    let response = get(&app, "/items/B001").await;
    assert_eq!(response.status(), StatusCode::OK);
    let item: ItemResponse = read_json(response).await;
    assert_eq!(item.availability, Availability::Borrowed);

    // Step 3: 会員の貸出一覧（GET /members/:id/loans）
    let response = get(&app, "/members/MEM001/loans").await;
    assert_eq!(response.status(), StatusCode::OK);
    let loans: MemberLoansResponse = read_json(response).await;
    assert_eq!(loans.name, "Alice");
    assert_eq!(loans.items.len(), 1);
    assert_eq!(
        loans.listing,
        "Book: \"TypeScript Guide\" by John Doe (ID: B001)"
    );

    // Step 4: 返却（POST /loans/return）
    let response = post_json(
        &app,
        "/loans/return",
        json!({ "member_id": "MEM001", "item_id": "B001" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let returned: ItemReturnedResponse = read_json(response).await;
    assert_eq!(returned.loan_id, borrowed.loan_id);
    assert_eq!(returned.message, "Book \"TypeScript Guide\" returned");

    // Step 5: 貸出前と同じ状態に戻っている
    let item: ItemResponse = read_json(get(&app, "/items/B001").await).await;
    assert_eq!(item.availability, Availability::Available);
    let loans: MemberLoansResponse = read_json(get(&app, "/members/MEM001/loans").await).await;
    assert!(loans.items.is_empty());
    assert_eq!(loans.listing, "No borrowed items");
}

#[tokio::test]
async fn test_e2e_register_item_and_member() {
    let app = setup_app(Catalog::new());

    let response = post_json(
        &app,
        "/items",
        json!({
            "item_id": "AB002",
            "title": "Rust in Action",
            "kind": "audio_book",
            "author": "Tim McNamara",
            "narrator": "Sam Reader",
            "duration_minutes": 600
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item: ItemResponse = read_json(response).await;
    assert_eq!(item.availability, Availability::Available);
    assert_eq!(
        item.details,
        "Audiobook: \"Rust in Action\" by Tim McNamara, narrated by Sam Reader, duration: 600 min (ID: AB002)"
    );

    let response = post_json(
        &app,
        "/members",
        json!({ "member_id": "MEM100", "name": "Dana" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let member: MemberResponse = read_json(response).await;
    assert_eq!(member.member_id, "MEM100");
    assert_eq!(member.borrowed_count, 0);

    let response = get(&app, "/summary").await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = read_text(response).await;
    assert!(summary.contains("(ID: AB002)"));
    assert!(summary.contains("Dana"));
}

// ============================================================================
// E2Eテスト: 異常系
// ============================================================================

#[tokio::test]
async fn test_e2e_borrow_unknown_member_returns_404() {
    let app = demo_app();

    let response = post_json(
        &app,
        "/loans",
        json!({ "member_id": "MEM404", "item_id": "B001" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "MEMBER_NOT_FOUND");

    // 状態は変わらない
    let item: ItemResponse = read_json(get(&app, "/items/B001").await).await;
    assert_eq!(item.availability, Availability::Available);
}

#[tokio::test]
async fn test_e2e_get_unknown_item_returns_404() {
    let app = demo_app();

    let response = get(&app, "/items/NOPE").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "ITEM_NOT_FOUND");
}

#[tokio::test]
async fn test_e2e_double_borrow_returns_409() {
    let app = demo_app();
    let first = post_json(
        &app,
        "/loans",
        json!({ "member_id": "MEM001", "item_id": "M001" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(
        &app,
        "/loans",
        json!({ "member_id": "MEM002", "item_id": "M001" }),
    )
    .await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = read_json(second).await;
    assert_eq!(error.error, "ITEM_UNAVAILABLE");
    assert_eq!(error.message, "Magazine \"Tech Monthly\" is not available");
}

#[tokio::test]
async fn test_e2e_return_not_held_returns_409() {
    let app = demo_app();

    let response = post_json(
        &app,
        "/loans/return",
        json!({ "member_id": "MEM002", "item_id": "B001" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "ITEM_NOT_HELD_BY_MEMBER");
}

#[tokio::test]
async fn test_e2e_duplicate_member_returns_409() {
    let app = demo_app();

    let response = post_json(
        &app,
        "/members",
        json!({ "member_id": "MEM001", "name": "Impostor" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "DUPLICATE_MEMBER");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_e2e_concurrent_borrows_only_one_succeeds() {
    let app = demo_app();

    let mut tasks = Vec::new();
    for i in 0..10 {
        let app = app.clone();
        let member_id = if i % 2 == 0 { "MEM001" } else { "MEM002" };
        tasks.push(tokio::spawn(async move {
            post_json(
                &app,
                "/loans",
                json!({ "member_id": member_id, "item_id": "EQ001" }),
            )
            .await
            .status()
        }));
    }

    let mut ok = 0;
    let mut conflicts = 0;
    for task in tasks {
        let status = task.await.unwrap();
        if status == StatusCode::OK {
            ok += 1;
        } else if status == StatusCode::CONFLICT {
            conflicts += 1;
        } else {
            panic!("unexpected status {status}");
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(conflicts, 9);
}
