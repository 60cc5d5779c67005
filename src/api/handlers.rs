use crate::application::inventory::{
    InventoryError, ServiceDependencies, add_stock as execute_add_stock,
    borrow_book as execute_borrow_book, list_available as execute_list_available,
    return_book as execute_return_book,
};
use crate::domain::BookTitle;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{
    error::ApiError,
    types::{AddStockRequest, BookResponse, BorrowRequest, CirculationResponse, ReturnRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// サービス本体は同一タイトルへの並行更新を直列化しないため、
/// 更新系ハンドラーは`mutation_lock`を取ってから実行する。
pub struct AppState {
    pub service_deps: ServiceDependencies,
    mutation_lock: Mutex<()>,
}

impl AppState {
    pub fn new(service_deps: ServiceDependencies) -> Self {
        Self {
            service_deps,
            mutation_lock: Mutex::new(()),
        }
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books - 在庫を追加
///
/// 既存タイトルには冊数を合算する。保存後の書籍を返す。
/// 本文が解釈できない場合も入力不正（400）として扱う。
pub async fn add_stock(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddStockRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(req) =
        payload.map_err(|rejection| InventoryError::InvalidArgument(rejection.body_text()))?;
    let cmd = req.to_command()?;
    let title = cmd.title.clone();

    let _guard = state.mutation_lock.lock().await;

    execute_add_stock(&state.service_deps, cmd).await?;

    // 保存された書籍を取得して現在の冊数を返す
    let title = BookTitle::parse(title)?;
    let book = state
        .service_deps
        .book_store
        .find_book(&title)
        .await
        .map_err(InventoryError::BookStoreError)?
        .ok_or_else(|| {
            InventoryError::BookStoreError(format!("'{}' missing after save", title).into())
        })?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// POST /books/borrow - 書籍を借りる
///
/// 強制されるビジネスルール:
/// - 会員が有効であること（無効なら403）
/// - タイトルが登録済みで在庫があること（満たさない場合も200で`success: false`）
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowRequest>,
) -> Result<Json<CirculationResponse>, ApiError> {
    let _guard = state.mutation_lock.lock().await;

    let outcome = execute_borrow_book(&state.service_deps, req.to_command()).await?;

    Ok(Json(CirculationResponse::borrowed(&req, outcome)))
}

/// POST /books/return - 書籍を返却
///
/// 会員の有効性は確認しない。未登録タイトルは200で`success: false`。
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReturnRequest>,
) -> Result<Json<CirculationResponse>, ApiError> {
    let _guard = state.mutation_lock.lock().await;

    let outcome = execute_return_book(&state.service_deps, req.to_command()).await?;

    Ok(Json(CirculationResponse::returned(&req, outcome)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/available - 貸出可能な書籍の一覧
pub async fn list_available(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_available(&state.service_deps).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
