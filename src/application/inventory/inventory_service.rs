use crate::domain::{self, Book, BookTitle, LendCopyError, StockQuantity, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{InventoryError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 3つの協調オブジェクトは呼び出し側が構築時に注入する。
/// テストではスパイやスタブに差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub member_validator: Arc<dyn MemberValidator>,
    pub notifier: Arc<dyn Notifier>,
}

/// 貸出の結果
///
/// タイトル未登録・在庫切れは業務上想定された結果であり、エラーではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// 貸出成功
    Borrowed,
    /// タイトルが登録されていない
    NotFound,
    /// 在庫が0冊
    Unavailable,
}

impl BorrowOutcome {
    /// 貸出が成立したか
    pub fn succeeded(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowOutcome::Borrowed => "borrowed",
            BorrowOutcome::NotFound => "not_found",
            BorrowOutcome::Unavailable => "unavailable",
        }
    }
}

/// 返却の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 返却成功
    Returned,
    /// タイトルが登録されていない
    NotFound,
}

impl ReturnOutcome {
    /// 返却が成立したか
    pub fn succeeded(&self) -> bool {
        matches!(self, ReturnOutcome::Returned)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnOutcome::Returned => "returned",
            ReturnOutcome::NotFound => "not_found",
        }
    }
}

/// 書籍ストアからタイトルで書籍を取得するヘルパー関数
///
/// add_stock, borrow_book, return_bookで共通利用される。
async fn find_book(book_store: &Arc<dyn BookStore>, title: &BookTitle) -> Result<Option<Book>> {
    book_store
        .find_book(title)
        .await
        .map_err(InventoryError::BookStoreError)
}

/// 書籍を保存するヘルパー関数
async fn save_book(book_store: &Arc<dyn BookStore>, book: Book) -> Result<()> {
    book_store
        .save_book(book)
        .await
        .map_err(InventoryError::BookStoreError)
}

/// 在庫を追加する（純粋な関数）
///
/// ビジネスルール：
/// - タイトルは空・空白のみ不可
/// - 冊数は1以上の整数
/// - 既存タイトルには合算し、重複レコードは作らない
/// - 在庫追加では通知しない
///
/// # エラー
/// - InvalidArgument: 入力不正。この場合は検索も保存も行わない
/// - BookStoreError: 検索・保存の失敗（変換せずそのまま伝播）
pub async fn add_stock(deps: &ServiceDependencies, cmd: AddStock) -> Result<()> {
    // 1. 入力の検証
    let title = BookTitle::parse(cmd.title)?;
    let quantity = StockQuantity::try_from(cmd.count)?;

    // 2. 既存タイトルの検索
    let existing = find_book(&deps.book_store, &title).await?;

    // 3. 新規登録、または既存レコードへの合算
    let book = match existing {
        None => domain::book::stock_new_title(title, quantity),
        Some(book) => domain::book::add_copies(book, quantity).map_err(|_| {
            InventoryError::InvalidArgument(format!(
                "adding {} copies of '{}' exceeds the maximum stock",
                quantity.value(),
                title
            ))
        })?,
    };

    let copies = book.copies.value();
    let title = book.title.clone();

    // 4. 保存（成功時はちょうど1回）
    save_book(&deps.book_store, book).await?;

    tracing::info!(
        "Stocked {} copies of '{}' (now {})",
        quantity.value(),
        title,
        copies
    );

    Ok(())
}

/// 書籍を貸し出す（純粋な関数）
///
/// ビジネスルール：
/// - 会員が有効であること（ストアに触れる前に確認する）
/// - タイトルが登録されていること
/// - 在庫が1冊以上あること
///
/// 処理順序：会員確認 → 検索 → 在庫減算 → 保存 → 通知。
/// 通知は保存が成功した後にのみ行う。
///
/// # 戻り値
/// 貸出の結果。未登録・在庫切れは`Ok`で返り、保存も通知も行われない。
///
/// # エラー
/// - Unauthorized: 会員が無効。検索・保存・通知は行わない
/// - MemberValidatorError / BookStoreError / NotifierError: 協調オブジェクトの失敗
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<BorrowOutcome> {
    // 1. 会員の確認
    let is_valid = deps
        .member_validator
        .is_valid_member(cmd.member_id)
        .await
        .map_err(InventoryError::MemberValidatorError)?;

    if !is_valid {
        tracing::warn!("Rejected borrow by invalid member {}", cmd.member_id);
        return Err(InventoryError::Unauthorized(cmd.member_id));
    }

    // 空のタイトルに該当する書籍は存在しない
    let Ok(title) = BookTitle::parse(cmd.title) else {
        return Ok(BorrowOutcome::NotFound);
    };

    // 2. 書籍の検索
    let Some(book) = find_book(&deps.book_store, &title).await? else {
        tracing::debug!("Borrow of unknown title '{}'", title);
        return Ok(BorrowOutcome::NotFound);
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let book = match domain::book::lend_copy(book) {
        Ok(book) => book,
        Err(LendCopyError::NoCopiesAvailable) => {
            tracing::debug!("No copies of '{}' left to lend", title);
            return Ok(BorrowOutcome::Unavailable);
        }
    };

    let remaining = book.copies.value();

    // 4. 保存
    save_book(&deps.book_store, book).await?;

    // 5. 通知
    deps.notifier
        .notify_borrow(cmd.member_id, &title)
        .await
        .map_err(InventoryError::NotifierError)?;

    tracing::info!(
        "Member {} borrowed '{}' ({} left)",
        cmd.member_id,
        title,
        remaining
    );

    Ok(BorrowOutcome::Borrowed)
}

/// 書籍を返却する（純粋な関数）
///
/// ビジネスルール：
/// - 会員の有効性は確認しない（登録済みタイトルの返却は常に受け付ける）
/// - タイトルが登録されていること
///
/// 処理順序：検索 → 在庫加算 → 保存 → 通知。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ReturnOutcome> {
    let Ok(title) = BookTitle::parse(cmd.title) else {
        return Ok(ReturnOutcome::NotFound);
    };

    // 1. 書籍の検索
    let Some(book) = find_book(&deps.book_store, &title).await? else {
        tracing::debug!("Return of unknown title '{}'", title);
        return Ok(ReturnOutcome::NotFound);
    };

    // 2. ドメイン層の純粋関数を呼び出し
    let book = domain::book::receive_copy(book)
        .map_err(|e| InventoryError::DomainError(format!("{:?}", e)))?;

    let copies = book.copies.value();

    // 3. 保存
    save_book(&deps.book_store, book).await?;

    // 4. 通知
    deps.notifier
        .notify_return(cmd.member_id, &title)
        .await
        .map_err(InventoryError::NotifierError)?;

    tracing::info!(
        "Member {} returned '{}' (now {})",
        cmd.member_id,
        title,
        copies
    );

    Ok(ReturnOutcome::Returned)
}

/// 貸出可能な書籍の一覧を取得する
///
/// 在庫が1冊以上の書籍のみを、ストアが返した順序のまま返す。
/// 該当がなければ空のVec。変更も通知も行わない。
pub async fn list_available(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let books = deps
        .book_store
        .list_all_books()
        .await
        .map_err(InventoryError::BookStoreError)?;

    Ok(books
        .into_iter()
        .filter(domain::book::is_available)
        .collect())
}
