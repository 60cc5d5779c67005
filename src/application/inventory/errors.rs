use crate::domain::{MemberId, ValidationError};
use thiserror::Error;

/// 在庫管理アプリケーション層のエラー
///
/// 在庫切れ・タイトル未登録はエラーではなく結果値（`BorrowOutcome`/`ReturnOutcome`）で返す。
#[derive(Debug, Error)]
pub enum InventoryError {
    /// 入力値が不正（空のタイトル、0以下の冊数など）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 会員が無効なため貸出不可
    #[error("Member {0} is not authorized to borrow")]
    Unauthorized(MemberId),

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberValidatorのエラー
    #[error("Member validator error")]
    MemberValidatorError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Notifierのエラー
    #[error("Notifier error")]
    NotifierError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for InventoryError {
    fn from(err: ValidationError) -> Self {
        InventoryError::InvalidArgument(err.to_string())
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, InventoryError>;
