use crate::application::inventory::InventoryError;
use crate::domain::ValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(InventoryError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(InventoryError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 400 Bad Request - 入力値の誤り
            InventoryError::InvalidArgument(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg)
            }

            // 403 Forbidden - 会員が無効
            InventoryError::Unauthorized(member_id) => (
                StatusCode::FORBIDDEN,
                "UNAUTHORIZED",
                format!("Member {} is not allowed to borrow", member_id),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            InventoryError::DomainError(msg) => {
                tracing::error!("Domain error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DOMAIN_ERROR",
                    "Operation could not be applied".to_string(),
                )
            }
            InventoryError::BookStoreError(e) => {
                tracing::error!("Book store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOK_STORE_ERROR",
                    "Failed to access the catalogue".to_string(),
                )
            }
            InventoryError::MemberValidatorError(e) => {
                tracing::error!("Member validator error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBER_VALIDATOR_ERROR",
                    "Member validation failed".to_string(),
                )
            }
            InventoryError::NotifierError(e) => {
                tracing::error!("Notifier error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFIER_ERROR",
                    "Failed to send notification".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
