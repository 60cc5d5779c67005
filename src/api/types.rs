use serde::{Deserialize, Serialize};

use crate::application::inventory::{BorrowOutcome, InventoryError, ReturnOutcome};
use crate::domain::{
    Book, MemberId,
    commands::{AddStock, BorrowBook, ReturnBook},
};

/// 在庫追加リクエスト（POST /books）
///
/// 欠落・nullのフィールドもデシリアライズ段階では受け入れ、
/// `to_command`で不正入力（InvalidArgument）として扱う。
///
/// `count`は整数値のJSON数値のみ受け付ける。`3.0`のように小数部が0の数値は3として扱い、
/// `1.5`や文字列は不正入力。
#[derive(Debug, Deserialize)]
pub struct AddStockRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: serde_json::Value,
}

impl AddStockRequest {
    pub fn to_command(&self) -> Result<AddStock, InventoryError> {
        let title = self
            .title
            .clone()
            .ok_or_else(|| InventoryError::InvalidArgument("title is required".to_string()))?;

        let count = integral_count(&self.count).ok_or_else(|| {
            InventoryError::InvalidArgument(format!(
                "count must be a positive integer, got {}",
                self.count
            ))
        })?;

        Ok(AddStock { title, count })
    }
}

/// JSON値を整数の冊数に変換する。整数でない場合は`None`
fn integral_count(value: &serde_json::Value) -> Option<i64> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    if let Some(count) = number.as_i64() {
        return Some(count);
    }

    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

/// 貸出リクエスト（POST /books/borrow）
#[derive(Debug, Deserialize)]
pub struct BorrowRequest {
    pub member_id: i64,
    pub title: String,
}

impl BorrowRequest {
    pub fn to_command(&self) -> BorrowBook {
        BorrowBook {
            member_id: MemberId::new(self.member_id),
            title: self.title.clone(),
        }
    }
}

/// 返却リクエスト（POST /books/return）
#[derive(Debug, Deserialize)]
pub struct ReturnRequest {
    pub member_id: i64,
    pub title: String,
}

impl ReturnRequest {
    pub fn to_command(&self) -> ReturnBook {
        ReturnBook {
            member_id: MemberId::new(self.member_id),
            title: self.title.clone(),
        }
    }
}

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub title: String,
    pub copies: u32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title.to_string(),
            copies: book.copies.value(),
        }
    }
}

/// 貸出・返却のレスポンス
///
/// 未登録・在庫切れも200で返し、`success`と`outcome`で区別する。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CirculationResponse {
    pub member_id: i64,
    pub title: String,
    pub success: bool,
    pub outcome: String,
}

impl CirculationResponse {
    pub fn borrowed(req: &BorrowRequest, outcome: BorrowOutcome) -> Self {
        Self {
            member_id: req.member_id,
            title: req.title.clone(),
            success: outcome.succeeded(),
            outcome: outcome.as_str().to_string(),
        }
    }

    pub fn returned(req: &ReturnRequest, outcome: ReturnOutcome) -> Self {
        Self {
            member_id: req.member_id,
            title: req.title.clone(),
            success: outcome.succeeded(),
            outcome: outcome.as_str().to_string(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
