use serde::{Deserialize, Serialize};

use super::MemberId;

/// コマンド：在庫を追加する
///
/// 値は呼び出し側の入力そのまま。検証はアプリケーション層で行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStock {
    pub title: String,
    pub count: i64,
}

/// コマンド：書籍を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub member_id: MemberId,
    pub title: String,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub member_id: MemberId,
    pub title: String,
}
