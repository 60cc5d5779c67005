use thiserror::Error;

/// 入力値の検証エラー
///
/// 呼び出し側の誤りを表す。協調オブジェクトを呼ぶ前に検出される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// タイトルが空、または空白のみ
    #[error("title must not be blank")]
    BlankTitle,

    /// 入荷冊数が0以下
    #[error("count must be a positive integer, got {0}")]
    NonPositiveQuantity(i64),

    /// 入荷冊数が上限を超えている
    #[error("count {0} exceeds the maximum number of copies")]
    QuantityTooLarge(i64),
}

/// 入荷のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCopiesError {
    /// 所蔵冊数の上限を超えた
    CopyCountOverflow,
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendCopyError {
    /// 貸出可能な在庫がない
    NoCopiesAvailable,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveCopyError {
    /// 所蔵冊数の上限を超えた
    CopyCountOverflow,
}
