use crate::domain::MemberId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員検証ポート
///
/// 在庫管理コンテキストと会員コンテキストの境界を維持する。
/// 会員資格の判定ルールは会員コンテキスト側が持つ。
#[async_trait]
pub trait MemberValidator: Send + Sync {
    /// 会員が現在有効か確認する
    ///
    /// 貸出前の会員チェックに使用される。返却では呼ばれない。
    async fn is_valid_member(&self, member_id: MemberId) -> Result<bool>;
}
