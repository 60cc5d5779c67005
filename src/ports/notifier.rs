use crate::domain::{BookTitle, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知ポート
///
/// 貸出・返却の完了を通知する。配信手段（メール、プッシュ等）や
/// 配信保証は実装側の責務。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 貸出完了を通知する
    ///
    /// 貸出後の在庫が保存された後にのみ呼ばれる。
    async fn notify_borrow(&self, member_id: MemberId, title: &BookTitle) -> Result<()>;

    /// 返却完了を通知する
    ///
    /// 返却後の在庫が保存された後にのみ呼ばれる。
    async fn notify_return(&self, member_id: MemberId, title: &BookTitle) -> Result<()>;
}
