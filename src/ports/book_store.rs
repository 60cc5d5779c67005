use crate::domain::{Book, BookTitle};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// カタログの永続化を抽象化する。保存方式はこのポートの実装側の責務。
///
/// 同一タイトルに対する読み込み→変更→保存の直列化は保証しない。
/// 並行アクセスを許す実装は、タイトル単位のロック等で自ら整合性を保つこと。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// タイトルの完全一致で書籍を検索する
    ///
    /// 所有権ごと値を返す。呼び出し側はこの値を変更して`save_book`に戻す。
    async fn find_book(&self, title: &BookTitle) -> Result<Option<Book>>;

    /// 書籍を保存する（同じタイトルがあれば全体を置き換える）
    ///
    /// 同じ内容での再保存は冪等。
    async fn save_book(&self, book: Book) -> Result<()>;

    /// カタログの全書籍を取得する
    async fn list_all_books(&self) -> Result<Vec<Book>>;
}
