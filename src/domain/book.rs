use serde::{Deserialize, Serialize};

use super::{
    AddCopiesError, BookTitle, CopyCount, LendCopyError, ReceiveCopyError, StockQuantity,
};

/// Book集約 - カタログに登録された1タイトル
///
/// 同じタイトルの在庫はすべて1つの`copies`に合算される。
/// 同一タイトルのレコードが複数存在することはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: BookTitle,
    pub copies: CopyCount,
}

impl Book {
    pub fn new(title: BookTitle, copies: CopyCount) -> Self {
        Self { title, copies }
    }
}

/// 純粋関数：新しいタイトルを登録する
///
/// 初回入荷時にのみ呼ばれる。所蔵冊数は入荷冊数と同じ。
pub fn stock_new_title(title: BookTitle, quantity: StockQuantity) -> Book {
    Book::new(title, CopyCount::from(quantity))
}

/// 純粋関数：既存タイトルに入荷分を合算する
///
/// ビジネスルール：
/// - 重複レコードは作らず、既存の所蔵冊数に加算する
///
/// 副作用なし。更新後のBookを返す。
pub fn add_copies(book: Book, quantity: StockQuantity) -> Result<Book, AddCopiesError> {
    let copies = book
        .copies
        .checked_add(quantity)
        .ok_or(AddCopiesError::CopyCountOverflow)?;

    Ok(Book { copies, ..book })
}

/// 純粋関数：1冊貸し出す
///
/// ビジネスルール：
/// - 在庫が0冊の場合は貸し出せない
///
/// 副作用なし。更新後のBookを返す。
pub fn lend_copy(book: Book) -> Result<Book, LendCopyError> {
    let copies = book
        .copies
        .decrement()
        .ok_or(LendCopyError::NoCopiesAvailable)?;

    Ok(Book { copies, ..book })
}

/// 純粋関数：1冊返却を受け付ける
///
/// 返却は常に受け付ける（状態に関わらず+1）。
pub fn receive_copy(book: Book) -> Result<Book, ReceiveCopyError> {
    let copies = book
        .copies
        .increment()
        .ok_or(ReceiveCopyError::CopyCountOverflow)?;

    Ok(Book { copies, ..book })
}

/// 貸出可能か（在庫が1冊以上あるか）
pub fn is_available(book: &Book) -> bool {
    !book.copies.is_zero()
}
