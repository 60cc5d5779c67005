use serde::{Deserialize, Serialize};

use super::ValidationError;

/// 会員ID - 会員管理コンテキストへの参照
///
/// 在庫管理コンテキストは会員IDのみを知り、会員の詳細は知らない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 書籍タイトル - カタログ内で書籍を一意に識別するキー
///
/// 不変条件：空文字・空白のみのタイトルは存在しない。
/// 比較は大文字小文字を区別する完全一致。値は与えられたまま保持する（トリムしない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookTitle(String);

impl BookTitle {
    /// タイトルを検証して作成する
    ///
    /// # エラー
    /// 空文字または空白のみの場合は`ValidationError::BlankTitle`を返す
    pub fn parse(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> Self {
        title.0
    }
}

impl std::fmt::Display for BookTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 所蔵冊数
///
/// 不変条件：0以上（u32で型として保証）。
/// 増減は検査付きで、オーバーフローした値は作成できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CopyCount(u32);

impl CopyCount {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// 冊数を加算する。u32を超える場合は`None`
    pub fn checked_add(self, quantity: StockQuantity) -> Option<Self> {
        self.0.checked_add(quantity.value()).map(Self)
    }

    /// 1冊増やす。u32を超える場合は`None`
    pub fn increment(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// 1冊減らす。0冊の場合は`None`
    pub fn decrement(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<StockQuantity> for CopyCount {
    fn from(quantity: StockQuantity) -> Self {
        Self(quantity.value())
    }
}

/// 入荷冊数
///
/// 不変条件：1以上の整数（0や負数の入荷は存在しない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockQuantity(u32);

impl StockQuantity {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for StockQuantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveQuantity(value));
        }
        let value = u32::try_from(value).map_err(|_| ValidationError::QuantityTooLarge(value))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_title_accepts_non_blank_text() {
        let title = BookTitle::parse("1984").unwrap();
        assert_eq!(title.as_str(), "1984");
    }

    #[test]
    fn test_book_title_rejects_empty_and_blank() {
        assert_eq!(BookTitle::parse(""), Err(ValidationError::BlankTitle));
        assert_eq!(BookTitle::parse("   \t"), Err(ValidationError::BlankTitle));
    }

    #[test]
    fn test_book_title_keeps_surrounding_whitespace() {
        // 完全一致キーなので正規化しない
        let title = BookTitle::parse(" Dune ").unwrap();
        assert_eq!(title.as_str(), " Dune ");
        assert_ne!(title, BookTitle::parse("Dune").unwrap());
    }

    #[test]
    fn test_book_title_is_case_sensitive() {
        assert_ne!(
            BookTitle::parse("Animal Farm").unwrap(),
            BookTitle::parse("animal farm").unwrap()
        );
    }

    #[test]
    fn test_book_title_deserialize_rejects_blank() {
        let result: Result<BookTitle, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_quantity_rejects_zero_and_negative() {
        assert_eq!(
            StockQuantity::try_from(0),
            Err(ValidationError::NonPositiveQuantity(0))
        );
        assert_eq!(
            StockQuantity::try_from(-3),
            Err(ValidationError::NonPositiveQuantity(-3))
        );
    }

    #[test]
    fn test_stock_quantity_rejects_values_beyond_u32() {
        let too_large = i64::from(u32::MAX) + 1;
        assert_eq!(
            StockQuantity::try_from(too_large),
            Err(ValidationError::QuantityTooLarge(too_large))
        );
    }

    #[test]
    fn test_copy_count_decrement_stops_at_zero() {
        let count = CopyCount::new(1);
        let count = count.decrement().unwrap();
        assert!(count.is_zero());
        assert_eq!(count.decrement(), None);
    }

    #[test]
    fn test_copy_count_checked_add_detects_overflow() {
        let quantity = StockQuantity::try_from(2).unwrap();
        assert_eq!(CopyCount::new(3).checked_add(quantity), Some(CopyCount::new(5)));
        assert_eq!(CopyCount::new(u32::MAX).checked_add(quantity), None);
        assert_eq!(CopyCount::new(u32::MAX).increment(), None);
    }

    #[test]
    fn test_member_id_value() {
        let id = MemberId::new(1);
        assert_eq!(id.value(), 1);
        assert_eq!(id, MemberId::new(1));
    }
}
