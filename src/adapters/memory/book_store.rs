use crate::domain::{Book, BookTitle};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// BookStoreのインメモリ実装
///
/// タイトルの完全一致をキーに1レコードを保持する。
/// 一覧は登録順で返す。
///
/// 個々の呼び出しはロックで保護されるが、検索→保存の間はロックを保持しない。
/// 同一タイトルへの並行更新の直列化は呼び出し側で行うこと。
pub struct InMemoryBookStore {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// 既存のカタログで初期化する
    ///
    /// 同じタイトルが複数ある場合は後のものが優先される。
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut catalogue = Vec::new();
        for book in books {
            upsert(&mut catalogue, book);
        }
        Self {
            books: Mutex::new(catalogue),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Book>>> {
        self.books
            .lock()
            .map_err(|_| "book store lock poisoned".into())
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

fn upsert(catalogue: &mut Vec<Book>, book: Book) {
    match catalogue.iter_mut().find(|b| b.title == book.title) {
        Some(existing) => *existing = book,
        None => catalogue.push(book),
    }
}

#[async_trait]
impl BookStoreTrait for InMemoryBookStore {
    async fn find_book(&self, title: &BookTitle) -> Result<Option<Book>> {
        let books = self.lock()?;
        Ok(books.iter().find(|b| &b.title == title).cloned())
    }

    async fn save_book(&self, book: Book) -> Result<()> {
        let mut books = self.lock()?;
        upsert(&mut books, book);
        Ok(())
    }

    async fn list_all_books(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.clone())
    }
}
