pub mod service;
pub mod stats;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookListDto, NewBookDto};
use crate::catalog::domain::stats::LibraryStats;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<BookListDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookEntity>;
    // false when no book has the given id
    async fn update_book(&self, book: &BookEntity) -> LibraryResult<bool>;
    // new read flag, or None when no book has the given id
    async fn toggle_read_status(&self, id: &str) -> LibraryResult<Option<bool>>;
    async fn remove_book(&self, id: &str) -> LibraryResult<bool>;
    async fn replace_books(&self, books: Vec<BookEntity>) -> LibraryResult<usize>;
    async fn set_loading(&self, loading: bool) -> LibraryResult<()>;
    async fn set_error(&self, error: Option<String>) -> LibraryResult<()>;
    async fn library_stats(&self) -> LibraryResult<LibraryStats>;
}
