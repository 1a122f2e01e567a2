use std::sync::{RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookListDto, NewBookDto};
use crate::books::store::{BookCommand, BookStore, CommandOutcome, SharedBookStore};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::stats::LibraryStats;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    config: Configuration,
    store: SharedBookStore,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, store: SharedBookStore) -> Self {
        Self {
            config: config.clone(),
            store,
        }
    }

    fn read(&self) -> LibraryResult<RwLockReadGuard<'_, BookStore>> {
        self.store.read().map_err(|err| LibraryError::runtime(
            format!("book store lock poisoned {}", err).as_str(), None))
    }

    fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, BookStore>> {
        self.store.write().map_err(|err| LibraryError::runtime(
            format!("book store lock poisoned {}", err).as_str(), None))
    }

    fn apply(&self, command: BookCommand) -> LibraryResult<CommandOutcome> {
        self.write()?.apply(command)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<BookListDto> {
        let store = self.read()?;
        Ok(BookListDto {
            books: store.books().to_vec(),
            loading: store.loading(),
            error: store.error().map(str::to_string),
        })
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity> {
        self.read()?.find(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookEntity> {
        match self.apply(BookCommand::Add(book.clone()))? {
            CommandOutcome::Added(added) => {
                info!(branch = %self.config.branch_id, book_id = %added.id, title = %added.title, "book added");
                Ok(added)
            }
            other => Err(LibraryError::runtime(
                format!("unexpected outcome {:?} for add", other).as_str(), None)),
        }
    }

    async fn update_book(&self, book: &BookEntity) -> LibraryResult<bool> {
        let outcome = self.apply(BookCommand::Update(book.clone()))?;
        let updated = outcome == CommandOutcome::Applied;
        if updated {
            info!(branch = %self.config.branch_id, book_id = %book.id, "book updated");
        } else {
            debug!(book_id = %book.id, "update ignored, no such book");
        }
        Ok(updated)
    }

    async fn toggle_read_status(&self, id: &str) -> LibraryResult<Option<bool>> {
        // hold the lock across toggle and read-back so the reported flag is ours
        let mut store = self.write()?;
        if store.apply(BookCommand::ToggleRead(id.to_string()))? == CommandOutcome::Ignored {
            debug!(book_id = %id, "toggle ignored, no such book");
            return Ok(None);
        }
        let toggled = store.find(id);
        if let Some(book) = toggled {
            info!(branch = %self.config.branch_id, book_id = %id, status = %book.read_status(), "read status toggled");
        }
        Ok(toggled.map(|b| b.is_read))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<bool> {
        let removed = self.apply(BookCommand::Delete(id.to_string()))? == CommandOutcome::Applied;
        if removed {
            info!(branch = %self.config.branch_id, book_id = %id, "book removed");
        } else {
            debug!(book_id = %id, "remove ignored, no such book");
        }
        Ok(removed)
    }

    async fn replace_books(&self, books: Vec<BookEntity>) -> LibraryResult<usize> {
        let size = books.len();
        self.apply(BookCommand::ReplaceAll(books)).map_err(|err| {
            warn!(error = %err, "collection replace rejected");
            err
        })?;
        info!(branch = %self.config.branch_id, size, "collection replaced");
        Ok(size)
    }

    async fn set_loading(&self, loading: bool) -> LibraryResult<()> {
        self.apply(BookCommand::SetLoading(loading)).map(|_| ())
    }

    async fn set_error(&self, error: Option<String>) -> LibraryResult<()> {
        if let Some(ref message) = error {
            info!(branch = %self.config.branch_id, error = %message, "error signal set");
        }
        self.apply(BookCommand::SetError(error)).map(|_| ())
    }

    async fn library_stats(&self) -> LibraryResult<LibraryStats> {
        let store = self.read()?;
        Ok(LibraryStats::from_books(store.books(), self.config.no_category_label.as_str()))
    }
}
