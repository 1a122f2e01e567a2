use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use chrono::Utc;
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::books::dto::NewBookDto;
use crate::core::library::{LibraryError, LibraryResult};

/// Handle used when more than one actor needs the store. Every mutation runs
/// under the write lock so commands are applied one at a time.
pub type SharedBookStore = Arc<RwLock<BookStore>>;

/// Mutations accepted by [`BookStore::apply`]. A command either completes or
/// leaves the store untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum BookCommand {
    Add(NewBookDto),
    ToggleRead(String),
    Update(BookEntity),
    Delete(String),
    ReplaceAll(Vec<BookEntity>),
    SetLoading(bool),
    SetError(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(BookEntity),
    Applied,
    // the addressed id is not in the collection, nothing changed
    Ignored,
}

impl CommandOutcome {
    fn from_match(matched: bool) -> Self {
        if matched {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        }
    }
}

/// Ordered book collection plus the loading/error signals shown by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookStore {
    books: Vec<BookEntity>,
    loading: bool,
    error: Option<String>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection. Fails if two books share an id.
    pub fn with_books(books: Vec<BookEntity>) -> LibraryResult<Self> {
        let mut store = Self::new();
        store.replace_all(books)?;
        Ok(store)
    }

    pub fn into_shared(self) -> SharedBookStore {
        Arc::new(RwLock::new(self))
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn find(&self, id: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn apply(&mut self, command: BookCommand) -> LibraryResult<CommandOutcome> {
        match command {
            BookCommand::Add(new_book) => {
                Ok(CommandOutcome::Added(self.add(&new_book)))
            }
            BookCommand::ToggleRead(id) => {
                Ok(CommandOutcome::from_match(self.toggle_read(id.as_str())))
            }
            BookCommand::Update(book) => {
                Ok(CommandOutcome::from_match(self.update(book)))
            }
            BookCommand::Delete(id) => {
                Ok(CommandOutcome::from_match(self.delete(id.as_str())))
            }
            BookCommand::ReplaceAll(books) => {
                self.replace_all(books).map(|_| CommandOutcome::Applied)
            }
            BookCommand::SetLoading(loading) => {
                self.set_loading(loading);
                Ok(CommandOutcome::Applied)
            }
            BookCommand::SetError(error) => {
                self.set_error(error);
                Ok(CommandOutcome::Applied)
            }
        }
    }

    /// Appends a new book with a fresh id and the current time as created_at.
    pub fn add(&mut self, new_book: &NewBookDto) -> BookEntity {
        let book = new_book.build_book(self.next_id().as_str(), Utc::now());
        self.books.push(book.clone());
        book
    }

    pub fn toggle_read(&mut self, id: &str) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.is_read = !book.is_read;
                true
            }
            None => false,
        }
    }

    /// Replaces the record with the same id in place. created_at is kept
    /// from the stored record.
    pub fn update(&mut self, book: BookEntity) -> bool {
        match self.books.iter().position(|b| b.id == book.id) {
            Some(index) => {
                let created_at = self.books[index].created_at;
                self.books[index] = BookEntity { created_at, ..book };
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swaps in a whole collection, e.g. one delivered by a loader. The given
    /// order becomes the display order.
    pub fn replace_all(&mut self, books: Vec<BookEntity>) -> LibraryResult<()> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(LibraryError::duplicate_key(
                    format!("duplicate book id {}", book.id).as_str()));
            }
        }
        self.books = books;
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find(id.as_str()).is_none() {
                return id;
            }
        }
    }
}
