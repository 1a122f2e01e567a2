use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// NewBookDto carries every book field except the ones the store assigns
// (id and created_at).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub publication_year: i32,
    #[serde(default)]
    pub is_read: bool,
}

impl NewBookDto {
    pub fn new(title: &str, author: &str, isbn: &str, category: &str, publication_year: i32, is_read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            publication_year,
            is_read,
        }
    }

    pub fn build_book(&self, id: &str, created_at: DateTime<Utc>) -> BookEntity {
        BookEntity {
            id: id.to_string(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            isbn: self.isbn.to_string(),
            category: self.category.to_string(),
            publication_year: self.publication_year,
            is_read: self.is_read,
            created_at,
        }
    }
}

// BookListDto is what a renderer needs to draw the book list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListDto {
    pub books: Vec<BookEntity>,
    pub loading: bool,
    pub error: Option<String>,
}
