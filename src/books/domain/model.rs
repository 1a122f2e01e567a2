use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::utils::date::serializer;

// BookEntity is one catalog item. The id and created_at are assigned by the
// store when the book is added and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub publication_year: i32,
    pub is_read: bool,
    #[serde(with = "serializer")]
    pub created_at: DateTime<Utc>,
}

impl BookEntity {
    #[allow(clippy::too_many_arguments)]
    pub fn new(id: &str, title: &str, author: &str, isbn: &str, category: &str,
               publication_year: i32, is_read: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            publication_year,
            is_read,
            created_at,
        }
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.is_read
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }
}
