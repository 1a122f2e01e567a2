//! Statistics derived on demand from the current collection. Nothing here
//! mutates or caches; callers pass whatever slice they are rendering.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

pub fn total_count<B: Book>(books: &[B]) -> usize {
    books.len()
}

pub fn read_count<B: Book>(books: &[B]) -> usize {
    books.iter().filter(|b| b.is_read()).count()
}

pub fn unread_count<B: Book>(books: &[B]) -> usize {
    total_count(books) - read_count(books)
}

/// Share of read books in whole percent, rounded half up. 0 for an empty
/// collection.
pub fn read_percentage<B: Book>(books: &[B]) -> u32 {
    let total = total_count(books);
    if total == 0 {
        return 0;
    }
    let read = read_count(books);
    // round(read / total * 100) in integers: floor((200 * read + total) / (2 * total))
    ((200 * read + total) / (2 * total)) as u32
}

/// Category with the most books. Ties go to the category that appears first
/// in collection order. None when the collection is empty.
pub fn most_popular_category<B: Book>(books: &[B]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.category()).or_insert(0) += 1;
    }
    let max = counts.values().copied().max()?;
    books.iter()
        .map(|b| b.category())
        .find(|category| counts.get(category) == Some(&max))
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total_count: usize,
    pub read_count: usize,
    pub unread_count: usize,
    pub read_percentage: u32,
    pub most_popular_category: String,
}

impl LibraryStats {
    pub fn from_books<B: Book>(books: &[B], no_category_label: &str) -> Self {
        Self {
            total_count: total_count(books),
            read_count: read_count(books),
            unread_count: unread_count(books),
            read_percentage: read_percentage(books),
            most_popular_category: most_popular_category(books)
                .unwrap_or_else(|| no_category_label.to_string()),
        }
    }
}
