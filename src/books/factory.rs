use chrono::Utc;
use crate::books::domain::model::BookEntity;
use crate::books::store::{BookStore, SharedBookStore};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// Illustrative starting collection shown before any loader exists.
pub fn sample_books() -> Vec<BookEntity> {
    let now = Utc::now();
    vec![
        BookEntity::new("1", "Laskar Pelangi", "Andrea Hirata", "978-979-22-3272-4",
                        "Fiksi", 2005, true, now),
        BookEntity::new("2", "Ayat-Ayat Cinta", "Habiburrahman El Shirazy", "978-979-22-1823-0",
                        "Religi", 2004, false, now),
        BookEntity::new("3", "Bumi Manusia", "Pramoedya Ananta Toer", "978-979-22-0001-1",
                        "Sejarah", 1980, true, now),
    ]
}

pub fn create_book_store(config: &Configuration) -> LibraryResult<SharedBookStore> {
    let store = if config.seed_sample_books {
        BookStore::with_books(sample_books())?
    } else {
        BookStore::new()
    };
    Ok(store.into_shared())
}
