use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// ReplaceBooksCommand installs a whole collection delivered by an external
// loader, in the order given.
pub struct ReplaceBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ReplaceBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceBooksCommandRequest {
    pub books: Vec<BookEntity>,
}

impl ReplaceBooksCommandRequest {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplaceBooksCommandResponse {
    pub size: usize,
}

#[async_trait]
impl Command<ReplaceBooksCommandRequest, ReplaceBooksCommandResponse> for ReplaceBooksCommand {
    async fn execute(&self, req: ReplaceBooksCommandRequest) -> Result<ReplaceBooksCommandResponse, CommandError> {
        self.catalog_service.replace_books(req.books).await
            .map_err(CommandError::from).map(|size| ReplaceBooksCommandResponse { size })
    }
}
