use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(flatten)]
    pub book: BookEntity,
}

impl UpdateBookCommandRequest {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    // false when the id matched no book and nothing changed
    pub updated: bool,
}

impl UpdateBookCommandResponse {
    pub fn new(updated: bool) -> Self {
        Self {
            updated,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(&req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
