use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::NewBookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(flatten)]
    pub book: NewBookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: NewBookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(factory::create_test_catalog_service(false));

        let res = cmd.execute(AddBookCommandRequest::new(NewBookDto::new("X", "Y", "1", "Z", 2020, false)))
            .await.expect("should add book");
        assert!(!res.book.id.is_empty());
        assert_eq!("X", res.book.title.as_str());
        assert!(!res.book.is_read);
    }

    #[tokio::test]
    async fn test_should_parse_flat_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"title":"X","author":"Y","isbn":"1","category":"Z","publicationYear":2020,"isRead":true}"#)
            .expect("should parse request");
        assert_eq!(NewBookDto::new("X", "Y", "1", "Z", 2020, true), req.book);
    }
}
