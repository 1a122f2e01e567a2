use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: bool) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let remove_cmd = RemoveBookCommand::new(factory::create_test_catalog_service(true));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("2".to_string())).await.expect("should remove book");
        assert!(res.removed);
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("2".to_string())).await.expect("should not fail");
        assert!(!res.removed);
    }

    #[tokio::test]
    async fn test_should_remove_nothing_from_empty_catalog() {
        let remove_cmd = RemoveBookCommand::new(factory::create_test_catalog_service(false));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("any".to_string())).await.expect("should not fail");
        assert!(!res.removed);
    }
}
