use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ToggleReadStatusCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ToggleReadStatusCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleReadStatusCommandRequest {
    pub book_id: String,
}

impl ToggleReadStatusCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleReadStatusCommandResponse {
    pub toggled: bool,
    pub is_read: Option<bool>,
}

impl ToggleReadStatusCommandResponse {
    pub fn new(is_read: Option<bool>) -> Self {
        Self {
            toggled: is_read.is_some(),
            is_read,
        }
    }
}

#[async_trait]
impl Command<ToggleReadStatusCommandRequest, ToggleReadStatusCommandResponse> for ToggleReadStatusCommand {
    async fn execute(&self, req: ToggleReadStatusCommandRequest) -> Result<ToggleReadStatusCommandResponse, CommandError> {
        self.catalog_service.toggle_read_status(req.book_id.as_str()).await
            .map_err(CommandError::from).map(ToggleReadStatusCommandResponse::new)
    }
}
