use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SetLoadingCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SetLoadingCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetLoadingCommandRequest {
    pub loading: bool,
}

#[derive(Debug, Serialize)]
pub struct SetLoadingCommandResponse {
    pub loading: bool,
}

#[async_trait]
impl Command<SetLoadingCommandRequest, SetLoadingCommandResponse> for SetLoadingCommand {
    async fn execute(&self, req: SetLoadingCommandRequest) -> Result<SetLoadingCommandResponse, CommandError> {
        self.catalog_service.set_loading(req.loading).await
            .map_err(CommandError::from).map(|_| SetLoadingCommandResponse { loading: req.loading })
    }
}
