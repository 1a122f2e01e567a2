use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SetErrorCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SetErrorCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// A null or missing error clears the signal.
#[derive(Debug, Deserialize)]
pub struct SetErrorCommandRequest {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SetErrorCommandResponse {
    pub error: Option<String>,
}

#[async_trait]
impl Command<SetErrorCommandRequest, SetErrorCommandResponse> for SetErrorCommand {
    async fn execute(&self, req: SetErrorCommandRequest) -> Result<SetErrorCommandResponse, CommandError> {
        let error = req.error.clone();
        self.catalog_service.set_error(req.error).await
            .map_err(CommandError::from).map(|_| SetErrorCommandResponse { error })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_store;
    use crate::catalog::command::set_error_cmd::{SetErrorCommand, SetErrorCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_set_and_clear_error() {
        let config = Configuration::new("test");
        let store = create_book_store(&config).expect("should create store");
        let cmd = SetErrorCommand::new(factory::create_catalog_service(&config, store.clone()));

        let res = cmd.execute(SetErrorCommandRequest { error: Some("koneksi terputus".to_string()) })
            .await.expect("should set error");
        assert_eq!(Some("koneksi terputus".to_string()), res.error);
        assert_eq!(Some("koneksi terputus"), store.read().expect("should read store").error());

        let req: SetErrorCommandRequest = serde_json::from_str("{}").expect("should parse request");
        let res = cmd.execute(req).await.expect("should clear error");
        assert_eq!(None, res.error);
        assert_eq!(None, store.read().expect("should read store").error());
    }
}
