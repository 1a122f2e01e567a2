use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::stats::LibraryStats;
use crate::core::command::{Command, CommandError};

pub struct GetLibraryStatsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetLibraryStatsCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct GetLibraryStatsCommandRequest {}

#[derive(Debug, Serialize)]
pub struct GetLibraryStatsCommandResponse {
    #[serde(flatten)]
    pub stats: LibraryStats,
}

#[async_trait]
impl Command<GetLibraryStatsCommandRequest, GetLibraryStatsCommandResponse> for GetLibraryStatsCommand {
    async fn execute(&self, _req: GetLibraryStatsCommandRequest) -> Result<GetLibraryStatsCommandResponse, CommandError> {
        self.catalog_service.library_stats().await
            .map_err(CommandError::from).map(|stats| GetLibraryStatsCommandResponse { stats })
    }
}
