use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use url::Url;

use crate::application::services::CompletionService;
use crate::domain::repositories::ShelfRepository;
use crate::infrastructure::neodb::{NeoDbShelfRepository, ShelfSourceConfig};

const USER_AGENT: &str = "yearshelf/1.0";

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    pub upstream_url: Url,
    pub api_key: String,
    pub request_timeout: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub completion_service: CompletionService,
}

impl AppState {
    /// Build the state around a NeoDB-backed shelf repository. The HTTP client
    /// is shared by every request and by both halves of a screen fetch.
    pub fn from_config(config: AppStateConfig) -> anyhow::Result<Self> {
        let http = reqwest::ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        let shelf_repo: Arc<dyn ShelfRepository> = Arc::new(NeoDbShelfRepository::new(
            http,
            ShelfSourceConfig {
                base_url: config.upstream_url,
                api_key: config.api_key,
            },
        ));

        Ok(Self::with_repository(shelf_repo))
    }

    pub fn with_repository(shelf_repo: Arc<dyn ShelfRepository>) -> Self {
        Self {
            completion_service: CompletionService::new(shelf_repo),
        }
    }
}
