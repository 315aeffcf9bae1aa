use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::categories::Category;
use crate::domain::errors::ShelfError;
use crate::domain::repositories::ShelfRepository;
use crate::domain::shelves::{ShelfPage, ShelfType};

pub const NEODB_URL: &str = "https://neodb.social/";

/// Where the upstream lives and the bearer token used to reach it.
#[derive(Clone)]
pub struct ShelfSourceConfig {
    pub base_url: Url,
    pub api_key: String,
}

impl std::fmt::Debug for ShelfSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShelfSourceConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Reads a user's shelves from a NeoDB instance.
pub struct NeoDbShelfRepository {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl NeoDbShelfRepository {
    pub fn new(http: Client, config: ShelfSourceConfig) -> Self {
        let mut base_url = config.base_url;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path().trim_end_matches('/')));
        }

        Self {
            http,
            base_url,
            api_key: config.api_key,
        }
    }

    fn shelf_url(
        &self,
        category: Category,
        page: u64,
        shelf_type: ShelfType,
    ) -> Result<Url, ShelfError> {
        let path = format!("api/me/shelf/{shelf_type}");
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| ShelfError::Transport(format!("invalid shelf path {path}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("category", category.as_str())
            .append_pair("page", &page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ShelfRepository for NeoDbShelfRepository {
    async fn fetch_page(
        &self,
        category: Category,
        page: u64,
        shelf_type: ShelfType,
    ) -> Result<ShelfPage, ShelfError> {
        let url = self.shelf_url(category, page, shelf_type)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ShelfError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ShelfError::Transport(format!("failed to read response body: {e}")))?;

        let mut shelf_page = match parse_shelf_page(status.as_u16(), &body) {
            Ok(shelf_page) => shelf_page,
            Err(err) => {
                warn!(%category, page, %status, error = %err, "shelf fetch failed");
                return Err(err);
            }
        };
        shelf_page.apply_thumbnail_suffixes();

        debug!(
            %category,
            page,
            items = shelf_page.data.len(),
            count = shelf_page.count,
            pages = shelf_page.pages,
            "fetched shelf page"
        );

        Ok(shelf_page)
    }
}

/// Upstream error bodies are JSON too, so the presence of `data` rather than
/// the status code decides whether this is a page.
fn parse_shelf_page(status: u16, body: &[u8]) -> Result<ShelfPage, ShelfError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ShelfError::Decode(format!(
            "status {status}: {e}: {}",
            String::from_utf8_lossy(body)
        ))
    })?;

    if value.get("data").is_none() {
        return Err(ShelfError::Upstream {
            status,
            body: value.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| ShelfError::Decode(e.to_string()))
}
