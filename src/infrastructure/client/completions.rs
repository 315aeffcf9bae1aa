use anyhow::Result;

use super::YearshelfClient;
use crate::application::routes::api::complete::CompletedItems;
use crate::domain::categories::Category;
use crate::domain::shelves::ShelfItem;

pub struct CompletionsClient<'a> {
    client: &'a YearshelfClient,
}

impl<'a> CompletionsClient<'a> {
    pub fn new(client: &'a YearshelfClient) -> Self {
        Self { client }
    }

    /// Items completed in `category` during `year`, or the current year when `None`.
    pub async fn category(
        &self,
        category: Category,
        year: Option<u32>,
    ) -> Result<Vec<ShelfItem>> {
        let path = match year {
            Some(year) => format!("api/complete/{category}/{year}"),
            None => format!("api/complete/{category}"),
        };
        self.fetch(&path).await
    }

    /// Movies and TV completed during `year`, newest first.
    pub async fn screen(&self, year: Option<u32>) -> Result<Vec<ShelfItem>> {
        let path = match year {
            Some(year) => format!("api/complete/screen/{year}"),
            None => "api/complete/screen".to_string(),
        };
        self.fetch(&path).await
    }

    async fn fetch(&self, path: &str) -> Result<Vec<ShelfItem>> {
        let url = self.client.endpoint(path)?;
        let items: CompletedItems = self.client.get(url).await?;
        Ok(items.data)
    }
}
