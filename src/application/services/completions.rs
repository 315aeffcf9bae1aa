use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{Instrument, debug};

use crate::domain::categories::Category;
use crate::domain::errors::ShelfError;
use crate::domain::pagination::stop_reason;
use crate::domain::repositories::ShelfRepository;
use crate::domain::shelves::{ShelfItem, ShelfType, merge_newest_first};
use crate::domain::year_window::YearWindow;

/// Collects what a user completed within a calendar year.
#[derive(Clone)]
pub struct CompletionService {
    shelves: Arc<dyn ShelfRepository>,
}

impl CompletionService {
    pub fn new(shelves: Arc<dyn ShelfRepository>) -> Self {
        Self { shelves }
    }

    /// Page through the `complete` shelf newest first until the stop rule
    /// fires, then keep only items inside `window`.
    ///
    /// Pages are fetched one at a time since each stop decision needs the
    /// previous page. Items fetched only to find the boundary are dropped by
    /// the final filter.
    #[tracing::instrument(skip(self, window), fields(year = window.year()))]
    pub async fn completed_in_year(
        &self,
        category: Category,
        window: &YearWindow,
    ) -> Result<Vec<ShelfItem>, ShelfError> {
        let mut items = Vec::new();
        let mut page_number = 1;

        loop {
            let page = self
                .shelves
                .fetch_page(category, page_number, ShelfType::Complete)
                .await?;
            let reason = stop_reason(page_number, &page, items.len() + page.data.len(), window);
            items.extend(page.data);

            if let Some(reason) = reason {
                debug!(%category, pages_fetched = page_number, %reason, "stopped paging");
                break;
            }
            page_number += 1;
        }

        items.retain(|item| window.contains(&item.created_time));
        Ok(items)
    }

    /// Movies and TV for the year as one feed, newest first.
    ///
    /// Both categories are paged concurrently. The first failure is returned;
    /// the other task is left to finish on its own and its result discarded.
    #[tracing::instrument(skip(self, window), fields(year = window.year()))]
    pub async fn completed_screen_in_year(
        &self,
        window: &YearWindow,
    ) -> Result<Vec<ShelfItem>, ShelfError> {
        let [movie, tv] = Category::SCREEN;
        let movies = self.spawn_completed(movie, window.clone());
        let shows = self.spawn_completed(tv, window.clone());

        let (movies, shows) = futures::future::try_join(join(movies), join(shows)).await?;

        Ok(merge_newest_first([movies, shows]))
    }

    fn spawn_completed(
        &self,
        category: Category,
        window: YearWindow,
    ) -> JoinHandle<Result<Vec<ShelfItem>, ShelfError>> {
        let service = self.clone();
        tokio::spawn(
            async move { service.completed_in_year(category, &window).await }
                .instrument(tracing::Span::current()),
        )
    }
}

async fn join(
    handle: JoinHandle<Result<Vec<ShelfItem>, ShelfError>>,
) -> Result<Vec<ShelfItem>, ShelfError> {
    handle.await?
}
