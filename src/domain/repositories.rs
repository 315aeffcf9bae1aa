use async_trait::async_trait;

use super::errors::ShelfError;
use crate::domain::categories::Category;
use crate::domain::shelves::{ShelfPage, ShelfType};

/// Source of shelf pages. Implementations must tolerate concurrent callers.
#[async_trait]
pub trait ShelfRepository: Send + Sync {
    /// Fetch one page (1-based) of a category's shelf, with cover URLs
    /// already rewritten to thumbnails.
    async fn fetch_page(
        &self,
        category: Category,
        page: u64,
        shelf_type: ShelfType,
    ) -> Result<ShelfPage, ShelfError>;
}
