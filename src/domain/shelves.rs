use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JPG_THUMBNAIL_SUFFIX: &str = ".200x200_q85_autocrop_crop-scale.jpg";
pub const PNG_THUMBNAIL_SUFFIX: &str = ".200x200_q85_autocrop_crop-scale.png";

/// Status bucket a shelf item lives in on the upstream service.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShelfType {
    Wishlist,
    Progress,
    #[default]
    Complete,
    Dropped,
}

impl ShelfType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfType::Wishlist => "wishlist",
            ShelfType::Progress => "progress",
            ShelfType::Complete => "complete",
            ShelfType::Dropped => "dropped",
        }
    }
}

impl fmt::Display for ShelfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The media entry nested inside a shelf item. Fields we don't interpret are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfEntry {
    pub id: String,
    pub display_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShelfEntry {
    pub fn apply_thumbnail_suffix(&mut self) {
        if let Some(url) = self.cover_image_url.as_mut()
            && let Some(suffix) = thumbnail_suffix(url)
        {
            url.push_str(suffix);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfItem {
    pub item: ShelfEntry,
    /// ISO-8601 UTC, fixed width, so string order is chronological order.
    pub created_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of a shelf, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPage {
    pub data: Vec<ShelfItem>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
}

impl ShelfPage {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            count: 0,
            pages: 0,
        }
    }

    /// The last item on the page, which is the oldest given upstream ordering.
    pub fn oldest(&self) -> Option<&ShelfItem> {
        self.data.last()
    }

    pub fn apply_thumbnail_suffixes(&mut self) {
        for item in &mut self.data {
            item.item.apply_thumbnail_suffix();
        }
    }
}

fn thumbnail_suffix(url: &str) -> Option<&'static str> {
    if url.ends_with(".jpg") {
        Some(JPG_THUMBNAIL_SUFFIX)
    } else if url.ends_with(".png") {
        Some(PNG_THUMBNAIL_SUFFIX)
    } else {
        None
    }
}

/// Combine several result sets into one feed ordered by `created_time`,
/// most recent first. Equal timestamps keep their input order.
pub fn merge_newest_first<I>(lists: I) -> Vec<ShelfItem>
where
    I: IntoIterator<Item = Vec<ShelfItem>>,
{
    let mut merged: Vec<ShelfItem> = lists.into_iter().flatten().collect();
    merged.sort_by(|a, b| b.created_time.cmp(&a.created_time));
    merged
}
