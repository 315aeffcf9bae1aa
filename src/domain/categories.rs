use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Media categories tracked on the upstream shelf.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Book,
    Music,
    Game,
    Movie,
    Tv,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Book,
        Category::Music,
        Category::Game,
        Category::Movie,
        Category::Tv,
    ];

    /// The categories merged into the combined screen feed.
    pub const SCREEN: [Category; 2] = [Category::Movie, Category::Tv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Music => "music",
            Category::Game => "game",
            Category::Movie => "movie",
            Category::Tv => "tv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category")]
pub struct InvalidCategory;

impl FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(Category::Book),
            "music" => Ok(Category::Music),
            "game" => Ok(Category::Game),
            "movie" => Ok(Category::Movie),
            "tv" => Ok(Category::Tv),
            _ => Err(InvalidCategory),
        }
    }
}
