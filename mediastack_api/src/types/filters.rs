//! Enumerated filter values accepted by the `/news` endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Two-letter country codes the API can filter on.
pub const COUNTRIES: &[&str] = &[
    "ar", "au", "at", "br", "bg", "ca", "co", "cz", "eg", "de", "gr", "hk", "in", "id", "ie",
    "it", "jp", "lv", "my", "mx", "ma", "nz", "ng", "no", "pl", "pt", "ro", "rs", "sg", "sk",
    "za", "kr", "se", "tw", "th", "tr", "ua", "gb", "us", "ve", "ae", "ch", "si", "sa", "ph",
    "nl", "lt", "il", "hu", "fr", "cn", "be",
];

/// Two-letter language codes the API can filter on.
pub const LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "se", "zh",
];

/// News category.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
    Politics,
}
impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::General => "general",
                Category::Business => "business",
                Category::Entertainment => "entertainment",
                Category::Health => "health",
                Category::Science => "science",
                Category::Sports => "sports",
                Category::Technology => "technology",
                Category::Politics => "politics",
            }
        )
    }
}
impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            "politics" => Ok(Category::Politics),
            _ => Err(()),
        }
    }
}

/// Result ordering. The API default is [`SortOrder::PublishedDesc`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest first.
    #[default]
    PublishedDesc,
    /// Oldest first.
    PublishedAsc,
    Popularity,
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::PublishedDesc => "published_desc",
                SortOrder::PublishedAsc => "published_asc",
                SortOrder::Popularity => "popularity",
            }
        )
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published_desc" => Ok(SortOrder::PublishedDesc),
            "published_asc" => Ok(SortOrder::PublishedAsc),
            "popularity" => Ok(SortOrder::Popularity),
            _ => Err(()),
        }
    }
}
