//! Article records returned by the `/news` endpoint.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an optional field, turning values of the wrong type or format into
/// `None` so one odd field does not reject the whole record.
pub(super) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A single news article.
///
/// Every field is optional: the API omits or nulls fields it could not
/// extract from the source page. Values that do not fit are read as `None`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<String>,

    /// Headline.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    /// Link to the full article.
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,

    /// Publisher name, e.g. "CNN".
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,

    /// Category name; see [`super::Category`] for the values the API uses.
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,

    /// Publication timestamp, e.g. `2020-08-05T05:47:24+00:00`.
    #[serde(default, deserialize_with = "lenient")]
    pub published_at: Option<DateTime<FixedOffset>>,
}
