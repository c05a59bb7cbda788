//! Parameter sanitizing for the `/news` endpoint.
//!
//! [`validate_params`] never fails: unknown keys are skipped, list entries
//! outside the API's vocabulary are dropped, and an unsupported `sort` is
//! removed. Defaults are then filled in according to a [`DefaultsMode`].

use std::str::FromStr;

use url::Url;

use crate::types::{Category, SortOrder, COUNTRIES, LANGUAGES};

use super::common::{upsert, OptionValue, QueryOptions};

pub const ACCESS_KEY_PARAM: &str = "access_key";

pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_SORT: SortOrder = SortOrder::PublishedDesc;
pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Key the language default is sent under. The misspelling is what the
/// existing integration has always put on the wire, so the API ignores it
/// and no language filter is applied by default.
pub const DEFAULT_LANGUAGE_KEY: &str = "langauages";

/// When defaults are filled in.
///
/// Has no `Default`; callers must choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultsMode {
    /// Fill in absent defaults after every input key is processed. An empty
    /// option set therefore gets no defaults at all.
    Legacy,
    /// Fill in absent defaults once, after all keys, even for empty input.
    Always,
}

impl std::fmt::Display for DefaultsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DefaultsMode::Legacy => "legacy",
                DefaultsMode::Always => "always",
            }
        )
    }
}

impl FromStr for DefaultsMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(DefaultsMode::Legacy),
            "always" => Ok(DefaultsMode::Always),
            _ => Err(()),
        }
    }
}

/// Parameters ready to be URL-encoded. `access_key` is always the first
/// entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedParams {
    entries: Vec<(String, OptionValue)>,
}

impl SanitizedParams {
    fn new(access_key: &str) -> Self {
        Self {
            entries: vec![(
                ACCESS_KEY_PARAM.to_string(),
                OptionValue::Text(access_key.to_string()),
            )],
        }
    }

    fn insert(&mut self, key: &str, value: impl Into<OptionValue>) {
        upsert(&mut self.entries, key.to_string(), value.into());
    }

    fn insert_if_absent(&mut self, key: &str, value: impl Into<OptionValue>) {
        if !self.contains_key(key) {
            self.insert(key, value);
        }
    }

    pub fn access_key(&self) -> &str {
        match self.get(ACCESS_KEY_PARAM) {
            Some(OptionValue::Text(key)) => key,
            _ => "",
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the access key is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Appends every parameter to the URL's query string, in order.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.iter() {
                pairs.append_pair(key, &value.to_string());
            }
        }
        url
    }

    /// Form-urlencoded `key=value&...` string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }

    /// Like [`SanitizedParams::to_query_string`] with the access key masked,
    /// for logs and dry runs.
    pub fn to_redacted_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            if key == ACCESS_KEY_PARAM {
                serializer.append_pair(key, "***");
            } else {
                serializer.append_pair(key, &value.to_string());
            }
        }
        serializer.finish()
    }
}

/// Sanitizes `options` for the `/news` endpoint and injects `access_key`.
pub fn validate_params(
    access_key: &str,
    options: &QueryOptions,
    mode: DefaultsMode,
) -> SanitizedParams {
    let mut valid = SanitizedParams::new(access_key);

    for (key, value) in options.iter() {
        match key {
            "sources" | "date" | "limit" | "offset" => valid.insert(key, value.clone()),
            "categories" => valid.insert(
                key,
                filter_list(value, |item| Category::from_str(item).is_ok()),
            ),
            "countries" => valid.insert(key, filter_list(value, |item| COUNTRIES.contains(&item))),
            "languages" => valid.insert(key, filter_list(value, |item| LANGUAGES.contains(&item))),
            "keywords" => valid.insert(key, value.to_string().replace(',', "")),
            "sort" => {
                if let OptionValue::Text(sort) = value {
                    if SortOrder::from_str(sort).is_ok() {
                        valid.insert(key, sort.as_str());
                    }
                }
            }
            _ => {}
        }

        if mode == DefaultsMode::Legacy {
            inject_defaults(&mut valid);
        }
    }

    if mode == DefaultsMode::Always {
        inject_defaults(&mut valid);
    }

    valid
}

fn inject_defaults(valid: &mut SanitizedParams) {
    valid.insert_if_absent("limit", DEFAULT_LIMIT);
    valid.insert_if_absent("sort", DEFAULT_SORT.to_string());
    valid.insert_if_absent(DEFAULT_LANGUAGE_KEY, DEFAULT_LANGUAGE);
    valid.insert_if_absent("countries", DEFAULT_COUNTRY);
}

/// Splits a comma-joined list and keeps entries accepted by `allowed`. A
/// single leading `-` marks an exclusion; it is ignored for the check and
/// kept on the output.
/// Keeps the entries `allowed` accepts. A single leading `-` marks an
/// exclusion and is ignored for the check; any other hyphen is part of the
/// entry, so `--sports` and `spo-rts` are rejected.
fn filter_list(value: &OptionValue, allowed: impl Fn(&str) -> bool) -> String {
    value
        .to_string()
        .split(',')
        .filter(|item| allowed(item.strip_prefix('-').unwrap_or(*item)))
        .collect::<Vec<_>>()
        .join(",")
}
