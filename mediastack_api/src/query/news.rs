use chrono::NaiveDate;

use crate::types::{Category, SortOrder};

use super::common::{Query, QueryOptions};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Typed builder for `/news` queries.
///
/// Exclusions are encoded with the API's `-` prefix. The builder does not
/// check country or language codes; the client's sanitizing step drops
/// anything the API does not support.
#[derive(Default, Clone, Debug)]
pub struct NewsQuery {
    pub sources: Vec<String>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
    pub keywords: Option<String>,
    pub date: Option<String>,
    pub sort: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Query for NewsQuery {
    fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        if !self.sources.is_empty() {
            options.set("sources", self.sources.join(","));
        }
        if !self.categories.is_empty() {
            options.set("categories", self.categories.join(","));
        }
        if !self.countries.is_empty() {
            options.set("countries", self.countries.join(","));
        }
        if !self.languages.is_empty() {
            options.set("languages", self.languages.join(","));
        }
        if let Some(keywords) = &self.keywords {
            options.set("keywords", keywords.as_str());
        }
        if let Some(date) = &self.date {
            options.set("date", date.as_str());
        }
        if let Some(sort) = self.sort {
            options.set("sort", sort.to_string());
        }
        if let Some(limit) = self.limit {
            options.set("limit", limit);
        }
        if let Some(offset) = self.offset {
            options.set("offset", offset);
        }
        options
    }
}

impl NewsQuery {
    pub fn with_source(mut self, source: &str) -> Self {
        self.sources.push(source.to_string());
        self
    }
    pub fn exclude_source(mut self, source: &str) -> Self {
        self.sources.push(format!("-{}", source));
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category.to_string());
        self
    }
    pub fn exclude_category(mut self, category: Category) -> Self {
        self.categories.push(format!("-{}", category));
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.push(country.to_string());
        self
    }
    pub fn exclude_country(mut self, country: &str) -> Self {
        self.countries.push(format!("-{}", country));
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.languages.push(language.to_string());
        self
    }
    pub fn exclude_language(mut self, language: &str) -> Self {
        self.languages.push(format!("-{}", language));
        self
    }

    /// Free-text search. Prefix a word with `-` to exclude it.
    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Restricts results to articles published on `date`.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    /// Restricts results to an inclusive date range.
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date = Some(format!(
            "{},{}",
            from.format(DATE_FORMAT),
            to.format(DATE_FORMAT)
        ));
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{validate_params, DefaultsMode, OptionValue, Query};
    use crate::types::{Category, SortOrder};

    use super::NewsQuery;

    #[test]
    fn default_query_is_empty() {
        assert!(NewsQuery::default().to_options().is_empty());
    }

    #[test]
    fn builder_encodes_lists_and_exclusions() {
        let options = NewsQuery::default()
            .with_category(Category::Business)
            .exclude_category(Category::Sports)
            .with_source("cnn")
            .exclude_source("bbc")
            .with_country("us")
            .exclude_language("de")
            .to_options();

        assert_eq!(
            options.get("categories"),
            Some(&OptionValue::from("business,-sports"))
        );
        assert_eq!(options.get("sources"), Some(&OptionValue::from("cnn,-bbc")));
        assert_eq!(options.get("countries"), Some(&OptionValue::from("us")));
        assert_eq!(options.get("languages"), Some(&OptionValue::from("-de")));
    }

    #[test]
    fn builder_formats_dates() {
        let day = NaiveDate::from_ymd_opt(2020, 12, 24).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();

        let options = NewsQuery::default().with_date(day).to_options();
        assert_eq!(options.get("date"), Some(&OptionValue::from("2020-12-24")));

        let options = NewsQuery::default().with_date_range(day, end).to_options();
        assert_eq!(
            options.get("date"),
            Some(&OptionValue::from("2020-12-24,2020-12-31"))
        );
    }

    #[test]
    fn builder_scalars() {
        let options = NewsQuery::default()
            .with_keywords("tennis -wimbledon")
            .with_sort(SortOrder::Popularity)
            .with_limit(25)
            .with_offset(50)
            .to_options();

        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["keywords", "sort", "limit", "offset"]);
        assert_eq!(options.get("sort"), Some(&OptionValue::from("popularity")));
        assert_eq!(options.get("limit"), Some(&OptionValue::Integer(25)));
    }

    #[test]
    fn unsupported_codes_are_dropped_by_sanitizing() {
        let options = NewsQuery::default()
            .with_country("gb")
            .with_country("atlantis")
            .with_language("klingon")
            .to_options();
        let params = validate_params("k", &options, DefaultsMode::Always);

        assert_eq!(params.get("countries"), Some(&OptionValue::from("gb")));
        assert_eq!(params.get("languages"), Some(&OptionValue::from("")));
    }
}
