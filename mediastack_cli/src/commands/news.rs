use anyhow::{Context, Result};
use clap::Args;
use mediastack_api::{Client, Error, OptionValue, QueryOptions};

use crate::output::{
    print_articles_csv, print_articles_markdown, print_articles_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct NewsArgs {
    /// Comma-separated source ids; prefix with - to exclude (e.g. cnn,-bbc)
    #[arg(long)]
    pub sources: Option<String>,

    /// Comma-separated categories: general, business, entertainment, health,
    /// science, sports, technology, politics. Prefix with - to exclude
    #[arg(long)]
    pub categories: Option<String>,

    /// Comma-separated two-letter country codes (e.g. us,gb,-de)
    #[arg(long)]
    pub countries: Option<String>,

    /// Comma-separated two-letter language codes (e.g. en,-de)
    #[arg(long)]
    pub languages: Option<String>,

    /// Search keywords; prefix a word with - to exclude it
    #[arg(long)]
    pub keywords: Option<String>,

    /// A date (2020-12-24) or an inclusive range (2020-12-24,2020-12-31)
    #[arg(long)]
    pub date: Option<String>,

    /// Sort order: published_desc, published_asc, popularity
    #[arg(long)]
    pub sort: Option<String>,

    /// Number of results
    #[arg(long)]
    pub limit: Option<String>,

    /// Pagination offset
    #[arg(long)]
    pub offset: Option<String>,

    /// Print the sanitized query (access key masked) instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Canonical integers go out as integers. Anything else, including `007` or
/// `+5`, is passed through as the exact text given.
fn passthrough(value: &str) -> OptionValue {
    match value.parse::<i64>() {
        Ok(n) if n.to_string() == value => OptionValue::Integer(n),
        _ => OptionValue::from(value),
    }
}

pub(crate) fn build_options(args: &NewsArgs) -> QueryOptions {
    let mut options = QueryOptions::new();
    let text_fields = [
        ("sources", &args.sources),
        ("categories", &args.categories),
        ("countries", &args.countries),
        ("languages", &args.languages),
        ("keywords", &args.keywords),
        ("date", &args.date),
        ("sort", &args.sort),
    ];
    for (key, value) in text_fields {
        if let Some(value) = value {
            options.set(key, value.as_str());
        }
    }
    if let Some(ref limit) = args.limit {
        options.set("limit", passthrough(limit));
    }
    if let Some(ref offset) = args.offset {
        options.set("offset", passthrough(offset));
    }
    options
}

pub async fn run(args: &NewsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = build_options(args);

    if args.dry_run {
        let params = client.sanitize(&options);
        println!("/v1/news?{}", params.to_redacted_query_string());
        return Ok(());
    }

    let page = match client.get_news(&options).await {
        Ok(page) => page,
        Err(Error::MissingAccessKey) => {
            return Err(Error::MissingAccessKey)
                .context("set MEDIASTACK_ACCESS_KEY in the environment or a .env file");
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ref paging) = page.pagination {
        let count = paging.count.unwrap_or(page.data.len() as i64);
        match paging.total {
            Some(total) => eprintln!(
                "Showing {} of {} articles (offset {})",
                count,
                total,
                paging.offset.unwrap_or(0)
            ),
            None => eprintln!("Showing {} articles", count),
        }
    }

    match format {
        OutputFormat::Table => print_articles_table(&page.data),
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Csv => print_articles_csv(&page.data)?,
        OutputFormat::Markdown => print_articles_markdown(&page.data),
    }

    Ok(())
}
