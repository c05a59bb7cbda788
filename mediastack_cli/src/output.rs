use anyhow::Result;
use mediastack_api::types::Article;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

const MAX_TITLE_WIDTH: usize = 80;

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

// -- Row builders --

fn build_article_rows(articles: &[Article], title_width: Option<usize>) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| {
            let title = a.title.clone().unwrap_or_default();
            ArticleRow {
                published: a
                    .published_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
                source: a.source.clone().unwrap_or_default(),
                category: a.category.clone().unwrap_or_default(),
                country: a.country.clone().unwrap_or_default(),
                title: match title_width {
                    Some(width) => truncate_title(&title, width),
                    None => title,
                },
                url: a.url.clone().unwrap_or_default(),
            }
        })
        .collect()
}

fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        title.to_string()
    } else {
        let cut: String = title.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

// -- Table output --

pub fn print_articles_table(articles: &[Article]) {
    println!(
        "{}",
        Table::new(build_article_rows(articles, Some(MAX_TITLE_WIDTH)))
    );
}

// -- Markdown output --

pub fn print_articles_markdown(articles: &[Article]) {
    let mut table = Table::new(build_article_rows(articles, Some(MAX_TITLE_WIDTH)));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_articles_csv(articles: &[Article]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_article_rows(articles, None) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
