//! Query OMDb and print the records the server would render.
//! Usage:
//!   cargo run --bin omdb_props -- search <keyword> [page]
//!   cargo run --bin omdb_props -- title <imdb_id>
//! Requires OMDB_API_KEY in the environment (.env supported).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use reelfinder::config::Config;
use reelfinder::omdb::{parse_imdb_id, OmdbApi, OmdbClient};
use reelfinder::pagination::PageWindow;
use serde_json::json;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
enum QueryKind {
    Search,
    Title,
}

impl FromStr for QueryKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "search" => Ok(QueryKind::Search),
            "title" => Ok(QueryKind::Title),
            _ => Err(anyhow::anyhow!("query kind must be 'search' or 'title'")),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: cargo run --bin omdb_props -- search <keyword> [page]");
        eprintln!("       cargo run --bin omdb_props -- title <imdb_id>");
        std::process::exit(1);
    }

    let kind = QueryKind::from_str(&args[1])?;
    let config = Config::from_env()?;
    let client = OmdbClient::from_config(&config)?;

    match kind {
        QueryKind::Search => {
            let page: u32 = match args.get(3) {
                Some(raw) => raw.parse().context("page must be a positive integer")?,
                None => 1,
            };
            let result = client.search(&args[2], page).await?;
            let window = PageWindow::compute(page, result.total_results);
            let out = json!({
                "keyword": args[2],
                "page": page,
                "total_results": result.total_results,
                "total_pages": window.total_pages,
                "page_buttons": window.pages().collect::<Vec<_>>(),
                "movies": result.movies,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        QueryKind::Title => {
            let id = parse_imdb_id(&args[2])
                .ok_or_else(|| anyhow::anyhow!("'{}' is not an IMDb id (tt1234567)", args[2]))?;
            match client.fetch_title(&id).await? {
                Some(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
                None => println!("OMDb has no record for {}", id),
            }
        }
    }

    Ok(())
}
