use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;

pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/200x300";

#[async_trait]
pub trait OmdbApi: Send + Sync {
    async fn search(&self, keyword: &str, page: u32) -> Result<SearchPage>;
    async fn fetch_title(&self, imdb_id: &str) -> Result<Option<TitleDetail>>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchPage {
    pub movies: Vec<SearchSummary>,
    pub total_results: u32,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Full record for one title. Values are kept exactly as OMDb sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Rated", default, skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(rename = "Runtime", default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(rename = "imdbRating", default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchSummary>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(flatten)]
    detail: TitleDetail,
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let user_agent = format!("reelfinder/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .context("Failed to build OMDb HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn search_url(&self, keyword: &str, page: u32) -> String {
        format!(
            "{}?apikey={}&s={}&page={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(keyword),
            page
        )
    }

    fn lookup_url(&self, imdb_id: &str) -> String {
        format!(
            "{}?apikey={}&i={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(imdb_id)
        )
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .context("request failed")?;
        let status = res.status();
        let text = res.text().await.context("reading body failed")?;
        if !status.is_success() {
            // The url carries the api key, keep it out of the error.
            return Err(anyhow!("OMDb returned {} -> {}", status, text));
        }
        let parsed: T = serde_json::from_str(&text).context("JSON parse failed")?;
        Ok(parsed)
    }
}

#[async_trait]
impl OmdbApi for OmdbClient {
    async fn search(&self, keyword: &str, page: u32) -> Result<SearchPage> {
        let data: SearchResponse = self.get_json(&self.search_url(keyword, page)).await?;
        if data.response != "True" {
            debug!(
                keyword = %keyword,
                page,
                error = ?data.error,
                "OMDb reported no results"
            );
            return Ok(SearchPage::empty());
        }
        let total_results = data
            .total_results
            .as_deref()
            .and_then(|t| t.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Ok(SearchPage {
            movies: data.search,
            total_results,
        })
    }

    async fn fetch_title(&self, imdb_id: &str) -> Result<Option<TitleDetail>> {
        let data: DetailResponse = self.get_json(&self.lookup_url(imdb_id)).await?;
        if data.response != "True" {
            debug!(imdb_id = %imdb_id, error = ?data.error, "OMDb lookup failed");
            return Ok(None);
        }
        Ok(Some(data.detail))
    }
}

/// Runs a search and collapses every failure into an empty page.
pub async fn search_or_empty(api: &dyn OmdbApi, keyword: &str, page: u32) -> SearchPage {
    match api.search(keyword, page).await {
        Ok(result) => result,
        Err(e) => {
            warn!(
                "Error fetching data for page {} with keyword \"{}\": {:#}",
                page, keyword, e
            );
            SearchPage::empty()
        }
    }
}

pub async fn fetch_title_or_none(api: &dyn OmdbApi, imdb_id: &str) -> Option<TitleDetail> {
    match api.fetch_title(imdb_id).await {
        Ok(detail) => detail,
        Err(e) => {
            warn!("Error fetching movie details for {}: {:#}", imdb_id, e);
            None
        }
    }
}

pub fn poster_or_placeholder(poster: &str) -> &str {
    let trimmed = poster.trim();
    if trimmed.is_empty() || trimmed == "N/A" {
        POSTER_PLACEHOLDER
    } else {
        poster
    }
}

pub fn parse_imdb_id(input: &str) -> Option<String> {
    let lower = input.trim().to_lowercase();
    if lower.starts_with("tt") && lower.len() > 2 && lower[2..].chars().all(|c| c.is_ascii_digit())
    {
        return Some(lower);
    }
    None
}
