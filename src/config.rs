use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3146";
pub const DEFAULT_KEYWORD: &str = "latest";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub default_keyword: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OMDB_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing required environment variable: OMDB_API_KEY"))?;
        let base_url = non_empty_var("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let bind_raw = non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .with_context(|| format!("BIND_ADDR '{}' is not a socket address", bind_raw))?;
        let default_keyword =
            non_empty_var("DEFAULT_KEYWORD").unwrap_or_else(|| DEFAULT_KEYWORD.to_string());

        Ok(Self {
            api_key,
            base_url,
            bind_addr,
            default_keyword,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
