//! Client configuration

use std::{env, time::Duration};

use url::Url;

use crate::errors::{BiliError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.bilibili.com";
pub const DEFAULT_WEB_BASE: &str = "https://www.bilibili.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base of the JSON API (`api.bilibili.com`)
    pub api_base: Url,
    /// Base of the server-rendered site (`www.bilibili.com`)
    pub web_base: Url,
    /// Browser-like user agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Stop category pagination after this many pages. `None` follows the
    /// cursor until the service reports no more pages.
    pub max_category_pages: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid url"),
            web_base: Url::parse(DEFAULT_WEB_BASE).expect("default web base is a valid url"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_category_pages: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration overridden by `BILI_API_BASE`, `BILI_WEB_BASE`,
    /// `BILI_USER_AGENT` and `BILI_TIMEOUT_SECS` (a `.env` file is honoured).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        if let Ok(base) = env::var("BILI_API_BASE") {
            config.api_base = Url::parse(&base)?;
        }
        if let Ok(base) = env::var("BILI_WEB_BASE") {
            config.web_base = Url::parse(&base)?;
        }
        if let Ok(user_agent) = env::var("BILI_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Ok(secs) = env::var("BILI_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }

        Ok(config)
    }

    /// Point both the API and the web pages at one host, as tests do with a mock server.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(Self {
            api_base: base.clone(),
            web_base: base,
            ..Self::default()
        })
    }

    pub fn with_max_category_pages(mut self, pages: usize) -> Self {
        self.max_category_pages = Some(pages);
        self
    }
}

fn parse_timeout(secs: &str) -> Result<Duration> {
    secs.trim()
        .parse()
        .map(Duration::from_secs)
        .map_err(|_| BiliError::InvalidConfig {
            key: "BILI_TIMEOUT_SECS",
            value: secs.to_string(),
        })
}
