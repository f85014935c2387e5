use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;
use scr_core::error::parse_url;
use scr_core::{ArticleSource, RawArticle, Result};

use super::utils;
use crate::logging::Logger;

/// Google News results through the SerpAPI search endpoint.
#[derive(Clone)]
pub struct SerpApiSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    logger: Logger,
}

impl fmt::Debug for SerpApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiSource")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SerpApiSource {
    pub const NAME: &'static str = "serpapi";
    pub const DEFAULT_BASE_URL: &'static str = "https://serpapi.com";
    pub const SEARCH_QUERY: &'static str = "supply chain disruptions";
    pub const DEFAULT_SOURCE_NAME: &'static str = "Google News";

    /// A missing key is not an error here: the request goes out with an
    /// empty key and upstream rejects it.
    pub fn new(client: Client, base_url: &str, api_key: Option<String>) -> Result<Self> {
        let endpoint = parse_url(&format!("{}/search.json", base_url.trim_end_matches('/')))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            logger: Logger::for_source(Self::NAME),
        })
    }

    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("engine", "google_news")
            .append_pair("q", Self::SEARCH_QUERY)
            .append_pair("api_key", self.api_key.as_deref().unwrap_or_default());
        url
    }

    /// Maps a SerpAPI response body to articles, tolerating missing fields.
    pub fn parse_response(body: &Value) -> Vec<RawArticle> {
        utils::items(body, "news_results")
            .iter()
            .map(|item| RawArticle {
                source: item
                    .get("source")
                    .and_then(|source| utils::string_field(source, "name"))
                    .unwrap_or_else(|| Self::DEFAULT_SOURCE_NAME.to_string()),
                title: utils::string_field(item, "title").unwrap_or_default(),
                summary: utils::string_field(item, "snippet").unwrap_or_default(),
            })
            .collect()
    }
}

#[async_trait]
impl ArticleSource for SerpApiSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn fetch_articles(&self) -> Result<Vec<RawArticle>> {
        let url = self.request_url();
        let body = utils::get_json(&self.client, url.as_str(), Self::NAME, &self.logger).await?;
        let articles = Self::parse_response(&body);
        self.logger.info(&format!("Fetched {} articles", articles.len()));
        Ok(articles)
    }
}
