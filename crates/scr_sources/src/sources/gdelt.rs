use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;
use scr_core::error::parse_url;
use scr_core::{ArticleSource, RawArticle, Result};

use super::utils;
use crate::logging::Logger;

/// Article list from the GDELT DOC 2.0 API.
#[derive(Debug, Clone)]
pub struct GdeltSource {
    client: Client,
    url: Url,
    logger: Logger,
}

impl GdeltSource {
    pub const NAME: &'static str = "gdelt";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.gdeltproject.org";
    pub const DOC_PATH: &'static str = "/api/v2/doc/doc";
    pub const QUERY: &'static str = "query=supply%20chain&mode=artlist&format=json";
    pub const SOURCE_NAME: &'static str = "GDELT";

    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let url = parse_url(&format!(
            "{}{}?{}",
            base_url.trim_end_matches('/'),
            Self::DOC_PATH,
            Self::QUERY
        ))?;
        Ok(Self {
            client,
            url,
            logger: Logger::for_source(Self::NAME),
        })
    }

    pub fn request_url(&self) -> &Url {
        &self.url
    }

    pub fn parse_response(body: &Value) -> Vec<RawArticle> {
        utils::items(body, "articles")
            .iter()
            .map(|item| RawArticle {
                source: Self::SOURCE_NAME.to_string(),
                title: utils::string_field(item, "title").unwrap_or_default(),
                summary: utils::string_field(item, "snippet").unwrap_or_default(),
            })
            .collect()
    }
}

#[async_trait]
impl ArticleSource for GdeltSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn fetch_articles(&self) -> Result<Vec<RawArticle>> {
        let body = utils::get_json(&self.client, self.url.as_str(), Self::NAME, &self.logger).await?;
        let articles = Self::parse_response(&body);
        self.logger.info(&format!("Fetched {} articles", articles.len()));
        Ok(articles)
    }
}
