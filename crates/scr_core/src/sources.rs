use async_trait::async_trait;
use crate::types::RawArticle;
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Short identifier used in logs and failure records
    fn name(&self) -> &str;

    /// Fetches and normalizes the current batch of articles.
    ///
    /// Non-200 responses, transport errors and malformed bodies are all
    /// returned as errors; whether they reach the client is up to the caller.
    async fn fetch_articles(&self) -> Result<Vec<RawArticle>>;
}
