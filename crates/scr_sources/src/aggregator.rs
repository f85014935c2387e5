use std::fmt;
use std::sync::Arc;
use serde::Serialize;
use scr_core::{ArticleSource, RawArticle, Result, RiskReport};
use scr_scoring::RiskScorer;

use crate::logging::Logger;

/// What to do when a source fails to deliver articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Record the failure and carry on as if the source had no articles.
    #[default]
    FailSoft,
    /// Abort the whole batch with the first source error.
    Propagate,
}

/// A source error that `FetchPolicy::FailSoft` turned into an empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReportBatch {
    pub reports: Vec<RiskReport>,
    pub suppressed: Vec<SourceFailure>,
}

/// Fetches from every source in order and scores the combined article list.
pub struct ReportAggregator {
    sources: Vec<Arc<dyn ArticleSource>>,
    scorer: RiskScorer,
    policy: FetchPolicy,
    logger: Logger,
}

impl fmt::Debug for ReportAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportAggregator")
            .field("sources", &self.source_names())
            .field("scorer", &self.scorer)
            .field("policy", &self.policy)
            .finish()
    }
}

impl ReportAggregator {
    pub fn new(scorer: RiskScorer, policy: FetchPolicy) -> Self {
        Self {
            sources: Vec::new(),
            scorer,
            policy,
            logger: Logger::new().with_prefix("[aggregator]".to_string()),
        }
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Arc<dyn ArticleSource>>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Runs one fetch-score cycle and reports which sources were suppressed.
    pub async fn collect(&self) -> Result<ReportBatch> {
        let mut articles = Vec::new();
        let mut suppressed = Vec::new();

        // Sequential on purpose: output order is source order.
        for source in &self.sources {
            match source.fetch_articles().await {
                Ok(fetched) => articles.extend(fetched),
                Err(e) => match self.policy {
                    FetchPolicy::FailSoft => {
                        self.logger.warn(&format!("Source {} unavailable, using no articles: {}", source.name(), e));
                        suppressed.push(SourceFailure {
                            source: source.name().to_string(),
                            reason: e.to_string(),
                        });
                    }
                    FetchPolicy::Propagate => {
                        self.logger.error(&format!("Source {} failed: {}", source.name(), e));
                        return Err(e);
                    }
                },
            }
        }

        self.logger.info(&format!("Fetched {} articles from {} sources", articles.len(), self.sources.len()));
        self.logger.debug(&format!("Fetched articles: {:?}", articles));

        let reports = self.score_articles(articles);
        self.logger.debug(&format!("Generated risk reports: {:?}", reports));

        Ok(ReportBatch { reports, suppressed })
    }

    pub async fn build_reports(&self) -> Result<Vec<RiskReport>> {
        Ok(self.collect().await?.reports)
    }

    /// Scores the raw title and summary; the placeholder only affects the output.
    pub fn score_articles(&self, articles: Vec<RawArticle>) -> Vec<RiskReport> {
        articles
            .into_iter()
            .map(|article| {
                let score = self.scorer.score(&article.scoring_text());
                RiskReport::from_article(article, score)
            })
            .collect()
    }
}
