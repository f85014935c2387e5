use serde::{Deserialize, Serialize};

/// Shown in place of an empty article summary.
pub const SUMMARY_PLACEHOLDER: &str = "Summary not available";

/// An article as normalized by a source adapter, before scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawArticle {
    pub source: String,
    pub title: String,
    pub summary: String,
}

impl RawArticle {
    pub fn new(source: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// The text the risk scorer sees: title and raw summary joined by a space.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// A scored article, ready to be served and rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub source: String,
    pub title: String,
    pub risk_score: f64,
    pub summary: String,
}

impl RiskReport {
    pub fn from_article(article: RawArticle, risk_score: f64) -> Self {
        let summary = if article.summary.is_empty() {
            SUMMARY_PLACEHOLDER.to_string()
        } else {
            article.summary
        };

        Self {
            source: article.source,
            title: article.title,
            risk_score,
            summary,
        }
    }
}
