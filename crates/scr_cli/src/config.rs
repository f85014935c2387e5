use std::net::SocketAddr;
use clap::Args;
use scr_core::Result;
use scr_scoring::{RiskScorer, ScoringConfig};
use scr_sources::{default_sources, FetchPolicy, GdeltSource, ReportAggregator, SerpApiSource, SourceConfig};

use crate::duration::HumanDuration;

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address the report service listens on
    #[arg(long, env = "SCR_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,
    /// SerpAPI key. Requests go out without one if unset.
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub serpapi_key: Option<String>,
    #[arg(long, env = "SCR_SERPAPI_URL", default_value = SerpApiSource::DEFAULT_BASE_URL)]
    pub serpapi_url: String,
    #[arg(long, env = "SCR_GDELT_URL", default_value = GdeltSource::DEFAULT_BASE_URL)]
    pub gdelt_url: String,
    /// Comma-separated keyword set replacing the built-in one
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,
    /// Keyword matcher: token (default) or substring
    #[arg(long, default_value = "token")]
    pub matcher: String,
    /// Cap scores at 10 when keywords repeat
    #[arg(long)]
    pub clamp_scores: bool,
    /// Fail the request when any source fails instead of skipping it
    #[arg(long)]
    pub strict: bool,
    /// Outbound request timeout (e.g. 10s). No timeout when unset.
    #[arg(long)]
    pub timeout: Option<HumanDuration>,
}

/// Everything the report service needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub sources: SourceConfig,
    pub scoring: ScoringConfig,
    pub policy: FetchPolicy,
}

impl From<ServeArgs> for ServiceConfig {
    fn from(args: ServeArgs) -> Self {
        let mut scoring = ScoringConfig {
            matcher: args.matcher,
            clamp: args.clamp_scores,
            ..ScoringConfig::default()
        };
        if !args.keywords.is_empty() {
            scoring.keywords = args.keywords;
        }

        Self {
            bind: args.bind,
            sources: SourceConfig {
                serpapi_url: args.serpapi_url,
                serpapi_key: args.serpapi_key.filter(|key| !key.is_empty()),
                gdelt_url: args.gdelt_url,
                timeout: args.timeout.map(|t| t.0),
            },
            scoring,
            policy: if args.strict {
                FetchPolicy::Propagate
            } else {
                FetchPolicy::FailSoft
            },
        }
    }
}

impl ServiceConfig {
    pub fn build_aggregator(&self) -> Result<ReportAggregator> {
        let scorer = RiskScorer::new(self.scoring.clone())?;
        let client = self.sources.build_client()?;
        let sources = default_sources(&self.sources, client)?;
        Ok(ReportAggregator::new(scorer, self.policy).with_sources(sources))
    }

    pub fn log_summary(&self) {
        if self.sources.serpapi_key.is_none() {
            tracing::warn!("⚠️ SERPAPI_KEY is not set, SerpAPI requests will be rejected upstream");
        }
        tracing::info!(
            "🔑 Keywords: {} (matcher: {}, clamp: {})",
            self.scoring.keywords.join(", "),
            self.scoring.matcher,
            self.scoring.clamp
        );
        tracing::info!("🛡️ Fetch policy: {:?}", self.policy);
    }
}
