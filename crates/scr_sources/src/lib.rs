pub mod aggregator;
pub mod logging;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aggregator::{FetchPolicy, ReportAggregator, ReportBatch, SourceFailure};
pub use sources::{default_sources, GdeltSource, SerpApiSource, SourceConfig};

pub mod prelude {
    pub use super::aggregator::{FetchPolicy, ReportAggregator};
    pub use scr_core::{ArticleSource, Error, RawArticle, Result, RiskReport};
}
