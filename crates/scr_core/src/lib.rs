pub mod error;
pub mod models;
pub mod sources;
pub mod types;

pub use error::{Error, Result};
pub use models::KeywordMatcher;
pub use sources::ArticleSource;
pub use types::{RawArticle, RiskReport, SUMMARY_PLACEHOLDER};
