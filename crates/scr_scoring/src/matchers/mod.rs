use std::sync::Arc;
use scr_core::{Error, KeywordMatcher, Result};

pub mod substring;
pub mod token;

pub use substring::SubstringMatcher;
pub use token::TokenMatcher;

/// Names accepted by `create_matcher`.
pub const AVAILABLE_MATCHERS: [&str; 2] = [TokenMatcher::NAME, SubstringMatcher::NAME];

pub fn create_matcher(name: &str) -> Result<Arc<dyn KeywordMatcher>> {
    match name.trim().to_lowercase().as_str() {
        TokenMatcher::NAME => Ok(Arc::new(TokenMatcher)),
        SubstringMatcher::NAME => Ok(Arc::new(SubstringMatcher)),
        other => Err(Error::Config(format!(
            "Unknown keyword matcher '{}'. Available matchers: {}",
            other,
            AVAILABLE_MATCHERS.join(", ")
        ))),
    }
}
