use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Source {name} failed: {message}")]
    Source { name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn source_failure(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            message: message.into(),
        }
    }

    /// True when the error came from an upstream article source.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Source { .. } | Error::Http(_) | Error::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses and validates an absolute http(s) URL.
pub fn parse_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidUrl(format!("unsupported scheme '{}' in {}", other, url))),
    }
}
