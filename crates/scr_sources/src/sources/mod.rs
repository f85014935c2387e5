use std::sync::Arc;
use std::time::Duration;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use scr_core::{ArticleSource, Error, Result};

pub mod gdelt;
pub mod serpapi;

pub use gdelt::GdeltSource;
pub use serpapi::SerpApiSource;

use crate::logging::Logger;

/// Endpoints and credentials for the upstream article APIs.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub serpapi_url: String,
    pub serpapi_key: Option<String>,
    pub gdelt_url: String,
    /// Outbound request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            serpapi_url: SerpApiSource::DEFAULT_BASE_URL.to_string(),
            serpapi_key: None,
            gdelt_url: GdeltSource::DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl SourceConfig {
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// Builds the adapters in the order their reports are emitted.
pub fn default_sources(config: &SourceConfig, client: Client) -> Result<Vec<Arc<dyn ArticleSource>>> {
    Ok(vec![
        Arc::new(SerpApiSource::new(
            client.clone(),
            &config.serpapi_url,
            config.serpapi_key.clone(),
        )?),
        Arc::new(GdeltSource::new(client, &config.gdelt_url)?),
    ])
}

/// Common utilities for source adapters
pub(crate) mod utils {
    use super::*;

    /// Sends a GET and returns the parsed JSON body of a 200 response.
    pub async fn get_json(client: &Client, url: &str, source: &str, logger: &Logger) -> Result<Value> {
        logger.debug(&format!("GET {}", redact_api_key(url)));
        // reqwest errors embed the request URL, which may carry the API key
        let response = client.get(url).send().await.map_err(strip_url)?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            logger.warn(&format!("Response error {}: {}", status, body));
            return Err(Error::source_failure(source, format!("HTTP {}", status)));
        }

        let body = response.text().await.map_err(strip_url)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn strip_url(e: reqwest::Error) -> Error {
        Error::Http(e.without_url())
    }

    /// Returns the array under `field`, or nothing when it is missing or not an array.
    pub fn items<'a>(body: &'a Value, field: &str) -> &'a [Value] {
        body.get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn string_field(item: &Value, field: &str) -> Option<String> {
        item.get(field).and_then(Value::as_str).map(str::to_string)
    }

    pub fn redact_api_key(url: &str) -> String {
        match url::Url::parse(url) {
            Ok(mut parsed) => {
                let pairs: Vec<(String, String)> = parsed
                    .query_pairs()
                    .map(|(k, v)| {
                        let v = if k == "api_key" { "<redacted>".to_string() } else { v.into_owned() };
                        (k.into_owned(), v)
                    })
                    .collect();
                if pairs.is_empty() {
                    return parsed.to_string();
                }
                parsed.query_pairs_mut().clear().extend_pairs(pairs);
                parsed.to_string()
            }
            Err(_) => url.to_string(),
        }
    }
}
