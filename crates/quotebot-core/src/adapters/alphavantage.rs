use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::{Granularity, Symbol, TimeSeries};
use crate::http_client::{HttpClient, HttpRequest};

/// Query endpoint all series requests go to.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Upstream fetch failures, kept distinct from an unknown symbol.
///
/// An unknown symbol is a well-formed provider answer and is reported as an
/// absent series (`Ok(None)`), not as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("malformed provider response: {message}")]
    MalformedResponse { message: String },

    /// The provider acknowledged the request but refused it with its
    /// free-tier `Note` payload.
    #[error("provider throttled the request: {note}")]
    Throttled { note: String },
}

/// Alpha Vantage time-series client.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
    timeout_ms: u64,
}

impl AlphaVantageClient {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fetches the series for one symbol at the requested granularity.
    ///
    /// `Ok(None)` means the response was well-formed but carried no series
    /// under the expected key: the provider answers that way for symbols it
    /// does not recognize.
    pub async fn fetch_series(
        &self,
        symbol: &Symbol,
        granularity: Granularity,
    ) -> Result<Option<TimeSeries>, ProviderError> {
        log::debug!("fetching {granularity} series for {symbol}");

        let request =
            HttpRequest::get(self.query_url(symbol, granularity)).with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| ProviderError::Transport {
                message: error.message().to_owned(),
            })?;

        if !response.is_success() {
            return Err(ProviderError::Status {
                status: response.status,
            });
        }

        let body: Value =
            serde_json::from_str(&response.body).map_err(|error| ProviderError::MalformedResponse {
                message: error.to_string(),
            })?;

        if let Some(note) = body.get("Note").and_then(Value::as_str) {
            return Err(ProviderError::Throttled {
                note: note.to_owned(),
            });
        }

        let Some(series_value) = body.get(granularity.series_key()) else {
            return Ok(None);
        };

        let series = TimeSeries::from_value(series_value).map_err(|error| {
            ProviderError::MalformedResponse {
                message: error.to_string(),
            }
        })?;

        if series.is_empty() {
            return Ok(None);
        }

        Ok(Some(series))
    }

    fn query_url(&self, symbol: &Symbol, granularity: Granularity) -> String {
        let mut url = self.base_url.clone();
        let mut separator = '?';

        for (name, value) in granularity.query_params(symbol) {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
            separator = '&';
        }

        url.push(separator);
        url.push_str("apikey=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }
}
