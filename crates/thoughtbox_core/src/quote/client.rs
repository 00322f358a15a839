//! Best-effort quote client with static fallback.
//!
//! # Responsibility
//! - Perform a single unauthenticated GET against the quote service.
//! - Substitute the static fallback on any failure.
//!
//! # Invariants
//! - `fetch_inspiration` never fails and never retries.
//! - A fallback result carries no author.

use log::{info, warn};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.quotable.io/random";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Static substitute shown when the remote fetch fails.
pub const FALLBACK_QUOTE: &str = "Create your own inspiration today!";

/// One displayable quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub content: String,
    /// Absent for the fallback quote.
    pub author: Option<String>,
}

impl Quote {
    /// Returns the static fallback quote.
    pub fn fallback() -> Self {
        Self {
            content: FALLBACK_QUOTE.to_string(),
            author: None,
        }
    }
}

/// Expected response shape of the quote service.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    content: String,
    author: String,
}

/// Client for the remote quote service.
pub struct QuoteClient {
    http: Option<reqwest::blocking::Client>,
    endpoint: String,
}

impl QuoteClient {
    /// Creates a client against the public quote service.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_QUOTE_ENDPOINT)
    }

    /// Creates a client against a caller-provided endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        // A client that cannot be built (e.g. TLS backend failure) degrades
        // to the fallback quote instead of failing construction.
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok();
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Fetches one quote, substituting the static fallback on any failure.
    ///
    /// # Contract
    /// - Never returns an error; failures are logged and replaced.
    /// - No retries; exactly one request per call.
    pub fn fetch_inspiration(&self) -> Quote {
        match self.try_fetch() {
            Ok(quote) => {
                info!("event=quote_fetch module=quote status=ok");
                quote
            }
            Err(reason) => {
                warn!("event=quote_fetch module=quote status=fallback reason={reason}");
                Quote::fallback()
            }
        }
    }

    fn try_fetch(&self) -> Result<Quote, String> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| "http client unavailable".to_string())?;

        let body = http
            .get(&self.endpoint)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|err| format!("request failed: {err}"))?;

        parse_quote_body(&body)
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes one quote service response body.
fn parse_quote_body(body: &str) -> Result<Quote, String> {
    let response: QuoteResponse =
        serde_json::from_str(body).map_err(|err| format!("malformed response: {err}"))?;
    Ok(Quote {
        content: response.content,
        author: Some(response.author),
    })
}
