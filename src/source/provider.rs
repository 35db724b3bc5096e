//! Source fetching
//!
//! The provider trait abstracts "URL in, page text out" so the pipeline can
//! be driven by canned fixtures in tests. The HTTP implementation fetches
//! with a bounded timeout and a redirect policy that follows same-scheme
//! redirects but refuses https-to-http downgrades.

use crate::errors::{NamerError, Result};
use reqwest::blocking::Client;
use reqwest::redirect;
use std::time::Duration;

/// Maximum redirect hops before a fetch fails.
const MAX_REDIRECTS: usize = 10;

/// Fetches raw text for a source URL.
pub trait SourceProvider {
    /// Fetch the body of `url` as text, or fail with a fetch error.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// A blocking HTTP source provider.
///
/// Each fetch uses its own connection, released when the body has been
/// read. Non-success status codes are fetch errors, not page text.
#[derive(Debug, Clone)]
pub struct HttpSourceProvider {
    timeout: Duration,
}

impl HttpSourceProvider {
    /// Create a provider with the default 30 second timeout
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the per-fetch timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Redirects are followed up to [`MAX_REDIRECTS`] hops, but never from
    /// https down to http.
    fn redirect_policy() -> redirect::Policy {
        redirect::Policy::custom(|attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                return attempt.error("too many redirects");
            }
            let started_secure = attempt
                .previous()
                .first()
                .map(|url| url.scheme() == "https")
                .unwrap_or(false);
            if started_secure && attempt.url().scheme() != "https" {
                return attempt.error("refusing redirect from https to http");
            }
            attempt.follow()
        })
    }
}

impl Default for HttpSourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for HttpSourceProvider {
    fn fetch(&self, url: &str) -> Result<String> {
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(Self::redirect_policy())
            .user_agent(concat!("codenamer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| NamerError::fetch(url, err.to_string()))?;

        let response = client
            .get(url)
            .send()
            .map_err(|err| NamerError::fetch(url, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamerError::fetch(url, format!("HTTP status {status}")));
        }

        response
            .text()
            .map_err(|err| NamerError::fetch(url, err.to_string()))
    }
}
