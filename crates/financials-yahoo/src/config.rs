//! Client configuration.

use financials_core::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Yahoo Finance chart API base URL.
pub const CHART_API_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance quote summary API base URL.
pub const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// User agent for HTTP requests.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`YahooProvider`](crate::YahooProvider).
///
/// Deserializes from any serde format; missing fields take their defaults.
///
/// ```
/// use financials_yahoo::YahooConfig;
///
/// let config = YahooConfig::default()
///     .with_proxy("http", "http://10.10.1.10:3128")
///     .with_proxy("https", "http://10.10.1.10:1080");
/// assert_eq!(config.proxies.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    /// Base URL of the chart endpoint; the symbol is appended as a path segment.
    pub chart_url: String,
    /// Base URL of the quote summary endpoint.
    pub quote_summary_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Proxy URL per scheme: `http`, `https` or `all`.
    pub proxies: BTreeMap<String, String>,
    /// Whether to honor `HTTP_PROXY`-style environment variables when no
    /// explicit proxy is configured.
    pub system_proxy: bool,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            chart_url: CHART_API_URL.to_string(),
            quote_summary_url: QUOTE_SUMMARY_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxies: BTreeMap::new(),
            system_proxy: true,
        }
    }
}

impl YahooConfig {
    /// Routes requests of `scheme` through `url`.
    #[must_use]
    pub fn with_proxy(mut self, scheme: impl Into<String>, url: impl Into<String>) -> Self {
        self.proxies.insert(scheme.into(), url.into());
        self
    }

    /// Adds every `(scheme, url)` pair.
    #[must_use]
    pub fn with_proxies<I, K, V>(mut self, proxies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.proxies
            .extend(proxies.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Points both endpoints at another host, keeping Yahoo's paths.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.chart_url = format!("{base}/v8/finance/chart");
        self.quote_summary_url = format!("{base}/v10/finance/quoteSummary");
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Ignores proxy environment variables.
    #[must_use]
    pub const fn without_system_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    /// Builds the HTTP client described by this configuration.
    pub(crate) fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(Duration::from_secs(self.timeout_secs));

        if !self.system_proxy {
            builder = builder.no_proxy();
        }

        for (scheme, url) in &self.proxies {
            let proxy = match scheme.to_ascii_lowercase().as_str() {
                "http" => reqwest::Proxy::http(url),
                "https" => reqwest::Proxy::https(url),
                "all" => reqwest::Proxy::all(url),
                other => {
                    return Err(DataError::Config(format!(
                        "unsupported proxy scheme '{other}', expected http, https or all"
                    )));
                }
            }
            .map_err(|e| DataError::Config(format!("invalid {scheme} proxy '{url}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| DataError::Config(format!("failed to create HTTP client: {e}")))
    }
}
