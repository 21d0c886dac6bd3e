#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/financials/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Yahoo Finance data provider.
//!
//! This crate provides a Yahoo Finance data provider that implements the
//! [`DataProvider`], [`PriceDataProvider`], [`FundamentalDataProvider`] and
//! [`QuoteDataProvider`] traits from `financials-core`.
//!
//! # Features
//!
//! - Price history, dividends and splits from the chart API
//! - Income, balance sheet and cash flow statements from the quote summary API
//! - Price, summary detail and key statistics modules
//! - Proxy, timeout and endpoint configuration through [`YahooConfig`]
//!
//! # Example
//!
//! ```no_run
//! use financials_yahoo::YahooProvider;
//! use financials_core::{PriceDataProvider, Symbol, DataFrequency};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> financials_core::Result<()> {
//! let provider = YahooProvider::new();
//! let symbol = Symbol::new("AAPL");
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//!
//! let history = provider
//!     .fetch_price_history(&symbol, start, end, DataFrequency::Daily)
//!     .await?;
//! println!("Fetched {} bars", history.prices.len());
//! # Ok(())
//! # }
//! ```

/// Client configuration.
pub mod config;
/// Request URL construction.
pub mod endpoint;
mod normalize;
mod response;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use financials_core::{
    DataError, DataFrequency, DataProvider, DateRange, DividendEvent, FundamentalDataProvider,
    KeyStatistics, PeriodType, PriceDataProvider, PriceHistory, PriceQuote, QuoteDataProvider,
    Result, StatementPeriod, StatementType, SummaryDetail, Symbol,
};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

pub use config::YahooConfig;

use response::{
    ChartResponse, QuoteSummaryResponse, RawKeyStatistics, RawPrice, RawSummaryDetail,
};

/// Provider name reported in errors and metadata.
const PROVIDER_NAME: &str = "Yahoo Finance";

/// Yahoo Finance data provider.
///
/// Implements [`DataProvider`], [`PriceDataProvider`],
/// [`FundamentalDataProvider`] and [`QuoteDataProvider`]. Every call is a
/// single HTTP request; nothing is cached or retried.
#[derive(Debug)]
pub struct YahooProvider {
    client: reqwest::Client,
    config: YahooConfig,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(YahooConfig::default()).expect("Failed to create HTTP client")
    }

    /// Create a provider from a configuration.
    ///
    /// Fails with [`DataError::Config`] on an unusable proxy setting.
    pub fn with_config(config: YahooConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self { client, config })
    }

    /// Create a new Yahoo Finance provider with a custom HTTP client.
    ///
    /// Endpoints come from the default configuration; the client's own
    /// settings replace the configured timeout, user agent and proxies.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            config: YahooConfig::default(),
        }
    }

    /// Returns the configuration of this provider.
    #[must_use]
    pub const fn config(&self) -> &YahooConfig {
        &self.config
    }

    /// Fetch `url` and decode its JSON body.
    ///
    /// Yahoo reports unknown symbols and bad requests with a JSON error body,
    /// so 400 and 404 responses are decoded too.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, symbol: &Symbol) -> Result<T> {
        debug!(%url, "Fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited {
                provider: PROVIDER_NAME.to_string(),
            });
        }
        if !(status.is_success()
            || status == StatusCode::BAD_REQUEST
            || status == StatusCode::NOT_FOUND)
        {
            return Err(DataError::Network(format!("HTTP {status} for {symbol}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            if status == StatusCode::NOT_FOUND {
                DataError::SymbolNotFound(symbol.to_string())
            } else {
                DataError::Parse(format!("{symbol}: {e}"))
            }
        })
    }

    async fn fetch_chart(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
        interval: &str,
        events: &str,
    ) -> Result<response::ChartData> {
        let range = DateRange::new(start, end)?;
        let url = endpoint::chart_url(&self.config.chart_url, symbol, &range, interval, events)?;
        let response: ChartResponse = self.get_json(url, symbol).await?;
        normalize::chart_data(symbol, response)
    }

    async fn fetch_quote_summary(
        &self,
        symbol: &Symbol,
        modules: &[&str],
    ) -> Result<Map<String, Value>> {
        let url = endpoint::quote_summary_url(&self.config.quote_summary_url, symbol, modules)?;
        let response: QuoteSummaryResponse = self.get_json(url, symbol).await?;
        normalize::quote_summary(symbol, response)
    }

    async fn fetch_module<T: DeserializeOwned>(&self, symbol: &Symbol, name: &str) -> Result<T> {
        let mut modules = self.fetch_quote_summary(symbol, &[name]).await?;
        normalize::module(symbol, &mut modules, name)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for YahooProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn description(&self) -> &str {
        "Yahoo Finance prices, dividends, financial statements and quote summaries"
    }

    fn supported_frequencies(&self) -> &[DataFrequency] {
        DataFrequency::ALL
    }
}

#[async_trait]
impl PriceDataProvider for YahooProvider {
    async fn fetch_price_history(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
        frequency: DataFrequency,
    ) -> Result<PriceHistory> {
        let data = self
            .fetch_chart(
                symbol,
                start,
                end,
                endpoint::interval(frequency),
                endpoint::HISTORY_EVENTS,
            )
            .await?;
        Ok(normalize::price_history(data))
    }

    async fn fetch_dividends(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DividendEvent>> {
        let data = self
            .fetch_chart(
                symbol,
                start,
                end,
                endpoint::interval(DataFrequency::Daily),
                endpoint::DIVIDEND_EVENTS,
            )
            .await?;
        Ok(normalize::dividends(data))
    }
}

#[async_trait]
impl FundamentalDataProvider for YahooProvider {
    async fn fetch_statements(
        &self,
        symbol: &Symbol,
        period_type: PeriodType,
        statement_types: &[StatementType],
    ) -> Result<BTreeMap<StatementType, Vec<StatementPeriod>>> {
        let names: Vec<&str> = statement_types
            .iter()
            .map(|t| t.history_name(period_type))
            .collect();
        let modules = self.fetch_quote_summary(symbol, &names).await?;
        Ok(normalize::statements(&modules, period_type, statement_types))
    }
}

#[async_trait]
impl QuoteDataProvider for YahooProvider {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<PriceQuote> {
        let raw: RawPrice = self.fetch_module(symbol, endpoint::PRICE_MODULE).await?;
        Ok(raw.into())
    }

    async fn fetch_summary_detail(&self, symbol: &Symbol) -> Result<SummaryDetail> {
        let raw: RawSummaryDetail = self
            .fetch_module(symbol, endpoint::SUMMARY_DETAIL_MODULE)
            .await?;
        Ok(raw.into())
    }

    async fn fetch_key_statistics(&self, symbol: &Symbol) -> Result<KeyStatistics> {
        let raw: RawKeyStatistics = self
            .fetch_module(symbol, endpoint::KEY_STATISTICS_MODULE)
            .await?;
        Ok(raw.into())
    }
}
