//! Provider traits for fetching market data.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`PriceDataProvider`] - Price history and dividends
//! - [`FundamentalDataProvider`] - Financial statements
//! - [`QuoteDataProvider`] - Quote summary snapshots
//!
//! Every method works on a single symbol. Batching across symbols, and
//! turning "nothing for this symbol" into an empty entry, is the caller's job.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::{
    error::Result,
    frequency::{DataFrequency, PeriodType},
    quote::{KeyStatistics, PriceQuote, SummaryDetail},
    statement::{StatementPeriod, StatementType},
    types::{DividendEvent, PriceHistory, Symbol},
};

/// Base trait for all data providers.
///
/// All data providers must implement this trait to provide basic metadata
/// about the provider and its capabilities.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Yahoo Finance").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Returns the price frequencies supported by this provider.
    fn supported_frequencies(&self) -> &[DataFrequency];
}

/// Provider for price series and dividends.
#[async_trait]
pub trait PriceDataProvider: DataProvider {
    /// Fetches the price history of a symbol between two dates, both included.
    ///
    /// Returns `SymbolNotFound` if the provider does not know the symbol.
    async fn fetch_price_history(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
        frequency: DataFrequency,
    ) -> Result<PriceHistory>;

    /// Fetches the dividends paid between two dates, both included, oldest first.
    ///
    /// An empty vector means the symbol paid nothing in the range.
    async fn fetch_dividends(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DividendEvent>>;
}

/// Provider for financial statements.
#[async_trait]
pub trait FundamentalDataProvider: DataProvider {
    /// Fetches one or more statement types for a symbol in a single request.
    ///
    /// Statement types the provider has nothing for are absent from the
    /// returned map. Periods are most recent first.
    async fn fetch_statements(
        &self,
        symbol: &Symbol,
        period_type: PeriodType,
        statement_types: &[StatementType],
    ) -> Result<BTreeMap<StatementType, Vec<StatementPeriod>>>;
}

/// Provider for quote summary snapshots.
#[async_trait]
pub trait QuoteDataProvider: DataProvider {
    /// Fetches the latest price quote.
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<PriceQuote>;

    /// Fetches the trading and dividend summary.
    async fn fetch_summary_detail(&self, symbol: &Symbol) -> Result<SummaryDetail>;

    /// Fetches valuation and share statistics.
    async fn fetch_key_statistics(&self, symbol: &Symbol) -> Result<KeyStatistics>;
}
