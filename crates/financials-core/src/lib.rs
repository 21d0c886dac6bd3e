#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/financials/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the Yahoo Financials client.
//!
//! This crate provides the foundational abstractions:
//!
//! - [`PriceDataProvider`](provider::PriceDataProvider) - Price history and dividends
//! - [`FundamentalDataProvider`](provider::FundamentalDataProvider) - Financial statements
//! - [`QuoteDataProvider`](provider::QuoteDataProvider) - Quote summary snapshots
//! - [`BySymbol`](by_symbol::BySymbol) - Per-symbol batch results

/// Per-symbol result map.
pub mod by_symbol;
/// Date parsing and epoch conversion.
pub mod dates;
/// Error types for data operations.
pub mod error;
/// Data frequency and period type definitions.
pub mod frequency;
/// Provider traits for fetching market data.
pub mod provider;
/// Quote summary types.
pub mod quote;
/// Financial statement types.
pub mod statement;
/// Core data types (Symbol, PriceBar, DividendEvent, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use by_symbol::BySymbol;
pub use dates::{DateRange, date_to_epoch, end_of_day_epoch, format_epoch, parse_date, time_zone};
pub use error::{DataError, Result};
pub use frequency::{DataFrequency, PeriodType};
pub use provider::{DataProvider, FundamentalDataProvider, PriceDataProvider, QuoteDataProvider};
pub use quote::{KeyStatistics, PriceQuote, SummaryDetail};
pub use statement::{FinancialStatements, StatementPeriod, StatementType};
pub use types::{
    DividendEvent, EventsData, PriceBar, PriceHistory, SplitEvent, Symbol, Tickers, TimeZoneInfo,
    TradeDate,
};
