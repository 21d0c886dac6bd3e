//! Core data types for market data.
//!
//! This module defines the symbol and price series structures:
//!
//! - [`Symbol`] - Ticker as supplied by the caller
//! - [`Tickers`] - Ordered, de-duplicated set of symbols
//! - [`PriceBar`] - One OHLCV period
//! - [`DividendEvent`] / [`SplitEvent`] - Corporate actions
//! - [`PriceHistory`] - Price bars plus series metadata

use chrono::{DateTime, Utc};
use polars::prelude::{Column, DataFrame, DataType};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::dates::parse_date;
use crate::error::{DataError, Result};

/// A ticker symbol.
///
/// Equities (`C`), currency pairs (`EURUSD=X`) and indices or treasuries
/// (`^TNX`) are all plain symbols. The string is kept exactly as given so that
/// results can be looked up with the caller's own spelling.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The symbols a client operates on.
///
/// Built from a single ticker or any collection of tickers. Order is kept and
/// repeated symbols are dropped, so every batch result has one entry per
/// distinct symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tickers(Vec<Symbol>);

impl Tickers {
    /// Creates a ticker list, dropping repeats.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut list: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !list.contains(&symbol) {
                list.push(symbol);
            }
        }
        Self(list)
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if exactly one symbol was supplied.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns an iterator over the symbols.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    /// Returns the symbols as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Tickers {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: Into<Symbol>> FromIterator<S> for Tickers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Symbol> for Tickers {
    fn from(symbol: Symbol) -> Self {
        Self(vec![symbol])
    }
}

impl From<&str> for Tickers {
    fn from(s: &str) -> Self {
        Self(vec![Symbol::new(s)])
    }
}

impl From<String> for Tickers {
    fn from(s: String) -> Self {
        Self(vec![Symbol::new(s)])
    }
}

impl<S: Into<Symbol>> From<Vec<S>> for Tickers {
    fn from(symbols: Vec<S>) -> Self {
        Self::new(symbols)
    }
}

impl<S: Into<Symbol>, const N: usize> From<[S; N]> for Tickers {
    fn from(symbols: [S; N]) -> Self {
        Self::new(symbols)
    }
}

impl<S: Into<Symbol> + Clone> From<&[S]> for Tickers {
    fn from(symbols: &[S]) -> Self {
        Self::new(symbols.iter().cloned())
    }
}

/// One trading period of a price series.
///
/// Only periods with all four prices become bars. Serializes with the keys
/// `date`, `formatted_date`, `open`, `high`, `low`, `close`, `adjclose` and
/// `volume`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Unix timestamp of the period start.
    pub date: i64,
    /// Calendar date of the period in the exchange's time zone.
    pub formatted_date: String,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Split/dividend adjusted closing price.
    pub adjclose: f64,
    /// Trading volume, `None` when the provider reports none.
    pub volume: Option<u64>,
}

/// A cash dividend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    /// Unix timestamp of the ex-date.
    pub date: i64,
    /// Ex-date in the exchange's time zone.
    pub formatted_date: String,
    /// Amount paid per share.
    pub amount: f64,
}

/// A stock split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitEvent {
    /// Unix timestamp of the split.
    pub date: i64,
    /// Split date in the exchange's time zone.
    pub formatted_date: String,
    /// New shares.
    pub numerator: f64,
    /// Old shares.
    pub denominator: f64,
    /// Ratio as reported, e.g. `"3:2"`.
    pub split_ratio: String,
}

/// A timestamp paired with its formatted calendar date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDate {
    /// Unix timestamp.
    pub date: i64,
    /// Calendar date in the exchange's time zone.
    pub formatted_date: String,
}

/// Exchange time zone information.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneInfo {
    /// Offset from GMT in seconds.
    pub gmt_offset: i32,
}

/// Corporate actions that fell inside a price request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsData {
    /// Dividends, oldest first.
    pub dividends: Vec<DividendEvent>,
    /// Splits, oldest first.
    pub splits: Vec<SplitEvent>,
}

impl EventsData {
    /// Returns true if neither dividends nor splits were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dividends.is_empty() && self.splits.is_empty()
    }
}

/// A normalized price series for one symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// First day the instrument traded.
    pub first_trade_date: Option<TradeDate>,
    /// Quote currency.
    pub currency: Option<String>,
    /// Instrument type, e.g. `EQUITY`, `CURRENCY` or `INDEX`.
    pub instrument_type: Option<String>,
    /// Exchange time zone.
    pub time_zone: Option<TimeZoneInfo>,
    /// Dividends and splits within the requested range.
    pub events_data: EventsData,
    /// Price bars, oldest first.
    pub prices: Vec<PriceBar>,
}

impl PriceHistory {
    /// Returns the most recent bar, if any.
    #[must_use]
    pub fn last_bar(&self) -> Option<&PriceBar> {
        self.prices.last()
    }

    /// Converts the bars to a DataFrame.
    ///
    /// Columns: symbol, date, open, high, low, close, volume, adjusted_close.
    pub fn to_dataframe(&self, symbol: &Symbol) -> Result<DataFrame> {
        let unix_epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();

        let dates: Vec<i32> = self
            .prices
            .iter()
            .map(|bar| parse_date(&bar.formatted_date).map(|d| (d - unix_epoch).num_days() as i32))
            .collect::<Result<_>>()?;

        let symbols: Vec<&str> = vec![symbol.as_str(); dates.len()];
        let opens: Vec<f64> = self.prices.iter().map(|b| b.open).collect();
        let highs: Vec<f64> = self.prices.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = self.prices.iter().map(|b| b.low).collect();
        let closes: Vec<f64> = self.prices.iter().map(|b| b.close).collect();
        let volumes: Vec<Option<u64>> = self.prices.iter().map(|b| b.volume).collect();
        let adj_closes: Vec<f64> = self.prices.iter().map(|b| b.adjclose).collect();

        let date_col = Column::new("date".into(), dates)
            .cast(&DataType::Date)
            .map_err(|e| DataError::Other(e.to_string()))?;

        DataFrame::new(vec![
            Column::new("symbol".into(), symbols),
            date_col,
            Column::new("open".into(), opens),
            Column::new("high".into(), highs),
            Column::new("low".into(), lows),
            Column::new("close".into(), closes),
            Column::new("volume".into(), volumes),
            Column::new("adjusted_close".into(), adj_closes),
        ])
        .map_err(|e| DataError::Other(e.to_string()))
    }
}
