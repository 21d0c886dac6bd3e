//! Yahoo Finance API response types.
//!
//! Yahoo omits keys freely and, depending on the `formatted` flag, sends
//! numbers either bare or wrapped as `{"raw": 1.5, "fmt": "1.50"}`. Everything
//! here is optional or defaulted and the `raw_*` helpers accept both shapes.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// Chart API
// ============================================================================

/// Chart API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub(crate) chart: ChartResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) result: Option<Vec<ChartData>>,
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChartData {
    #[serde(default)]
    pub(crate) meta: ChartMeta,
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub(crate) events: Option<ChartEvents>,
    #[serde(default)]
    pub(crate) indicators: Option<Indicators>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartMeta {
    pub(crate) currency: Option<String>,
    pub(crate) instrument_type: Option<String>,
    pub(crate) first_trade_date: Option<i64>,
    #[serde(rename = "gmtoffset")]
    pub(crate) gmt_offset: Option<i32>,
    pub(crate) exchange_timezone_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChartEvents {
    #[serde(default)]
    pub(crate) dividends: HashMap<String, RawDividend>,
    #[serde(default)]
    pub(crate) splits: HashMap<String, RawSplit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDividend {
    pub(crate) amount: f64,
    pub(crate) date: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSplit {
    pub(crate) date: i64,
    pub(crate) numerator: f64,
    pub(crate) denominator: f64,
    #[serde(default)]
    pub(crate) split_ratio: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteData>,
    #[serde(default)]
    pub(crate) adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuoteData {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdjClose {
    #[serde(default)]
    pub(crate) adjclose: Vec<Option<f64>>,
}

// ============================================================================
// Quote Summary API
// ============================================================================

/// Quote Summary API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteSummaryResponse {
    pub(crate) quote_summary: QuoteSummaryResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryResult {
    #[serde(default)]
    pub(crate) result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPrice {
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) short_name: Option<String>,
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) long_name: Option<String>,
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) quote_type: Option<String>,
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) currency: Option<String>,
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) exchange_name: Option<String>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_price: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_change: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_change_percent: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) regular_market_volume: Option<i64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_previous_close: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_open: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_day_low: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) regular_market_day_high: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) regular_market_time: Option<i64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) market_cap: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSummaryDetail {
    #[serde(default, deserialize_with = "raw_string")]
    pub(crate) currency: Option<String>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) previous_close: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) open: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) day_low: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) day_high: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) fifty_two_week_low: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) fifty_two_week_high: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) volume: Option<i64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) average_volume: Option<i64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) average_volume_10days: Option<i64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) market_cap: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) dividend_rate: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) ex_dividend_date: Option<i64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) payout_ratio: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) five_year_avg_dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) trailing_annual_dividend_rate: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) trailing_annual_dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) beta: Option<f64>,
    #[serde(default, rename = "trailingPE", deserialize_with = "raw_f64")]
    pub(crate) trailing_pe: Option<f64>,
    #[serde(default, rename = "forwardPE", deserialize_with = "raw_f64")]
    pub(crate) forward_pe: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) price_to_sales_trailing_12_months: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) fifty_day_average: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) two_hundred_day_average: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawKeyStatistics {
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) enterprise_value: Option<f64>,
    #[serde(default, rename = "forwardPE", deserialize_with = "raw_f64")]
    pub(crate) forward_pe: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) profit_margins: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) float_shares: Option<i64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) shares_outstanding: Option<i64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) book_value: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) price_to_book: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) trailing_eps: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) forward_eps: Option<f64>,
    #[serde(default, deserialize_with = "raw_f64")]
    pub(crate) beta: Option<f64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) last_fiscal_year_end: Option<i64>,
    #[serde(default, deserialize_with = "raw_i64")]
    pub(crate) most_recent_quarter: Option<i64>,
}

// ============================================================================
// Raw value helpers
// ============================================================================

/// Reads a bare number or the `raw` member of a formatted value.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Object(map) => map.get("raw").and_then(Value::as_f64),
        _ => None,
    }
}

/// Integer flavor of [`number`].
pub(crate) fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::Object(map) => map.get("raw").and_then(integer),
        _ => None,
    }
}

fn raw_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(number))
}

fn raw_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(integer))
}

fn raw_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Object(map)) => map.get("fmt").and_then(Value::as_str).map(str::to_string),
        _ => None,
    })
}
