//! Conversion of raw Yahoo responses into core records.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use financials_core::{
    DataError, DividendEvent, EventsData, KeyStatistics, PeriodType, PriceBar, PriceHistory,
    PriceQuote, Result, SplitEvent, StatementPeriod, StatementType, SummaryDetail, Symbol,
    TimeZoneInfo, TradeDate, format_epoch, parse_date, time_zone,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::response::{
    ApiError, ChartData, ChartEvents, ChartResponse, QuoteSummaryResponse, RawKeyStatistics,
    RawPrice, RawSummaryDetail, integer, number,
};

/// Statement entries that are bookkeeping rather than line items.
const NON_ITEM_KEYS: &[&str] = &["maxAge", "endDate"];

fn api_error(symbol: &Symbol, error: ApiError) -> DataError {
    if error.code == "Not Found" {
        return DataError::SymbolNotFound(symbol.to_string());
    }
    if error.description.contains("Data doesn't exist") {
        return DataError::DataNotAvailable {
            symbol: symbol.to_string(),
            detail: error.description,
        };
    }
    DataError::Other(format!("{}: {}", error.code, error.description))
}

/// Extracts the single chart result, mapping API-level errors.
pub(crate) fn chart_data(symbol: &Symbol, response: ChartResponse) -> Result<ChartData> {
    if let Some(error) = response.chart.error {
        return Err(api_error(symbol, error));
    }
    response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
}

/// Zone in which the dates of a chart result are formatted.
///
/// `gmtoffset` is the offset at request time and is wrong for bars on the
/// other side of a DST change, so only the named zone is used. Unknown or
/// missing names fall back to UTC.
fn exchange_zone(data: &ChartData) -> Option<Tz> {
    let name = data.meta.exchange_timezone_name.as_deref()?;
    let zone = time_zone(name);
    if zone.is_none() {
        debug!(zone = name, "unknown exchange time zone, formatting dates in UTC");
    }
    zone
}

/// Builds the price history of a chart result.
pub(crate) fn price_history(data: ChartData) -> PriceHistory {
    let zone = exchange_zone(&data);
    let prices = price_bars(&data, zone);
    let events_data = events(data.events, zone);

    PriceHistory {
        first_trade_date: data.meta.first_trade_date.map(|date| TradeDate {
            date,
            formatted_date: format_epoch(date, zone).unwrap_or_default(),
        }),
        currency: data.meta.currency,
        instrument_type: data.meta.instrument_type,
        time_zone: data.meta.gmt_offset.map(|gmt_offset| TimeZoneInfo { gmt_offset }),
        events_data,
        prices,
    }
}

/// Dividends of a chart result, oldest first.
pub(crate) fn dividends(data: ChartData) -> Vec<DividendEvent> {
    let zone = exchange_zone(&data);
    events(data.events, zone).dividends
}

/// Bars with all four prices. Rows where any of open, high, low or close is
/// null are skipped; a null volume stays `None`.
fn price_bars(data: &ChartData, zone: Option<Tz>) -> Vec<PriceBar> {
    let Some(timestamps) = data.timestamp.as_deref() else {
        return Vec::new();
    };
    let Some(indicators) = data.indicators.as_ref() else {
        return Vec::new();
    };
    let Some(quote) = indicators.quote.first() else {
        return Vec::new();
    };
    let adjclose = indicators
        .adjclose
        .as_ref()
        .and_then(|series| series.first())
        .map(|series| series.adjclose.as_slice())
        .unwrap_or_default();

    let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &date) in timestamps.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            at(&quote.open, i),
            at(&quote.high, i),
            at(&quote.low, i),
            at(&quote.close, i),
        ) else {
            debug!(date, "skipping bar without prices");
            continue;
        };
        let Some(formatted_date) = format_epoch(date, zone) else {
            debug!(date, "skipping bar with out of range timestamp");
            continue;
        };
        bars.push(PriceBar {
            date,
            formatted_date,
            open,
            high,
            low,
            close,
            adjclose: at(adjclose, i).unwrap_or(close),
            volume: quote.volume.get(i).copied().flatten(),
        });
    }
    bars
}

fn events(events: Option<ChartEvents>, zone: Option<Tz>) -> EventsData {
    let Some(events) = events else {
        return EventsData::default();
    };

    let mut dividends: Vec<DividendEvent> = events
        .dividends
        .into_values()
        .map(|raw| DividendEvent {
            date: raw.date,
            formatted_date: format_epoch(raw.date, zone).unwrap_or_default(),
            amount: raw.amount,
        })
        .collect();
    dividends.sort_by_key(|d| d.date);

    let mut splits: Vec<SplitEvent> = events
        .splits
        .into_values()
        .map(|raw| SplitEvent {
            date: raw.date,
            formatted_date: format_epoch(raw.date, zone).unwrap_or_default(),
            numerator: raw.numerator,
            denominator: raw.denominator,
            split_ratio: raw.split_ratio,
        })
        .collect();
    splits.sort_by_key(|s| s.date);

    EventsData { dividends, splits }
}

/// Extracts the module map of a quote summary response.
pub(crate) fn quote_summary(
    symbol: &Symbol,
    response: QuoteSummaryResponse,
) -> Result<Map<String, Value>> {
    if let Some(error) = response.quote_summary.error {
        return Err(api_error(symbol, error));
    }
    response
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
}

/// Deserializes one module of a quote summary result.
pub(crate) fn module<T: DeserializeOwned>(
    symbol: &Symbol,
    modules: &mut Map<String, Value>,
    name: &str,
) -> Result<T> {
    match modules.remove(name) {
        Some(value) if !value.is_null() => serde_json::from_value(value)
            .map_err(|e| DataError::Parse(format!("{name} module for {symbol}: {e}"))),
        _ => Err(DataError::DataNotAvailable {
            symbol: symbol.to_string(),
            detail: format!("no {name} module"),
        }),
    }
}

/// Line items of every requested statement present in `modules`.
pub(crate) fn statements(
    modules: &Map<String, Value>,
    period: PeriodType,
    statement_types: &[StatementType],
) -> BTreeMap<StatementType, Vec<StatementPeriod>> {
    let mut out = BTreeMap::new();
    for &statement_type in statement_types {
        let Some(history) = modules.get(statement_type.history_name(period)) else {
            continue;
        };
        let Some(entries) = history
            .get(statements_key(statement_type))
            .and_then(Value::as_array)
        else {
            continue;
        };
        out.insert(
            statement_type,
            entries.iter().filter_map(statement_period).collect(),
        );
    }
    out
}

/// Key of the period list inside a statement history module.
const fn statements_key(statement_type: StatementType) -> &'static str {
    match statement_type {
        StatementType::Income => "incomeStatementHistory",
        StatementType::Balance => "balanceSheetStatements",
        StatementType::Cash => "cashflowStatements",
    }
}

fn statement_period(entry: &Value) -> Option<StatementPeriod> {
    let entry = entry.as_object()?;
    let Some(end_date) = entry.get("endDate").and_then(parse_end_date) else {
        debug!("skipping statement period without end date");
        return None;
    };

    let mut period = StatementPeriod::new(end_date);
    for (key, value) in entry {
        if NON_ITEM_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(n) = number(value) {
            period.items.insert(key.clone(), n);
        }
    }
    Some(period)
}

fn parse_end_date(value: &Value) -> Option<NaiveDate> {
    if let Some(date) = integer(value)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.date_naive())
    {
        return Some(date);
    }
    value
        .get("fmt")
        .or(Some(value))
        .and_then(Value::as_str)
        .and_then(|s| parse_date(s).ok())
}

impl From<RawPrice> for PriceQuote {
    fn from(raw: RawPrice) -> Self {
        Self {
            short_name: raw.short_name,
            long_name: raw.long_name,
            quote_type: raw.quote_type,
            currency: raw.currency,
            exchange_name: raw.exchange_name,
            regular_market_price: raw.regular_market_price,
            regular_market_change: raw.regular_market_change,
            regular_market_change_percent: raw.regular_market_change_percent,
            regular_market_volume: raw.regular_market_volume,
            regular_market_previous_close: raw.regular_market_previous_close,
            regular_market_open: raw.regular_market_open,
            regular_market_day_low: raw.regular_market_day_low,
            regular_market_day_high: raw.regular_market_day_high,
            regular_market_time: raw.regular_market_time,
            market_cap: raw.market_cap,
        }
    }
}

impl From<RawSummaryDetail> for SummaryDetail {
    fn from(raw: RawSummaryDetail) -> Self {
        Self {
            currency: raw.currency,
            previous_close: raw.previous_close,
            open: raw.open,
            day_low: raw.day_low,
            day_high: raw.day_high,
            fifty_two_week_low: raw.fifty_two_week_low,
            fifty_two_week_high: raw.fifty_two_week_high,
            volume: raw.volume,
            average_volume: raw.average_volume,
            average_volume_10days: raw.average_volume_10days,
            market_cap: raw.market_cap,
            dividend_rate: raw.dividend_rate,
            dividend_yield: raw.dividend_yield,
            ex_dividend_date: raw.ex_dividend_date,
            payout_ratio: raw.payout_ratio,
            five_year_avg_dividend_yield: raw.five_year_avg_dividend_yield,
            trailing_annual_dividend_rate: raw.trailing_annual_dividend_rate,
            trailing_annual_dividend_yield: raw.trailing_annual_dividend_yield,
            beta: raw.beta,
            trailing_pe: raw.trailing_pe,
            forward_pe: raw.forward_pe,
            price_to_sales_trailing_12_months: raw.price_to_sales_trailing_12_months,
            fifty_day_average: raw.fifty_day_average,
            two_hundred_day_average: raw.two_hundred_day_average,
        }
    }
}

impl From<RawKeyStatistics> for KeyStatistics {
    fn from(raw: RawKeyStatistics) -> Self {
        Self {
            enterprise_value: raw.enterprise_value,
            forward_pe: raw.forward_pe,
            profit_margins: raw.profit_margins,
            float_shares: raw.float_shares,
            shares_outstanding: raw.shares_outstanding,
            book_value: raw.book_value,
            price_to_book: raw.price_to_book,
            trailing_eps: raw.trailing_eps,
            forward_eps: raw.forward_eps,
            beta: raw.beta,
            last_fiscal_year_end: raw.last_fiscal_year_end,
            most_recent_quarter: raw.most_recent_quarter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart(value: Value) -> ChartResponse {
        serde_json::from_value(value).unwrap()
    }

    fn sample_chart() -> ChartResponse {
        chart(json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "C",
                        "instrumentType": "EQUITY",
                        "firstTradeDate": 99153000,
                        "gmtoffset": -18000,
                        "timezone": "EST",
                        "exchangeTimezoneName": "America/New_York"
                    },
                    "timestamp": [1421038800, 1421643600, 1422248400],
                    "events": {
                        "dividends": {
                            "1422921600": {"amount": 0.01, "date": 1422921600},
                            "1414045800": {"amount": 0.01, "date": 1414045800}
                        },
                        "splits": {
                            "990711000": {"date": 990711000, "numerator": 1, "denominator": 10, "splitRatio": "1:10"}
                        }
                    },
                    "indicators": {
                        "quote": [{
                            "open": [48.959999084472656, null, 47.0],
                            "high": [49.099998474121094, 48.0, 47.5],
                            "low": [46.599998474121094, 46.0, 46.5],
                            "close": [47.61000061035156, 47.0, 47.2],
                            "volume": [125737200, 100, null]
                        }],
                        "adjclose": [{"adjclose": [44.10297393798828, 43.9]}]
                    }
                }],
                "error": null
            }
        }))
    }

    #[test]
    fn test_price_history() {
        let symbol = Symbol::new("C");
        let data = chart_data(&symbol, sample_chart()).unwrap();
        let history = price_history(data);

        assert_eq!(history.currency.as_deref(), Some("USD"));
        assert_eq!(history.time_zone.unwrap().gmt_offset, -18000);
        assert_eq!(history.first_trade_date.unwrap().date, 99153000);

        // second bar has no open
        assert_eq!(history.prices.len(), 2);
        let first = &history.prices[0];
        assert_eq!(first.formatted_date, "2015-01-12");
        assert_eq!(first.adjclose, 44.10297393798828);
        assert_eq!(first.volume, Some(125737200));

        let last = &history.prices[1];
        assert_eq!(last.date, 1422248400);
        assert_eq!(last.adjclose, last.close);
        assert_eq!(last.volume, None);

        let dividends = &history.events_data.dividends;
        assert_eq!(dividends.len(), 2);
        assert!(dividends[0].date < dividends[1].date);
        assert_eq!(history.events_data.splits[0].split_ratio, "1:10");
    }

    #[test]
    fn test_dates_follow_daylight_saving() {
        // fetched in winter, so gmtoffset is EST, but the bar is from June
        let response = |zone: Value| {
            chart(json!({
                "chart": {
                    "result": [{
                        "meta": {"gmtoffset": -18000, "exchangeTimezoneName": zone},
                        "timestamp": [1433131200],
                        "events": {
                            "dividends": {"1433131200": {"amount": 0.05, "date": 1433131200}}
                        },
                        "indicators": {
                            "quote": [{
                                "open": [1.0], "high": [1.0], "low": [1.0], "close": [1.0],
                                "volume": [0]
                            }]
                        }
                    }],
                    "error": null
                }
            }))
        };
        let symbol = Symbol::new("C");

        for zone in [json!("America/New_York"), Value::Null, json!("Nowhere/Special")] {
            let data = chart_data(&symbol, response(zone)).unwrap();
            let history = price_history(data);
            assert_eq!(history.prices[0].formatted_date, "2015-06-01");
            assert_eq!(history.events_data.dividends[0].formatted_date, "2015-06-01");
        }
    }

    #[test]
    fn test_missing_timestamps() {
        let symbol = Symbol::new("C");
        let data = chart_data(
            &symbol,
            chart(json!({"chart": {"result": [{"meta": {"currency": "USD"}}], "error": null}})),
        )
        .unwrap();
        let history = price_history(data);
        assert!(history.prices.is_empty());
        assert!(history.events_data.is_empty());
    }

    #[test]
    fn test_chart_errors() {
        let symbol = Symbol::new("NOPE");
        let not_found = chart(json!({
            "chart": {"result": null, "error": {"code": "Not Found", "description": "No data found"}}
        }));
        assert!(matches!(
            chart_data(&symbol, not_found),
            Err(DataError::SymbolNotFound(s)) if s == "NOPE"
        ));

        let empty = chart(json!({"chart": {"result": [], "error": null}}));
        assert!(chart_data(&symbol, empty).unwrap_err().is_missing_data());

        let other = chart(json!({
            "chart": {"result": null, "error": {"code": "Bad Request", "description": "Invalid input"}}
        }));
        let err = chart_data(&symbol, other).unwrap_err();
        assert!(!err.is_missing_data());
        assert_eq!(err.to_string(), "Bad Request: Invalid input");
    }

    fn summary(value: Value) -> Map<String, Value> {
        let response: QuoteSummaryResponse = serde_json::from_value(value).unwrap();
        quote_summary(&Symbol::new("C"), response).unwrap()
    }

    #[test]
    fn test_statements() {
        let modules = summary(json!({
            "quoteSummary": {
                "result": [{
                    "incomeStatementHistoryQuarterly": {
                        "maxAge": 86400,
                        "incomeStatementHistory": [
                            {
                                "maxAge": 1,
                                "endDate": {"raw": 1506729600, "fmt": "2017-09-30"},
                                "netIncome": {"raw": 4133000000_i64, "fmt": "4.13B"},
                                "totalRevenue": 18173000000_i64,
                                "researchDevelopment": {}
                            },
                            {"maxAge": 1, "netIncome": 1}
                        ]
                    },
                    "cashflowStatementHistoryQuarterly": {
                        "cashflowStatements": [
                            {"endDate": "2017-09-30", "netIncome": 4133000000_i64}
                        ]
                    }
                }],
                "error": null
            }
        }));

        let out = statements(&modules, PeriodType::Quarterly, StatementType::ALL);
        assert_eq!(out.len(), 2);
        assert!(!out.contains_key(&StatementType::Balance));

        let income = &out[&StatementType::Income];
        assert_eq!(income.len(), 1);
        let period = &income[0];
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2017, 9, 30).unwrap());
        assert_eq!(period.get_i64("netIncome"), Some(4_133_000_000));
        assert_eq!(period.get("totalRevenue"), Some(18_173_000_000.0));
        assert!(!period.items.contains_key("maxAge"));
        assert!(!period.items.contains_key("endDate"));
        assert!(!period.items.contains_key("researchDevelopment"));

        let cash = &out[&StatementType::Cash];
        assert_eq!(cash[0].end_date, NaiveDate::from_ymd_opt(2017, 9, 30).unwrap());
    }

    #[test]
    fn test_modules() {
        let symbol = Symbol::new("C");
        let mut modules = summary(json!({
            "quoteSummary": {
                "result": [{
                    "price": {"regularMarketPrice": {"raw": 69.77, "fmt": "69.77"}, "currency": "USD"},
                    "summaryDetail": null
                }],
                "error": null
            }
        }));

        let quote: PriceQuote = module::<RawPrice>(&symbol, &mut modules, "price")
            .unwrap()
            .into();
        assert_eq!(quote.regular_market_price, Some(69.77));

        let missing = module::<RawSummaryDetail>(&symbol, &mut modules, "summaryDetail");
        assert!(matches!(missing, Err(DataError::DataNotAvailable { .. })));
        let absent = module::<RawKeyStatistics>(&symbol, &mut modules, "defaultKeyStatistics");
        assert!(absent.unwrap_err().is_missing_data());
    }

    #[test]
    fn test_quote_summary_errors() {
        let response: QuoteSummaryResponse = serde_json::from_value(json!({
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for ticker symbol: NOPE"}
            }
        }))
        .unwrap();
        assert!(matches!(
            quote_summary(&Symbol::new("NOPE"), response),
            Err(DataError::SymbolNotFound(_))
        ));
    }
}
