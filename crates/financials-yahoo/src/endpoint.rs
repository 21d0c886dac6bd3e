//! Request URLs for the chart and quote summary endpoints.
//!
//! The symbol always goes into its own path segment so that `^`, `=` and `&`
//! in tickers such as `^TNX`, `EURUSD=X` or `IL&FSTRANS.NS` never reach the
//! query string.

use financials_core::{DataError, DataFrequency, DateRange, Result, Symbol};
use reqwest::Url;

/// Chart events requested alongside a price history.
pub const HISTORY_EVENTS: &str = "div|split";

/// Chart events requested for a dividend listing.
pub const DIVIDEND_EVENTS: &str = "div";

/// Quote summary module with the live price.
pub const PRICE_MODULE: &str = "price";

/// Quote summary module with trading and dividend figures.
pub const SUMMARY_DETAIL_MODULE: &str = "summaryDetail";

/// Quote summary module with valuation statistics.
pub const KEY_STATISTICS_MODULE: &str = "defaultKeyStatistics";

/// Chart interval for a price frequency.
#[must_use]
pub const fn interval(frequency: DataFrequency) -> &'static str {
    match frequency {
        DataFrequency::Daily => "1d",
        DataFrequency::Weekly => "1wk",
        DataFrequency::Monthly => "1mo",
    }
}

/// Appends `symbol` to `base` as a single path segment.
fn symbol_url(base: &str, symbol: &Symbol) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| DataError::Config(format!("invalid base URL '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| DataError::Config(format!("base URL '{base}' cannot take a path")))?
        .pop_if_empty()
        .push(symbol.as_str());
    Ok(url)
}

/// Builds a chart request for `symbol` over `range`.
pub fn chart_url(
    base: &str,
    symbol: &Symbol,
    range: &DateRange,
    interval: &str,
    events: &str,
) -> Result<Url> {
    let (period1, period2) = range.to_epochs();
    let mut url = symbol_url(base, symbol)?;
    url.query_pairs_mut()
        .append_pair("period1", &period1.to_string())
        .append_pair("period2", &period2.to_string())
        .append_pair("interval", interval)
        .append_pair("events", events)
        .append_pair("includeAdjustedClose", "true");
    Ok(url)
}

/// Builds a quote summary request for one or more modules.
pub fn quote_summary_url(base: &str, symbol: &Symbol, modules: &[&str]) -> Result<Url> {
    if modules.is_empty() {
        return Err(DataError::InvalidParameter(
            "quote summary request needs at least one module".to_string(),
        ));
    }
    let mut url = symbol_url(base, symbol)?;
    url.query_pairs_mut()
        .append_pair("modules", &modules.join(","))
        .append_pair("formatted", "false");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHART_API_URL, QUOTE_SUMMARY_URL};
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_chart_url() {
        let range = DateRange::parse("2015-01-15", "2017-10-15").unwrap();
        let url = chart_url(
            CHART_API_URL,
            &Symbol::new("C"),
            &range,
            interval(DataFrequency::Weekly),
            HISTORY_EVENTS,
        )
        .unwrap();

        assert_eq!(url.path(), "/v8/finance/chart/C");
        let params = query(&url);
        assert_eq!(params["period1"], "1421280000");
        assert_eq!(params["period2"], "1508111999");
        assert_eq!(params["interval"], "1wk");
        assert_eq!(params["events"], "div|split");
        assert_eq!(params["includeAdjustedClose"], "true");
    }

    #[test]
    fn test_symbol_stays_in_path() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        for ticker in ["EURUSD=X", "IL&FSTRANS.NS"] {
            let url = chart_url(CHART_API_URL, &Symbol::new(ticker), &range, "1d", DIVIDEND_EVENTS)
                .unwrap();
            assert!(url.path().ends_with(ticker), "{url}");
            let params = query(&url);
            assert_eq!(params.len(), 5);
            assert_eq!(params["events"], "div");
        }
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let url = chart_url("http://127.0.0.1:1/chart/", &Symbol::new("C"), &range, "1d", "div")
            .unwrap();
        assert_eq!(url.path(), "/chart/C");
    }

    #[test]
    fn test_quote_summary_url() {
        let url = quote_summary_url(
            QUOTE_SUMMARY_URL,
            &Symbol::new("C"),
            &["incomeStatementHistoryQuarterly", "cashflowStatementHistoryQuarterly"],
        )
        .unwrap();
        assert_eq!(url.path(), "/v10/finance/quoteSummary/C");
        let params = query(&url);
        assert_eq!(
            params["modules"],
            "incomeStatementHistoryQuarterly,cashflowStatementHistoryQuarterly"
        );
        assert_eq!(params["formatted"], "false");

        assert!(quote_summary_url(QUOTE_SUMMARY_URL, &Symbol::new("C"), &[]).is_err());
    }

    #[test]
    fn test_intervals() {
        assert_eq!(interval(DataFrequency::Daily), "1d");
        assert_eq!(interval(DataFrequency::Monthly), "1mo");
    }
}
