//! Multi-symbol client over a single data provider.

use tracing::{debug, instrument, warn};

use financials_core::{
    BySymbol, DataError, DataFrequency, DataProvider, DateRange, DividendEvent, FinancialStatements,
    FundamentalDataProvider, KeyStatistics, PeriodType, PriceDataProvider, PriceHistory,
    PriceQuote, QuoteDataProvider, Result, StatementType, SummaryDetail, Symbol, Tickers,
    format_epoch,
};
use financials_yahoo::{YahooConfig, YahooProvider};

/// Fetches prices, dividends, statements and quotes for a fixed set of symbols.
///
/// Every method walks the symbols in order and returns one entry per symbol.
/// A symbol the provider has no data for gets an empty entry (and a `warn!`
/// event) while the others are still fetched; any other error, such as a
/// network failure or HTTP 429, aborts the call.
///
/// # Example
///
/// ```no_run
/// use financials::{DataFrequency, YahooFinancials};
///
/// # async fn example() -> financials::Result<()> {
/// let client = YahooFinancials::new(["C", "^IRX"]);
/// let history = client
///     .get_historical_price_data("2015-01-15", "2017-10-15", DataFrequency::Weekly)
///     .await?;
///
/// if let Some(c) = history.get("C") {
///     println!("{} weekly bars", c.prices.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct YahooFinancials<P = YahooProvider> {
    tickers: Tickers,
    provider: P,
}

impl<P: DataProvider> std::fmt::Debug for YahooFinancials<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooFinancials")
            .field("tickers", &self.tickers)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl YahooFinancials<YahooProvider> {
    /// Create a client for one or more symbols with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created.
    #[must_use]
    pub fn new(tickers: impl Into<Tickers>) -> Self {
        Self::with_provider(tickers, YahooProvider::new())
    }

    /// Create a client that routes requests through proxies.
    ///
    /// Keys are URL schemes (`http`, `https` or `all`), values proxy URLs.
    pub fn with_proxies<I, K, V>(tickers: impl Into<Tickers>, proxies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_config(tickers, YahooConfig::default().with_proxies(proxies))
    }

    /// Create a client from a full provider configuration.
    pub fn with_config(tickers: impl Into<Tickers>, config: YahooConfig) -> Result<Self> {
        Ok(Self::with_provider(tickers, YahooProvider::with_config(config)?))
    }
}

impl<P> YahooFinancials<P> {
    /// Create a client over any provider.
    pub fn with_provider(tickers: impl Into<Tickers>, provider: P) -> Self {
        Self {
            tickers: tickers.into(),
            provider,
        }
    }

    /// The symbols this client fetches, in request order.
    #[must_use]
    pub const fn tickers(&self) -> &Tickers {
        &self.tickers
    }

    /// The underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

/// Turns a missing-data error into an empty entry.
fn isolate<T>(symbol: &Symbol, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_missing_data() => {
            warn!(symbol = %symbol, error = %e, "No data for symbol");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl<P: PriceDataProvider> YahooFinancials<P> {
    /// Price history between two `YYYY-MM-DD` dates, both included.
    ///
    /// Each entry carries the bars, dividends, splits and exchange metadata
    /// of one symbol.
    #[instrument(skip(self))]
    pub async fn get_historical_price_data(
        &self,
        start: &str,
        end: &str,
        frequency: DataFrequency,
    ) -> Result<BySymbol<PriceHistory>> {
        let range = DateRange::parse(start, end)?;

        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            debug!(
                provider = self.provider.name(),
                symbol = %symbol,
                "Fetching price history"
            );
            let result = self
                .provider
                .fetch_price_history(symbol, range.start, range.end, frequency)
                .await;
            out.insert(symbol.clone(), isolate(symbol, result)?);
        }
        Ok(out)
    }

    /// Dividends paid between two `YYYY-MM-DD` dates, both included, oldest
    /// first.
    ///
    /// A symbol without dividends in the range gets an empty entry.
    #[instrument(skip(self))]
    pub async fn get_daily_dividend_data(
        &self,
        start: &str,
        end: &str,
    ) -> Result<BySymbol<Vec<DividendEvent>>> {
        let range = DateRange::parse(start, end)?;

        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            debug!(
                provider = self.provider.name(),
                symbol = %symbol,
                "Fetching dividends"
            );
            let result = self
                .provider
                .fetch_dividends(symbol, range.start, range.end)
                .await;
            let dividends = isolate(symbol, result)?.filter(|d| !d.is_empty());
            out.insert(symbol.clone(), dividends);
        }
        Ok(out)
    }
}

impl<P: FundamentalDataProvider> YahooFinancials<P> {
    /// Financial statements of the requested types.
    ///
    /// One request per symbol covers every requested type. The result has a
    /// key per requested type, each with an entry per symbol.
    #[instrument(skip(self))]
    pub async fn get_financial_stmts(
        &self,
        period: PeriodType,
        statement_types: &[StatementType],
    ) -> Result<FinancialStatements> {
        let mut types = statement_types.to_vec();
        types.sort_unstable();
        types.dedup();
        if types.is_empty() {
            return Err(DataError::InvalidParameter(
                "at least one statement type is required".to_string(),
            ));
        }

        let mut out = FinancialStatements::new(period, &types);
        for symbol in &self.tickers {
            debug!(
                provider = self.provider.name(),
                symbol = %symbol,
                period = %period,
                "Fetching financial statements"
            );
            let result = self
                .provider
                .fetch_statements(symbol, period, &types)
                .await;
            let mut found = isolate(symbol, result)?.unwrap_or_default();
            for &statement_type in &types {
                out.insert(statement_type, symbol.clone(), found.remove(&statement_type));
            }
        }
        Ok(out)
    }

    /// A line item of the most recent annual income statement.
    async fn income_item(&self, item: &str) -> Result<BySymbol<f64>> {
        let mut statements = self
            .get_financial_stmts(PeriodType::Annual, &[StatementType::Income])
            .await?;
        let income = statements.take(StatementType::Income).unwrap_or_default();
        Ok(income.and_then(|periods| periods.first().and_then(|p| p.get(item))))
    }

    /// Net income of the most recent annual income statement.
    #[instrument(skip_all)]
    pub async fn get_net_income(&self) -> Result<BySymbol<i64>> {
        Ok(self.income_item("netIncome").await?.map(|v| v.round() as i64))
    }

    /// Earnings before interest and taxes.
    pub async fn get_ebit(&self) -> Result<BySymbol<f64>> {
        self.income_item("ebit").await
    }

    /// Interest expense.
    pub async fn get_interest_expense(&self) -> Result<BySymbol<f64>> {
        self.income_item("interestExpense").await
    }

    /// Operating income.
    pub async fn get_operating_income(&self) -> Result<BySymbol<f64>> {
        self.income_item("operatingIncome").await
    }

    /// Total operating expenses.
    pub async fn get_total_operating_expense(&self) -> Result<BySymbol<f64>> {
        self.income_item("totalOperatingExpenses").await
    }

    /// Total revenue.
    pub async fn get_total_revenue(&self) -> Result<BySymbol<f64>> {
        self.income_item("totalRevenue").await
    }

    /// Cost of revenue.
    pub async fn get_cost_of_revenue(&self) -> Result<BySymbol<f64>> {
        self.income_item("costOfRevenue").await
    }

    /// Income before tax.
    pub async fn get_income_before_tax(&self) -> Result<BySymbol<f64>> {
        self.income_item("incomeBeforeTax").await
    }

    /// Income tax expense.
    pub async fn get_income_tax_expense(&self) -> Result<BySymbol<f64>> {
        self.income_item("incomeTaxExpense").await
    }

    /// Gross profit.
    pub async fn get_gross_profit(&self) -> Result<BySymbol<f64>> {
        self.income_item("grossProfit").await
    }

    /// Net income from continuing operations.
    pub async fn get_net_income_from_continuing_ops(&self) -> Result<BySymbol<f64>> {
        self.income_item("netIncomeFromContinuingOps").await
    }

    /// Research and development expense.
    pub async fn get_research_and_development(&self) -> Result<BySymbol<f64>> {
        self.income_item("researchDevelopment").await
    }
}

impl<P: QuoteDataProvider> YahooFinancials<P> {
    /// The `price` module of every symbol.
    #[instrument(skip_all)]
    pub async fn get_stock_price_data(&self) -> Result<BySymbol<PriceQuote>> {
        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            debug!(provider = self.provider.name(), symbol = %symbol, "Fetching quote");
            let result = self.provider.fetch_quote(symbol).await;
            out.insert(symbol.clone(), isolate(symbol, result)?);
        }
        Ok(out)
    }

    /// The `summaryDetail` module of every symbol.
    #[instrument(skip_all)]
    pub async fn get_summary_data(&self) -> Result<BySymbol<SummaryDetail>> {
        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            debug!(provider = self.provider.name(), symbol = %symbol, "Fetching summary detail");
            let result = self.provider.fetch_summary_detail(symbol).await;
            out.insert(symbol.clone(), isolate(symbol, result)?);
        }
        Ok(out)
    }

    /// The `defaultKeyStatistics` module of every symbol.
    #[instrument(skip_all)]
    pub async fn get_key_statistics_data(&self) -> Result<BySymbol<KeyStatistics>> {
        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            debug!(provider = self.provider.name(), symbol = %symbol, "Fetching key statistics");
            let result = self.provider.fetch_key_statistics(symbol).await;
            out.insert(symbol.clone(), isolate(symbol, result)?);
        }
        Ok(out)
    }

    /// Latest market price.
    pub async fn get_current_price(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_stock_price_data()
            .await?
            .and_then(|q| q.regular_market_price))
    }

    /// Price change since the previous close.
    pub async fn get_current_change(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_stock_price_data()
            .await?
            .and_then(|q| q.regular_market_change))
    }

    /// Price change since the previous close, as a fraction.
    pub async fn get_current_percent_change(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_stock_price_data()
            .await?
            .and_then(|q| q.regular_market_change_percent))
    }

    /// Shares traded in the current session.
    pub async fn get_current_volume(&self) -> Result<BySymbol<i64>> {
        Ok(self
            .get_stock_price_data()
            .await?
            .and_then(|q| q.regular_market_volume))
    }

    /// Quote currency.
    pub async fn get_currency(&self) -> Result<BySymbol<String>> {
        Ok(self.get_stock_price_data().await?.and_then(|q| q.currency))
    }

    /// Exchange display name.
    pub async fn get_stock_exchange(&self) -> Result<BySymbol<String>> {
        Ok(self
            .get_stock_price_data()
            .await?
            .and_then(|q| q.exchange_name))
    }

    /// Previous session close.
    pub async fn get_prev_close_price(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.previous_close))
    }

    /// Session open.
    pub async fn get_open_price(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.open))
    }

    /// Session low.
    pub async fn get_daily_low(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.day_low))
    }

    /// Session high.
    pub async fn get_daily_high(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.day_high))
    }

    /// Market capitalization.
    pub async fn get_market_cap(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.market_cap))
    }

    /// 52-week high.
    pub async fn get_yearly_high(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.fifty_two_week_high))
    }

    /// 52-week low.
    pub async fn get_yearly_low(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.fifty_two_week_low))
    }

    /// Forward dividend yield.
    pub async fn get_dividend_yield(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.dividend_yield))
    }

    /// Forward annual dividend.
    pub async fn get_dividend_rate(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.dividend_rate))
    }

    /// Trailing annual dividend yield.
    pub async fn get_annual_avg_div_yield(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.trailing_annual_dividend_yield))
    }

    /// Trailing annual dividend.
    pub async fn get_annual_avg_div_rate(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.trailing_annual_dividend_rate))
    }

    /// Five-year average dividend yield, in percent.
    pub async fn get_five_yr_avg_div_yield(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.five_year_avg_dividend_yield))
    }

    /// Dividend payout ratio.
    pub async fn get_payout_ratio(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.payout_ratio))
    }

    /// Beta against the market.
    pub async fn get_beta(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.beta))
    }

    /// Trailing price to earnings.
    pub async fn get_pe_ratio(&self) -> Result<BySymbol<f64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.trailing_pe))
    }

    /// Trailing twelve-month price to sales.
    pub async fn get_price_to_sales(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.price_to_sales_trailing_12_months))
    }

    /// Ex-dividend date as `YYYY-MM-DD`.
    pub async fn get_exdividend_date(&self) -> Result<BySymbol<String>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.ex_dividend_date.and_then(|ts| format_epoch(ts, None))))
    }

    /// 50-day moving average.
    pub async fn get_fifty_day_moving_avg(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.fifty_day_average))
    }

    /// 200-day moving average.
    pub async fn get_two_hundred_day_moving_avg(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.two_hundred_day_average))
    }

    /// Average daily volume over ten days.
    pub async fn get_ten_day_avg_daily_volume(&self) -> Result<BySymbol<i64>> {
        Ok(self
            .get_summary_data()
            .await?
            .and_then(|d| d.average_volume_10days))
    }

    /// Average daily volume over three months.
    pub async fn get_three_month_avg_daily_volume(&self) -> Result<BySymbol<i64>> {
        Ok(self.get_summary_data().await?.and_then(|d| d.average_volume))
    }

    /// Book value per share.
    pub async fn get_book_value(&self) -> Result<BySymbol<f64>> {
        Ok(self
            .get_key_statistics_data()
            .await?
            .and_then(|s| s.book_value))
    }

    /// Shares outstanding.
    pub async fn get_num_shares_outstanding(&self) -> Result<BySymbol<i64>> {
        Ok(self
            .get_key_statistics_data()
            .await?
            .and_then(|s| s.shares_outstanding))
    }

    /// Earnings per share implied by the current price and trailing P/E.
    ///
    /// Empty for symbols without a price or with a zero P/E.
    pub async fn get_earnings_per_share(&self) -> Result<BySymbol<f64>> {
        let prices = self.get_current_price().await?;
        let ratios = self.get_pe_ratio().await?;

        let mut out = BySymbol::with_capacity(self.tickers.len());
        for symbol in &self.tickers {
            let eps = match (prices.get(symbol.as_str()), ratios.get(symbol.as_str())) {
                (Some(price), Some(pe)) if *pe != 0.0 => Some(price / pe),
                _ => None,
            };
            out.insert(symbol.clone(), eps);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use financials_core::StatementPeriod;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Knows `C` and `^IRX`, has nothing for `GONE` and is throttled on `BUSY`.
    #[derive(Debug, Default)]
    struct StubProvider {
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn check(&self, symbol: &Symbol) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match symbol.as_str() {
                "C" | "^IRX" => Ok(()),
                "BUSY" => Err(DataError::RateLimited {
                    provider: "stub".to_string(),
                }),
                other => Err(DataError::SymbolNotFound(other.to_string())),
            }
        }
    }

    impl DataProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn description(&self) -> &str {
            "in-memory test provider"
        }

        fn supported_frequencies(&self) -> &[DataFrequency] {
            DataFrequency::ALL
        }
    }

    #[async_trait]
    impl PriceDataProvider for StubProvider {
        async fn fetch_price_history(
            &self,
            symbol: &Symbol,
            _start: NaiveDate,
            _end: NaiveDate,
            _frequency: DataFrequency,
        ) -> Result<PriceHistory> {
            self.check(symbol)?;
            Ok(PriceHistory {
                currency: Some("USD".to_string()),
                ..PriceHistory::default()
            })
        }

        async fn fetch_dividends(
            &self,
            symbol: &Symbol,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DividendEvent>> {
            self.check(symbol)?;
            if symbol.as_str() == "^IRX" {
                return Ok(Vec::new());
            }
            Ok(vec![DividendEvent {
                date: 533313000,
                formatted_date: "1986-11-25".to_string(),
                amount: 0.02999,
            }])
        }
    }

    #[async_trait]
    impl FundamentalDataProvider for StubProvider {
        async fn fetch_statements(
            &self,
            symbol: &Symbol,
            _period_type: PeriodType,
            statement_types: &[StatementType],
        ) -> Result<BTreeMap<StatementType, Vec<StatementPeriod>>> {
            self.check(symbol)?;
            let mut out = BTreeMap::new();
            // ^IRX has no balance sheet
            for &t in statement_types {
                if symbol.as_str() == "^IRX" && t == StatementType::Balance {
                    continue;
                }
                let mut period =
                    StatementPeriod::new(NaiveDate::from_ymd_opt(2017, 12, 31).unwrap());
                period.items.insert("netIncome".to_string(), -6_798_000_000.0);
                period.items.insert("ebit".to_string(), 22_761_000_000.0);
                out.insert(t, vec![period]);
            }
            Ok(out)
        }
    }

    #[async_trait]
    impl QuoteDataProvider for StubProvider {
        async fn fetch_quote(&self, symbol: &Symbol) -> Result<PriceQuote> {
            self.check(symbol)?;
            Ok(PriceQuote {
                regular_market_price: Some(69.77),
                currency: Some("USD".to_string()),
                ..PriceQuote::default()
            })
        }

        async fn fetch_summary_detail(&self, symbol: &Symbol) -> Result<SummaryDetail> {
            self.check(symbol)?;
            Ok(SummaryDetail {
                trailing_pe: (symbol.as_str() == "C").then_some(10.0),
                ex_dividend_date: Some(1_518_739_200),
                ..SummaryDetail::default()
            })
        }

        async fn fetch_key_statistics(&self, symbol: &Symbol) -> Result<KeyStatistics> {
            self.check(symbol)?;
            Ok(KeyStatistics {
                shares_outstanding: Some(2_570_000_000),
                ..KeyStatistics::default()
            })
        }
    }

    fn client(tickers: &[&str]) -> YahooFinancials<StubProvider> {
        YahooFinancials::with_provider(tickers, StubProvider::default())
    }

    #[tokio::test]
    async fn test_one_entry_per_symbol() {
        let client = client(&["C", "GONE", "^IRX"]);
        let history = client
            .get_historical_price_data("2015-01-15", "2017-10-15", DataFrequency::Weekly)
            .await
            .unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.get("C").unwrap().currency.as_deref(), Some("USD"));
        assert!(history.contains_symbol("GONE"));
        assert!(history.get("GONE").is_none());
        assert_eq!(history.missing().count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_dates_fail_before_io() {
        let client = client(&["C"]);
        let bad_format = client
            .get_historical_price_data("2015/01/15", "2017-10-15", DataFrequency::Daily)
            .await;
        assert!(matches!(bad_format, Err(DataError::InvalidParameter(_))));

        let reversed = client.get_daily_dividend_data("2017-10-15", "2015-01-15").await;
        assert!(matches!(reversed, Err(DataError::InvalidParameter(_))));

        assert_eq!(client.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_missing_errors_propagate() {
        let client = client(&["C", "BUSY"]);
        let result = client.get_current_price().await;
        assert!(matches!(result, Err(DataError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn test_no_dividends_is_empty_entry() {
        let client = client(&["C", "^IRX"]);
        let dividends = client
            .get_daily_dividend_data("1986-09-15", "1987-09-15")
            .await
            .unwrap();

        assert_eq!(dividends.get("C").unwrap().len(), 1);
        assert!(dividends.contains_symbol("^IRX"));
        assert!(dividends.get("^IRX").is_none());
    }

    #[tokio::test]
    async fn test_financial_stmts_keys() {
        let client = client(&["C", "^IRX", "GONE"]);
        let statements = client
            .get_financial_stmts(
                PeriodType::Quarterly,
                &[StatementType::Income, StatementType::Cash, StatementType::Balance],
            )
            .await
            .unwrap();

        for key in [
            "incomeStatementHistoryQuarterly",
            "cashflowStatementHistoryQuarterly",
            "balanceSheetHistoryQuarterly",
        ] {
            let by_symbol = statements.get_by_name(key).unwrap();
            assert_eq!(by_symbol.len(), 3, "{key}");
            assert!(by_symbol.get("GONE").is_none());
        }

        let balance = statements.get(StatementType::Balance).unwrap();
        assert!(balance.get("C").is_some());
        assert!(balance.get("^IRX").is_none());
        // one request per symbol
        assert_eq!(client.provider().calls.load(Ordering::SeqCst), 3);

        let empty = client.get_financial_stmts(PeriodType::Annual, &[]).await;
        assert!(matches!(empty, Err(DataError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_scalar_accessors() {
        let client = client(&["C", "^IRX"]);

        let net_income = client.get_net_income().await.unwrap();
        assert_eq!(net_income.get("C"), Some(&-6_798_000_000_i64));

        let ebit = client.get_ebit().await.unwrap();
        assert_eq!(ebit.get("C"), Some(&22_761_000_000.0));
        assert!(client.get_gross_profit().await.unwrap().get("C").is_none());

        let price = client.get_current_price().await.unwrap();
        assert_eq!(price.get("^IRX"), Some(&69.77));

        let eps = client.get_earnings_per_share().await.unwrap();
        assert!((eps.get("C").unwrap() - 6.977).abs() < 1e-9);
        assert!(eps.get("^IRX").is_none());

        let ex_div = client.get_exdividend_date().await.unwrap();
        assert_eq!(ex_div.get("C").map(String::as_str), Some("2018-02-16"));

        let shares = client.get_num_shares_outstanding().await.unwrap();
        assert_eq!(shares.get("C"), Some(&2_570_000_000));
    }

    #[test]
    fn test_debug_shows_provider_name() {
        let client = client(&["C"]);
        let debug = format!("{client:?}");
        assert!(debug.contains("stub"));
        assert!(debug.contains("\"C\""));
    }
}
