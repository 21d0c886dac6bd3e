//! Quote summary types.
//!
//! Snapshot views of a symbol: the live [`PriceQuote`], the trading
//! [`SummaryDetail`] and the valuation [`KeyStatistics`]. Every field is
//! optional; currencies, indices and treasuries only fill a subset.

use serde::{Deserialize, Serialize};

/// Latest market price and session figures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Short display name.
    pub short_name: Option<String>,
    /// Full display name.
    pub long_name: Option<String>,
    /// Quote type, e.g. `EQUITY`, `CURRENCY` or `INDEX`.
    pub quote_type: Option<String>,
    /// Quote currency.
    pub currency: Option<String>,
    /// Listing exchange name.
    pub exchange_name: Option<String>,
    /// Last traded price.
    pub regular_market_price: Option<f64>,
    /// Change since previous close.
    pub regular_market_change: Option<f64>,
    /// Change since previous close as a fraction.
    pub regular_market_change_percent: Option<f64>,
    /// Session volume.
    pub regular_market_volume: Option<i64>,
    /// Previous session close.
    pub regular_market_previous_close: Option<f64>,
    /// Session open.
    pub regular_market_open: Option<f64>,
    /// Session low.
    pub regular_market_day_low: Option<f64>,
    /// Session high.
    pub regular_market_day_high: Option<f64>,
    /// Unix timestamp of the last trade.
    pub regular_market_time: Option<i64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
}

/// Trading and dividend summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryDetail {
    /// Quote currency.
    pub currency: Option<String>,
    /// Previous session close.
    pub previous_close: Option<f64>,
    /// Session open.
    pub open: Option<f64>,
    /// Session low.
    pub day_low: Option<f64>,
    /// Session high.
    pub day_high: Option<f64>,
    /// 52-week low.
    pub fifty_two_week_low: Option<f64>,
    /// 52-week high.
    pub fifty_two_week_high: Option<f64>,
    /// Session volume.
    pub volume: Option<i64>,
    /// Average daily volume over three months.
    pub average_volume: Option<i64>,
    /// Average daily volume over ten days.
    pub average_volume_10days: Option<i64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Forward annual dividend per share.
    pub dividend_rate: Option<f64>,
    /// Forward dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Unix timestamp of the next or last ex-dividend date.
    pub ex_dividend_date: Option<i64>,
    /// Dividend payout ratio.
    pub payout_ratio: Option<f64>,
    /// Five year average dividend yield, in percent.
    pub five_year_avg_dividend_yield: Option<f64>,
    /// Trailing twelve month dividend per share.
    pub trailing_annual_dividend_rate: Option<f64>,
    /// Trailing twelve month dividend yield as a fraction.
    pub trailing_annual_dividend_yield: Option<f64>,
    /// Beta against the market.
    pub beta: Option<f64>,
    /// Trailing price/earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Forward price/earnings ratio.
    pub forward_pe: Option<f64>,
    /// Trailing twelve month price/sales ratio.
    pub price_to_sales_trailing_12_months: Option<f64>,
    /// Fifty day moving average.
    pub fifty_day_average: Option<f64>,
    /// Two hundred day moving average.
    pub two_hundred_day_average: Option<f64>,
}

/// Valuation and share statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyStatistics {
    /// Enterprise value.
    pub enterprise_value: Option<f64>,
    /// Forward price/earnings ratio.
    pub forward_pe: Option<f64>,
    /// Net profit margin.
    pub profit_margins: Option<f64>,
    /// Shares available to trade.
    pub float_shares: Option<i64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<i64>,
    /// Book value per share.
    pub book_value: Option<f64>,
    /// Price/book ratio.
    pub price_to_book: Option<f64>,
    /// Trailing twelve month earnings per share.
    pub trailing_eps: Option<f64>,
    /// Forward earnings per share.
    pub forward_eps: Option<f64>,
    /// Beta against the market.
    pub beta: Option<f64>,
    /// Unix timestamp of the last fiscal year end.
    pub last_fiscal_year_end: Option<i64>,
    /// Unix timestamp of the most recent quarter end.
    pub most_recent_quarter: Option<i64>,
}
