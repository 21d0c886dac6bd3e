//! Financial statement types.
//!
//! A statement request names a [`PeriodType`] and one or more
//! [`StatementType`]s. The answer is a [`FinancialStatements`] map from each
//! statement's history name (for example `balanceSheetHistoryQuarterly`) to
//! the per-symbol list of reporting periods.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::by_symbol::BySymbol;
use crate::error::DataError;
use crate::frequency::PeriodType;
use crate::types::Symbol;

/// Kind of financial statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementType {
    /// Income statement.
    Income,
    /// Balance sheet.
    Balance,
    /// Cash flow statement.
    Cash,
}

impl StatementType {
    /// All statement types.
    pub const ALL: &'static [Self] = &[Self::Income, Self::Balance, Self::Cash];

    /// Name of the statement history for `period`.
    #[must_use]
    pub const fn history_name(&self, period: PeriodType) -> &'static str {
        match (self, period) {
            (Self::Income, PeriodType::Annual) => "incomeStatementHistory",
            (Self::Income, PeriodType::Quarterly) => "incomeStatementHistoryQuarterly",
            (Self::Balance, PeriodType::Annual) => "balanceSheetHistory",
            (Self::Balance, PeriodType::Quarterly) => "balanceSheetHistoryQuarterly",
            (Self::Cash, PeriodType::Annual) => "cashflowStatementHistory",
            (Self::Cash, PeriodType::Quarterly) => "cashflowStatementHistoryQuarterly",
        }
    }

    /// Short name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::Cash => "cash",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "balance" => Ok(Self::Balance),
            "cash" | "cashflow" => Ok(Self::Cash),
            other => Err(DataError::InvalidParameter(format!(
                "unknown statement type '{other}', expected income, balance or cash"
            ))),
        }
    }
}

/// Line items of one reporting period.
///
/// Serializes as `{"end_date": "2017-09-30", "items": {..}}`. Use
/// [`keyed`](Self::keyed) for the Yahoo Financials layout, where each period
/// is a single-entry map from its end date to the line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementPeriod {
    /// Last day of the reporting period.
    pub end_date: NaiveDate,
    /// Line items keyed by their provider name, e.g. `netIncome`.
    pub items: BTreeMap<String, f64>,
}

impl StatementPeriod {
    /// Creates an empty period.
    #[must_use]
    pub const fn new(end_date: NaiveDate) -> Self {
        Self {
            end_date,
            items: BTreeMap::new(),
        }
    }

    /// Returns a line item.
    #[must_use]
    pub fn get(&self, item: &str) -> Option<f64> {
        self.items.get(item).copied()
    }

    /// Returns a line item as whole currency units.
    #[must_use]
    pub fn get_i64(&self, item: &str) -> Option<i64> {
        self.get(item).map(|v| v.round() as i64)
    }

    /// The period as `{"YYYY-MM-DD": items}`.
    #[must_use]
    pub fn keyed(&self) -> BTreeMap<String, &BTreeMap<String, f64>> {
        BTreeMap::from([(self.end_date.to_string(), &self.items)])
    }
}

/// Statements for one period type, grouped by statement and symbol.
///
/// Every requested statement type has a key even if no symbol returned data
/// for it. Serializes as a map keyed by history name.
#[derive(Clone, Debug, PartialEq)]
pub struct FinancialStatements {
    period: PeriodType,
    statements: BTreeMap<StatementType, BySymbol<Vec<StatementPeriod>>>,
}

impl FinancialStatements {
    /// Creates an empty result with a key per requested statement type.
    #[must_use]
    pub fn new(period: PeriodType, statement_types: &[StatementType]) -> Self {
        Self {
            period,
            statements: statement_types
                .iter()
                .map(|t| (*t, BySymbol::new()))
                .collect(),
        }
    }

    /// The period type these statements cover.
    #[must_use]
    pub const fn period(&self) -> PeriodType {
        self.period
    }

    /// Records the periods of one statement for one symbol.
    pub fn insert(
        &mut self,
        statement_type: StatementType,
        symbol: Symbol,
        periods: Option<Vec<StatementPeriod>>,
    ) {
        self.statements
            .entry(statement_type)
            .or_default()
            .insert(symbol, periods);
    }

    /// Per-symbol periods for a statement type.
    #[must_use]
    pub fn get(&self, statement_type: StatementType) -> Option<&BySymbol<Vec<StatementPeriod>>> {
        self.statements.get(&statement_type)
    }

    /// Per-symbol periods looked up by history name.
    #[must_use]
    pub fn get_by_name(&self, history_name: &str) -> Option<&BySymbol<Vec<StatementPeriod>>> {
        self.statements
            .iter()
            .find(|(t, _)| t.history_name(self.period) == history_name)
            .map(|(_, v)| v)
    }

    /// Returns true if the statement history is present.
    #[must_use]
    pub fn contains_key(&self, history_name: &str) -> bool {
        self.get_by_name(history_name).is_some()
    }

    /// History names present in this result.
    pub fn history_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.statements.keys().map(|t| t.history_name(self.period))
    }

    /// Takes the periods of one statement out of the result.
    pub fn take(&mut self, statement_type: StatementType) -> Option<BySymbol<Vec<StatementPeriod>>> {
        self.statements.remove(&statement_type)
    }
}

impl Serialize for FinancialStatements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.statements.len()))?;
        for (statement_type, by_symbol) in &self.statements {
            map.serialize_entry(statement_type.history_name(self.period), by_symbol)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(end: &str, net_income: f64) -> StatementPeriod {
        let mut p = StatementPeriod::new(NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap());
        p.items.insert("netIncome".to_string(), net_income);
        p
    }

    #[test]
    fn test_history_names() {
        assert_eq!(
            StatementType::Balance.history_name(PeriodType::Quarterly),
            "balanceSheetHistoryQuarterly"
        );
        assert_eq!(
            StatementType::Cash.history_name(PeriodType::Annual),
            "cashflowStatementHistory"
        );
        assert_eq!("cash".parse::<StatementType>().unwrap(), StatementType::Cash);
        assert!("equity".parse::<StatementType>().is_err());
    }

    #[test]
    fn test_period_shapes() {
        let p = period("2017-09-30", 4_133_000_000.0);
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            serde_json::json!({"end_date": "2017-09-30", "items": {"netIncome": 4_133_000_000.0}})
        );
        assert_eq!(
            serde_json::to_value(p.keyed()).unwrap(),
            serde_json::json!({"2017-09-30": {"netIncome": 4_133_000_000.0}})
        );
    }

    #[test]
    fn test_every_requested_type_has_a_key() {
        let statements = FinancialStatements::new(PeriodType::Quarterly, StatementType::ALL);
        let mut names: Vec<&str> = statements.history_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "balanceSheetHistoryQuarterly",
                "cashflowStatementHistoryQuarterly",
                "incomeStatementHistoryQuarterly"
            ]
        );
        assert!(statements.contains_key("incomeStatementHistoryQuarterly"));
        assert!(!statements.contains_key("incomeStatementHistory"));
    }

    #[test]
    fn test_insert_and_serialize() {
        let mut statements = FinancialStatements::new(PeriodType::Annual, &[StatementType::Income]);
        statements.insert(
            StatementType::Income,
            Symbol::new("C"),
            Some(vec![period("2017-12-31", -6_798_000_000.0)]),
        );
        statements.insert(StatementType::Income, Symbol::new("NOPE"), None);

        let income = statements.get(StatementType::Income).unwrap();
        assert_eq!(income.len(), 2);
        assert_eq!(
            income.get("C").unwrap()[0].get_i64("netIncome"),
            Some(-6_798_000_000)
        );

        let value = serde_json::to_value(&statements).unwrap();
        assert!(value["incomeStatementHistory"]["NOPE"].is_null());
        assert_eq!(
            value["incomeStatementHistory"]["C"][0]["end_date"],
            serde_json::json!("2017-12-31")
        );
    }
}
