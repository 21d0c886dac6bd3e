#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/financials/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Historical prices, dividends and financial statements for many symbols.
//!
//! This crate re-exports the core types and the Yahoo Finance provider, and
//! provides [`YahooFinancials`], a client bound to a list of symbols whose
//! methods return one entry per symbol.
//!
//! # Example
//!
//! ```rust,ignore
//! use financials::{PeriodType, StatementType, YahooFinancials};
//!
//! #[tokio::main]
//! async fn main() -> financials::Result<()> {
//!     let client = YahooFinancials::new(["C", "MSFT"]);
//!
//!     let statements = client
//!         .get_financial_stmts(PeriodType::Quarterly, &[StatementType::Income])
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&statements).unwrap());
//!
//!     let prices = client.get_current_price().await?;
//!     println!("{:?}", prices.get("C"));
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use financials_core::*;

// Provider
pub use financials_yahoo::{YahooConfig, YahooProvider};

mod facade;
pub use facade::YahooFinancials;
