//! FinTrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the FinTrack application:
//! a ledger of inflows and outflows with budget pacing, pooled savings and
//! savings goals, kept mutually consistent by a reconciliation engine.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (the account aggregate and its parts)
//! - `ledger`: The reconciliation engine - every mutation of an aggregate
//!   goes through it, and pure reads (budget pacing, usable balance) live
//!   beside it
//! - `import`: Import parser contract and the CSV parser
//! - `storage`: JSON file storage, one file per profile
//! - `audit`: Append-only audit log of ledger mutations
//! - `reports`: Spending and monthly summaries
//! - `export`: CSV/JSON/YAML exports
//! - `display`: Terminal rendering
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use fintrack::ledger::{Ledger, TransactionDraft};
//! use fintrack::models::{AccountBook, Money, TransactionKind};
//!
//! let mut book = AccountBook::new();
//! let mut ledger = Ledger::new(&mut book);
//! ledger.add_transaction(TransactionDraft {
//!     kind: TransactionKind::Inflow,
//!     amount: Money::from_cents(500_00),
//!     date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
//!     merchant: "Acme Corp".into(),
//!     description: "Salary".into(),
//!     category: "Salary".into(),
//!     exclude_from_budget: false,
//! }).unwrap();
//! assert_eq!(book.total_balance, Money::from_cents(500_00));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
