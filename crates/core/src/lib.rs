//! Core finance logic for FinTrack.
//!
//! This crate contains pure business logic with ZERO web or I/O dependencies
//! and no logging. Every operation is a function of its inputs.
//!
//! # Modules
//!
//! - `transaction` - Transactions, categories and the in-memory ledger
//! - `aggregation` - Date filtering, totals and category grouping
//! - `budget` - Budget plans and budget-versus-actual variance
//! - `currency` - Indian Rupee display formatting
//! - `reports` - Transaction, income, expense and budget reports
//! - `dashboard` - Dashboard headline figures
//! - `seed` - Demo fixture data

pub mod aggregation;
pub mod budget;
pub mod currency;
pub mod dashboard;
pub mod reports;
pub mod seed;
pub mod transaction;
