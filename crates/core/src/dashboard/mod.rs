//! Dashboard headline figures.
//!
//! Balance, income, expenses and savings for a period, the newest
//! transactions, and budget usage per category.

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::*;
