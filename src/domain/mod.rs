/// Domain module containing core business logic and data types
///
/// This module defines the core entities (DailySample, DailyRecord,
/// HistoryLog) and the pure derived metrics. These types represent the
/// fundamental concepts in the tracking core and carry no knowledge of
/// persistence or UI.

pub mod history;
pub mod metrics;
pub mod record;
pub mod types;

// Re-export public types for easy access
pub use history::*;
pub use metrics::*;
pub use record::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid amount {amount} for {category}: {reason}")]
    InvalidAmount {
        category: Category,
        amount: f64,
        reason: String,
    },

    #[error("invalid profile value: {0}")]
    InvalidProfile(String),
}
