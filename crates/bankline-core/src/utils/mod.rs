//! Utility functions for formatting values for display.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_amount, format_date, format_optional, format_timestamp, truncate_string};
