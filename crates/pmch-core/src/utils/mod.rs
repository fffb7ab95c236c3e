//! Utility functions for display formatting.

pub mod format;

pub use format::{format_last_updated, truncate_string};
