//! CLI library components for Listing Insights.

pub mod export;
pub mod logging;
