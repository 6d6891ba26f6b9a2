//! Txstats Service
//!
//! The statistics facade: validates submissions against the retention
//! window and orchestrates the store's evict/merge/reduce operations.

pub mod statistics;

pub use statistics::StatisticsService;
