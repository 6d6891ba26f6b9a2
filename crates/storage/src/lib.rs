//! Txstats Storage
//!
//! The bucketed aggregate store: a concurrent map from epoch-second bucket
//! keys to per-bucket aggregates, with atomic merge-on-insert, window
//! eviction, full clear, and an order-independent reduction.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::StatisticsStore;
