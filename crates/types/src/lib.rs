//! Txstats Types
//!
//! Domain types for the transaction statistics service: the per-bucket
//! aggregate, the transaction model and its wire DTOs, and the error
//! taxonomy for rejected submissions.

pub mod statistics;
pub mod transactions;

pub use statistics::{Aggregate, StatisticsResponse};
pub use transactions::{Transaction, TransactionError, TransactionRequest, TransactionResult};

// Re-export external dependencies used in public signatures
pub use chrono;
pub use rust_decimal;
