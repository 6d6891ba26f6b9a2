//! HTTP request handlers

pub mod common;
pub mod health;
pub mod statistics;
pub mod transactions;

pub use health::health;
pub use statistics::get_statistics;
pub use transactions::{delete_transactions, post_transaction};
