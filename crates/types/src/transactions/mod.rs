//! Core Transaction domain model
//!
//! A transaction is a validated submission: an exact decimal amount and the
//! instant it occurred. Transactions sharing the same whole second share one
//! aggregate bucket.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub mod errors;
pub mod request;

pub use errors::TransactionError;
pub use request::TransactionRequest;

/// Result type for transaction submission operations
pub type TransactionResult<T> = Result<T, TransactionError>;

/// A validated monetary transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	/// Transaction amount, parsed exactly from the wire string
	pub amount: Decimal,

	/// Instant the transaction occurred, normalized to UTC
	pub timestamp: DateTime<Utc>,
}

impl Transaction {
	pub fn new(amount: Decimal, timestamp: DateTime<Utc>) -> Self {
		Self { amount, timestamp }
	}

	/// Bucket key: the timestamp truncated to whole epoch seconds
	pub fn bucket_key(&self) -> i64 {
		self.timestamp.timestamp()
	}
}
