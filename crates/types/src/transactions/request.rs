//! Transaction request model and wire-level parsing
//!
//! The submission body carries both fields as strings: the amount to keep
//! exact decimal precision, the timestamp as ISO-8601. Parsing failures
//! surface as [`TransactionError::Unparseable`]; whether the instant is
//! acceptable relative to the window is the service's decision, not the
//! parser's.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Transaction, TransactionError, TransactionResult};

/// API request body for the POST /transactions endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRequest {
	/// Transaction amount as a decimal string, e.g. "12.3343"
	pub amount: String,

	/// Transaction time as an ISO-8601 string, e.g.
	/// "2026-08-30T09:59:51.312Z"
	pub timestamp: String,
}

impl TransactionRequest {
	pub fn new(amount: impl Into<String>, timestamp: impl Into<String>) -> Self {
		Self {
			amount: amount.into(),
			timestamp: timestamp.into(),
		}
	}

	/// Parse the wire strings into a validated [`Transaction`]
	pub fn parse(&self) -> TransactionResult<Transaction> {
		let amount =
			Decimal::from_str(&self.amount).map_err(|_| TransactionError::Unparseable)?;
		let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
			.map_err(|_| TransactionError::Unparseable)?
			.with_timezone(&Utc);

		Ok(Transaction::new(amount, timestamp))
	}
}
