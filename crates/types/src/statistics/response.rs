//! Statistics response model
//!
//! Wire shape for `GET /statistics`. Monetary fields are serialized as
//! strings with exactly two fractional digits, half-up rounded, and the
//! field order is part of the contract.

use serde::{Deserialize, Serialize};

use super::{round_half_up, Aggregate};
use rust_decimal::Decimal;

/// API response body for the /statistics endpoint
///
/// Field declaration order is the serialized order: sum, avg, max, min,
/// count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatisticsResponse {
	/// Total transaction value inside the window, e.g. "25.00"
	pub sum: String,
	/// Average transaction value inside the window
	pub avg: String,
	/// Highest single transaction value inside the window
	pub max: String,
	/// Lowest single transaction value inside the window
	pub min: String,
	/// Number of transactions inside the window
	pub count: u64,
}

/// Format a monetary value with exactly two fractional digits
fn format_amount(value: Decimal) -> String {
	format!("{:.2}", round_half_up(value))
}

impl From<&Aggregate> for StatisticsResponse {
	fn from(aggregate: &Aggregate) -> Self {
		Self {
			sum: format_amount(aggregate.sum),
			avg: format_amount(aggregate.avg()),
			max: format_amount(aggregate.max.unwrap_or_default()),
			min: format_amount(aggregate.min.unwrap_or_default()),
			count: aggregate.count,
		}
	}
}
