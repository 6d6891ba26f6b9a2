//! Core Aggregate domain model and the fold that combines aggregates
//!
//! One `Aggregate` describes the transactions merged into a single time
//! bucket, or the global result of folding every live bucket together.

use rust_decimal::{Decimal, RoundingStrategy};

pub mod response;

pub use response::StatisticsResponse;

/// Rounds a decimal to two fractional digits, half-up.
///
/// Applied to every monetary value that leaves the system, and to the
/// derived average, so partial and global aggregates round identically.
pub fn round_half_up(value: Decimal) -> Decimal {
	value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Statistics over a multiset of transaction amounts
///
/// Created empty when a bucket key is first touched, mutated in place by
/// [`Aggregate::merge`], and folded across buckets with
/// [`Aggregate::combine`]. The average is never stored; it is derived from
/// `sum` and `count` on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
	/// Exact total of all merged amounts
	pub sum: Decimal,

	/// Number of merged transactions
	pub count: u64,

	/// Lowest merged amount; `None` until the first merge
	pub min: Option<Decimal>,

	/// Highest merged amount; `None` until the first merge
	pub max: Option<Decimal>,
}

impl Aggregate {
	/// Fold one transaction amount into this aggregate
	///
	/// The sum saturates at the `Decimal` range bounds instead of
	/// panicking; any amount that parses is safe to merge.
	pub fn merge(&mut self, amount: Decimal) {
		self.sum = self.sum.saturating_add(amount);
		self.count += 1;
		self.min = Some(match self.min {
			Some(current) => current.min(amount),
			None => amount,
		});
		self.max = Some(match self.max {
			Some(current) => current.max(amount),
			None => amount,
		});
	}

	/// Combine two aggregates into one
	///
	/// Associative and commutative over any bucket set, so the global
	/// result is independent of iteration order and of how transactions
	/// were partitioned into buckets. Absent extrema act as identity
	/// elements. Sums saturate at the `Decimal` range bounds, like
	/// [`Aggregate::merge`].
	pub fn combine(mut self, other: &Aggregate) -> Aggregate {
		self.sum = self.sum.saturating_add(other.sum);
		self.count += other.count;
		self.min = match (self.min, other.min) {
			(Some(a), Some(b)) => Some(a.min(b)),
			(a, b) => a.or(b),
		};
		self.max = match (self.max, other.max) {
			(Some(a), Some(b)) => Some(a.max(b)),
			(a, b) => a.or(b),
		};
		self
	}

	/// Derived average: `sum / count` rounded to two digits half-up,
	/// or zero when the aggregate is empty
	pub fn avg(&self) -> Decimal {
		if self.count > 0 {
			round_half_up(self.sum / Decimal::from(self.count))
		} else {
			Decimal::ZERO
		}
	}

	/// True when no transaction has been merged
	pub fn is_empty(&self) -> bool {
		self.count == 0
	}
}
