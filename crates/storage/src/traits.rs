//! Storage trait for pluggable bucket store implementations

use rust_decimal::Decimal;
use txstats_types::Aggregate;

/// Bucketed aggregate store contract
///
/// Implementations must be safe under true parallelism: concurrent merges
/// on the same key are linearizable (no lost updates), and merges on
/// different keys must not contend beyond shard granularity. None of these
/// operations fail under valid input; an absent bucket is a valid empty
/// state, not an error.
pub trait StatisticsStore: Send + Sync {
	/// Atomically create-or-update the aggregate for `bucket_key` with one
	/// transaction of `amount`, returning the updated aggregate.
	///
	/// A merge racing an eviction pass at the window boundary may land
	/// before the removal or recreate the bucket afterwards, but it is
	/// never silently dropped.
	fn merge(&self, bucket_key: i64, amount: Decimal) -> Aggregate;

	/// Remove every bucket whose key has aged out of the window:
	/// `now - key >= retention_secs`. Idempotent; a pass with nothing
	/// expired is a no-op.
	fn evict(&self, now: i64, retention_secs: i64);

	/// Remove all buckets unconditionally
	fn clear(&self);

	/// Fold every live bucket into one combined aggregate
	///
	/// Each bucket is read consistently (no torn aggregate), but the fold
	/// is not an atomic snapshot across buckets; merges concurrent with a
	/// reduction may or may not be included, and will be by the next one.
	fn reduce(&self) -> Aggregate;

	/// Number of live buckets, for logging and diagnostics
	fn bucket_count(&self) -> usize;
}
