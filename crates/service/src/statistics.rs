//! Statistics facade over the bucketed aggregate store
//!
//! One submission walks a small state machine: parse the wire strings
//! (`Unparseable` on failure), reject instants ahead of the clock
//! (`Future`) or already outside the window (`Stale`), otherwise evict
//! stale buckets and merge. Reads evict first too, so every caller
//! observes the window relative to its own clock reading.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use txstats_storage::StatisticsStore;
use txstats_types::{Aggregate, TransactionError, TransactionRequest, TransactionResult};

/// Orchestrates recording, window reads and resets
///
/// The retention window is an explicit immutable constructor argument,
/// read once at startup, never ambient state.
pub struct StatisticsService {
	store: Arc<dyn StatisticsStore>,
	retention_secs: i64,
}

impl StatisticsService {
	pub fn new(store: Arc<dyn StatisticsStore>, retention_secs: i64) -> Self {
		Self {
			store,
			retention_secs,
		}
	}

	/// Retention window length in seconds
	pub fn retention_secs(&self) -> i64 {
		self.retention_secs
	}

	/// Record a submitted transaction against the current clock
	pub fn record(&self, request: &TransactionRequest) -> TransactionResult<()> {
		self.record_at(request, Utc::now())
	}

	/// Record a submitted transaction against an explicit `now`
	pub fn record_at(
		&self,
		request: &TransactionRequest,
		now: DateTime<Utc>,
	) -> TransactionResult<()> {
		let transaction = request.parse()?;
		if transaction.timestamp > now {
			return Err(TransactionError::Future);
		}
		if transaction.timestamp < now - Duration::seconds(self.retention_secs) {
			return Err(TransactionError::Stale);
		}

		self.store.evict(now.timestamp(), self.retention_secs);
		let aggregate = self.store.merge(transaction.bucket_key(), transaction.amount);
		debug!(
			bucket = transaction.bucket_key(),
			bucket_count = aggregate.count,
			"merged transaction into bucket"
		);
		Ok(())
	}

	/// Statistics over the trailing window as of the current clock
	pub fn statistics(&self) -> Aggregate {
		self.statistics_at(Utc::now())
	}

	/// Statistics over the trailing window as of an explicit `now`
	pub fn statistics_at(&self, now: DateTime<Utc>) -> Aggregate {
		self.store.evict(now.timestamp(), self.retention_secs);
		self.store.reduce()
	}

	/// Drop every recorded transaction
	pub fn reset(&self) {
		self.store.clear();
		info!("statistics reset, all buckets dropped");
	}
}
