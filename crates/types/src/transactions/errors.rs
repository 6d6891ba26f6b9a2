//! Error taxonomy for rejected transaction submissions
//!
//! The three variants are distinct terminal outcomes of the submission
//! state machine and must never be collapsed: the transport layer maps
//! them to different status codes.

use thiserror::Error;

/// Why a transaction submission was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
	/// The amount or the timestamp could not be interpreted
	#[error("transaction amount or timestamp could not be parsed")]
	Unparseable,

	/// The timestamp is strictly ahead of the server clock
	#[error("transaction timestamp lies in the future")]
	Future,

	/// The timestamp is older than the retention window; the transaction
	/// is a no-op, not invalid input
	#[error("transaction timestamp is older than the retention window")]
	Stale,
}
