//! Txstats API
//!
//! Axum-based HTTP surface with routes and middleware for the transaction
//! statistics service.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
