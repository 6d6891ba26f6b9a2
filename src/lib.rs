//! Txstats Library
//!
//! Rolling statistics (sum, avg, min, max, count) over monetary
//! transactions inside a trailing time window, served over HTTP. The core
//! is a concurrent map of per-second aggregate buckets with atomic
//! merge-on-insert, window eviction and an order-independent reduction.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types
pub use txstats_types::{
	Aggregate, StatisticsResponse, Transaction, TransactionError, TransactionRequest,
	TransactionResult,
};

// Service layer
pub use txstats_service::StatisticsService;

// Storage layer
pub use txstats_storage::{MemoryStore, StatisticsStore};

// API layer
pub use txstats_api::{create_router, AppState};

// Config
pub use txstats_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for callers that prefer the crate tree
pub mod types {
	pub use txstats_types::*;
}

pub mod storage {
	pub use txstats_storage::*;
}

pub mod service {
	pub use txstats_service::*;
}

pub mod api {
	pub use txstats_api::*;
}

pub mod config {
	pub use txstats_config::*;
}

/// Builder pattern for configuring the statistics server
pub struct ServerBuilder<S = MemoryStore>
where
	S: StatisticsStore + Clone + 'static,
{
	settings: Option<Settings>,
	store: S,
}

impl ServerBuilder<MemoryStore> {
	/// Create a new builder with the default in-memory store
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl Default for ServerBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S> ServerBuilder<S>
where
	S: StatisticsStore + Clone + 'static,
{
	/// Create a new builder with the provided store
	pub fn with_storage(store: S) -> Self {
		Self {
			settings: None,
			store,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use txstats_config::LogFormat;

		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}",
			settings.logging.level, settings.logging.format
		);

		Ok(())
	}

	/// Wire the service and return the configured router with its state
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();
		settings.validate()?;

		let store: Arc<dyn StatisticsStore> = Arc::new(self.store.clone());
		let statistics_service = Arc::new(StatisticsService::new(
			store,
			settings.statistics.retention_secs,
		));

		info!(
			"Statistics service initialized with a {}s retention window",
			settings.statistics.retention_secs
		);

		let app_state = AppState { statistics_service };
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, loads configuration, initializes tracing, binds the
	/// listener and serves the application.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info();

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  POST   /transactions");
		info!("  GET    /statistics");
		info!("  DELETE /transactions");
		info!("  GET    /health");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
