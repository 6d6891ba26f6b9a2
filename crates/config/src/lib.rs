//! Txstats Configuration
//!
//! Configuration management and startup utilities for the transaction
//! statistics service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	ConfigValidationError, LogFormat, LoggingSettings, ServerSettings, Settings,
	StatisticsSettings,
};
pub use startup_logger::{log_service_info, log_startup_complete};
