//! Configuration settings structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default retention window in seconds
pub const DEFAULT_RETENTION_SECS: i64 = 60;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub statistics: StatisticsSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Statistics window configuration
///
/// The retention window is the one tunable of the system: the trailing
/// duration within which transactions contribute to statistics. Read once
/// at process start, immutable thereafter.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StatisticsSettings {
	pub retention_secs: i64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log output formats
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	#[default]
	Pretty,
	Compact,
}

/// Configuration validation failures detected at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("retention window must be positive, got {0}")]
	NonPositiveRetention(i64),
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

impl Default for StatisticsSettings {
	fn default() -> Self {
		Self {
			retention_secs: DEFAULT_RETENTION_SECS,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::default(),
			structured: false,
		}
	}
}

impl Settings {
	/// Address the HTTP server binds to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Reject settings the service cannot run with
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.statistics.retention_secs <= 0 {
			return Err(ConfigValidationError::NonPositiveRetention(
				self.statistics.retention_secs,
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::default();

		assert_eq!(settings.bind_address(), "0.0.0.0:8080");
		assert_eq!(settings.statistics.retention_secs, 60);
		assert_eq!(settings.logging.level, "info");
		assert_eq!(settings.logging.format, LogFormat::Pretty);
		assert_eq!(settings.validate(), Ok(()));
	}

	#[test]
	fn test_validate_rejects_non_positive_retention() {
		let mut settings = Settings::default();
		settings.statistics.retention_secs = 0;

		assert_eq!(
			settings.validate(),
			Err(ConfigValidationError::NonPositiveRetention(0))
		);
	}
}
