//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the optional config file, then apply
/// `TXSTATS__`-prefixed environment overrides
/// (e.g. `TXSTATS__STATISTICS__RETENTION_SECS=90`)
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("TXSTATS").separator("__"))
		.build()?;

	s.try_deserialize()
}
