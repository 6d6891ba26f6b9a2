//! Service startup logging
//!
//! Logs service, environment and system information once the process is
//! configured, and a completion banner once the listener is bound.

use std::env;
use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "txstats";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Transaction Statistics Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion once the server is listening
pub fn log_startup_complete(bind_address: &str) {
	info!("=== Startup Complete ===");
	info!("🌐 Listening on: http://{}", bind_address);
}
