use std::sync::Arc;

use txstats_service::StatisticsService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub statistics_service: Arc<StatisticsService>,
}
