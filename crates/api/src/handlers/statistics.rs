use axum::{extract::State, response::Json};
use tracing::debug;

use crate::state::AppState;
use txstats_types::StatisticsResponse;

/// GET /statistics - Statistics over the trailing window
///
/// Never fails; an empty window renders all-zero amounts.
pub async fn get_statistics(State(state): State<AppState>) -> Json<StatisticsResponse> {
	let aggregate = state.statistics_service.statistics();
	debug!(count = aggregate.count, "serving window statistics");
	Json(StatisticsResponse::from(&aggregate))
}
