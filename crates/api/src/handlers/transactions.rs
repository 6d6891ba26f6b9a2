use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use tracing::debug;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use txstats_types::{TransactionError, TransactionRequest};

/// POST /transactions - Record a transaction
///
/// Outcome mapping: recorded → 201 with an empty body; a stale timestamp
/// is a no-op, not an error → 204; an unparseable field or a future
/// timestamp → 422; a structurally invalid body (missing field, malformed
/// JSON) → 400. The axum Json extractor's own rejection status must not
/// leak, hence the explicit rejection arm.
pub async fn post_transaction(
	State(state): State<AppState>,
	payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response {
	let Json(request) = match payload {
		Ok(json) => json,
		Err(rejection) => {
			debug!("rejected malformed transaction body: {}", rejection);
			return (
				StatusCode::BAD_REQUEST,
				Json(ErrorResponse::new("MALFORMED_REQUEST", rejection.body_text())),
			)
				.into_response();
		},
	};

	match state.statistics_service.record(&request) {
		Ok(()) => StatusCode::CREATED.into_response(),
		Err(TransactionError::Stale) => {
			debug!("discarded stale transaction at {}", request.timestamp);
			StatusCode::NO_CONTENT.into_response()
		},
		Err(error @ (TransactionError::Unparseable | TransactionError::Future)) => {
			debug!("rejected transaction: {}", error);
			(
				StatusCode::UNPROCESSABLE_ENTITY,
				Json(ErrorResponse::new("INVALID_TRANSACTION", error.to_string())),
			)
				.into_response()
		},
	}
}

/// DELETE /transactions - Reset all statistics
pub async fn delete_transactions(State(state): State<AppState>) -> StatusCode {
	state.statistics_service.reset();
	StatusCode::NO_CONTENT
}
