use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

use crate::{
    dtos::{FindPathRequest, FindPathResponse},
    services::record_search,
    AppState,
};

/// `POST /find-path`
///
/// The body is decoded by hand rather than through `Json` so that any
/// decode failure, including a missing `Content-Type`, is a plain-text 400.
pub async fn find_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FindPathResponse>, AppError> {
    // A bare `null` body is accepted like `{}`.
    let request: Option<FindPathRequest> = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected find-path body: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let finder = state.path_finder;
    let FindPathRequest { start, end } = request.unwrap_or_default();

    let path = tokio::task::spawn_blocking(move || finder.find_path(start, end))
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("path search task failed: {}", e)))?;

    let path_len = path.as_ref().map(Vec::len);
    record_search(path_len);
    tracing::debug!(
        start = %start,
        end = %end,
        found = path.is_some(),
        path_len = path_len.unwrap_or(0),
        "Path search finished"
    );

    Ok(Json(FindPathResponse { path }))
}
