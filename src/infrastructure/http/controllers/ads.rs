use crate::domain::AdRecord;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use axum::{extract::State, Json};
use tracing::info;

/// Returns every row of the ads table. Blocks until the data is available:
/// backend outages are absorbed by the reader's retry loop, so callers see
/// latency rather than an error while the database is down.
pub async fn get_ads(State(state): State<AppState>) -> ApiResult<Json<Vec<AdRecord>>> {
    info!("ads request received");
    let ads = state.reader.fetch_all_ads().await?;
    Ok(Json(ads))
}
