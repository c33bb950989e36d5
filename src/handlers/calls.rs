use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::store::CallRecord;
use crate::utils::construct_s3_directory;

/// Body of `POST /api/store-s3-data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreS3DataRequest {
    #[serde(rename = "roomUrl")]
    pub room_url: String,
}

/// Record a finished call together with the directory its recordings land in
///
/// Responds `200 Success` once the row is written. Any failure is reported
/// as plain text with status 500 and nothing is retried.
pub async fn store_s3_data(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match store_call(&state, &body).await {
        Ok(()) => (StatusCode::OK, "Success").into_response(),
        Err(e) => {
            error!("store-s3-data failed: {}", e);
            e.into_response()
        }
    }
}

async fn store_call(state: &AppState, body: &[u8]) -> AppResult<()> {
    let request: StoreS3DataRequest =
        serde_json::from_slice(body).map_err(AppError::store_failed)?;
    info!(room_url = %request.room_url, "Received store-s3-data request");

    if !state.config.has_supabase_credentials() {
        return Err(AppError::MissingCredentials);
    }

    let store = state
        .call_store
        .as_ref()
        .ok_or_else(|| AppError::store_failed("Supabase call store is not available"))?;

    let s3_folder_dir =
        construct_s3_directory(&request.room_url).map_err(AppError::store_failed)?;
    debug!(s3_folder_dir = %s3_folder_dir, "Derived recording directory");

    let record = CallRecord::new(request.room_url, s3_folder_dir);
    debug!(store = store.name(), "Inserting call record");
    store.insert(&record).await.map_err(AppError::store_failed)?;

    info!(
        room_url = %record.room_url,
        s3_folder_dir = %record.s3_folder_dir,
        "Call record stored"
    );
    Ok(())
}
