//! Handler for event ingestion.
//!
//! Ingestion is authenticated by a per-project secret carried in the
//! request body, not by a bearer token: the submitting client is an SDK
//! embedded in the project's own product, not a logged-in user.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use pulse_core::error::CoreError;
use pulse_core::ingest::{normalize_event_name, normalize_user_id, validate_properties};
use pulse_core::secrets::hash_ingest_secret;
use pulse_db::models::usage_event::UsageEvent;
use pulse_db::repositories::{ProjectRepo, UsageEventRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/ingest`.
///
/// No timestamp field: `created_at` is always assigned server-side, so
/// client clock skew cannot disturb ordering or windowing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRequest {
    /// The project's ingest secret (plaintext; hashed for lookup).
    pub secret: String,
    pub event_name: String,
    pub user_id: String,
    #[serde(default)]
    pub properties: Option<serde_json::Value>,
}

/// POST /api/v1/ingest
///
/// Records one usage event. The secret resolves to exactly one project;
/// field validation happens before the single atomic insert, so a
/// rejected submission persists nothing.
pub async fn record(
    State(state): State<AppState>,
    Json(input): Json<IngestRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UsageEvent>>)> {
    let project = ProjectRepo::find_by_secret_hash(&state.pool, &hash_ingest_secret(&input.secret))
        .await?
        .ok_or(AppError::Core(CoreError::Unauthorized(
            "Unknown ingest secret".into(),
        )))?;

    let event_name = normalize_event_name(&input.event_name)?;
    let user_id = normalize_user_id(&input.user_id)?;
    if let Some(properties) = &input.properties {
        validate_properties(properties)?;
    }

    let event = UsageEventRepo::insert(
        &state.pool,
        project.id,
        &event_name,
        &user_id,
        input.properties.as_ref(),
    )
    .await?;

    tracing::debug!(
        project_id = project.id,
        event_name = %event.event_name,
        "Recorded usage event"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}
