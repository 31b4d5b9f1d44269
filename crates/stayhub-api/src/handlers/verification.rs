//! Student-facing verification handlers: access snapshot and proof upload.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use stayhub_core::error::AppError;
use stayhub_entity::proof::model::PaymentProof;
use stayhub_service::access::{AccessAction, decide};

use crate::dto::request::RecordProofRequest;
use crate::dto::response::{AccessStatusResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/access
///
/// The caller's current access decision plus the verification snapshot and
/// its changed-since `version` token.
pub async fn access_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AccessStatusResponse>>, ApiError> {
    let status = state.verification.access_snapshot(auth.user_id).await?;
    let now = state.clock.now();
    let decision = decide(AccessAction::BrowseListings, &status, now);

    Ok(Json(ApiResponse::ok(AccessStatusResponse::new(
        decision, status, now,
    ))))
}

/// POST /api/proofs
///
/// Records a payment proof already stored by the storage collaborator.
pub async fn record_proof(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RecordProofRequest>,
) -> Result<Json<ApiResponse<PaymentProof>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let proof = state
        .verification
        .record_proof(&auth, req.file_ref, req.original_filename)
        .await?;
    Ok(Json(ApiResponse::ok(proof)))
}

/// GET /api/proofs
pub async fn list_my_proofs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PaymentProof>>>, ApiError> {
    let proofs = state.verification.my_proofs(&auth).await?;
    Ok(Json(ApiResponse::ok(proofs)))
}
