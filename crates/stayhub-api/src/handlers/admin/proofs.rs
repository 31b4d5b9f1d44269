//! Admin payment-proof review handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::proof::model::PaymentProof;

use crate::dto::request::ReviewProofRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/proofs
pub async fn list_pending_proofs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<PaymentProof>>>, ApiError> {
    let proofs = state.verification.pending_proofs(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(proofs)))
}

/// POST /api/admin/proofs/{id}/review
pub async fn review_proof(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(proof_id): Path<Uuid>,
    Json(req): Json<ReviewProofRequest>,
) -> Result<Json<ApiResponse<PaymentProof>>, ApiError> {
    let proof = state
        .verification
        .review_proof(&auth, proof_id, req.decision, req.comment.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(proof)))
}
