//! Manual sweep trigger.

use axum::Json;
use axum::extract::State;

use stayhub_core::error::AppError;

use crate::dto::response::{ApiResponse, SweepResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/admin/bookings/sweep
///
/// Runs the reservation expiry sweep immediately instead of waiting for
/// the scheduled pass.
pub async fn trigger_sweep(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<SweepResponse>>, ApiError> {
    if !auth.is_admin() {
        return Err(AppError::forbidden("Only admins trigger sweeps").into());
    }

    let expired = state.reservations.sweep_expired(state.clock.now()).await?;

    Ok(Json(ApiResponse::ok(SweepResponse {
        expired_count: expired.len(),
        booking_ids: expired.iter().map(|b| b.id).collect(),
    })))
}
