//! Admin/owner house-removal handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::dto::request::DeleteHouseQuery;
use crate::dto::response::{ApiResponse, BookingResponse, DeleteImpactResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/houses/{id}/delete-impact
pub async fn delete_impact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(house_id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteImpactResponse>>, ApiError> {
    let bookings = state.houses.preview_delete_impact(&auth, house_id).await?;

    Ok(Json(ApiResponse::ok(DeleteImpactResponse {
        house_id,
        blocking_bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    })))
}

/// DELETE /api/admin/houses/{id}?force=true
pub async fn delete_house(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(house_id): Path<Uuid>,
    Query(query): Query<DeleteHouseQuery>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.houses.delete_house(&auth, house_id, query.force).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "House deleted".to_string(),
    })))
}
