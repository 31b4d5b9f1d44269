//! House browsing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::house::model::House;
use stayhub_entity::room::model::Room;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/houses
pub async fn browse_houses(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<House>>>, ApiError> {
    let houses = state.houses.browse(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(houses)))
}

/// GET /api/houses/{id}/rooms
pub async fn house_rooms(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(house_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.houses.rooms_of(&auth, house_id).await?;
    Ok(Json(ApiResponse::ok(rooms)))
}
