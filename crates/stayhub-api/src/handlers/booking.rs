//! Booking handlers: reserve, confirm, cancel, list.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::{PageRequest, PageResponse};

use crate::dto::request::{CancelBookingRequest, ReserveRequest};
use crate::dto::response::{ApiResponse, BookingResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
pub async fn reserve(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ReserveRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state.reservations.reserve(&auth, req.room_id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// GET /api/bookings
pub async fn list_my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<BookingResponse>>>, ApiError> {
    let bookings = state.reservations.list_my_bookings(&auth, &page).await?;
    let items = bookings.items.into_iter().map(BookingResponse::from).collect();
    Ok(Json(ApiResponse::ok(PageResponse::new(
        items,
        bookings.page,
        bookings.page_size,
        bookings.total_items,
    ))))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state.reservations.get_booking(&auth, booking_id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state.reservations.confirm(&auth, booking_id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state
        .reservations
        .cancel(&auth, booking_id, req.reason.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}
