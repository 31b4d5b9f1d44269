//! House browsing and removal.
//!
//! Removal is two-phase, review-before-destroy: callers first preview the
//! active bookings a deletion would strand, then delete with an explicit
//! `force` flag. The force path cancels those bookings through the
//! reservation engine so rooms are released by the single writer, never by
//! a cascade.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{BookingRepository, HouseRepository, RoomRepository};
use stayhub_entity::booking::model::Booking;
use stayhub_entity::house::model::House;
use stayhub_entity::room::model::Room;

use crate::access::{AccessAction, AccessGateway};
use crate::booking::ReservationService;
use crate::context::RequestContext;

/// House browsing and lifecycle operations.
#[derive(Debug, Clone)]
pub struct HouseService {
    houses: Arc<HouseRepository>,
    rooms: Arc<RoomRepository>,
    bookings: Arc<BookingRepository>,
    reservations: ReservationService,
    gateway: AccessGateway,
}

impl HouseService {
    /// Create a new house service.
    pub fn new(
        houses: Arc<HouseRepository>,
        rooms: Arc<RoomRepository>,
        bookings: Arc<BookingRepository>,
        reservations: ReservationService,
        gateway: AccessGateway,
    ) -> Self {
        Self {
            houses,
            rooms,
            bookings,
            reservations,
            gateway,
        }
    }

    /// Browse active listings. Students sit behind the full-access gate;
    /// owners and admins browse freely.
    pub async fn browse(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<House>> {
        if ctx.is_student() {
            self.gateway
                .require(ctx.user_id, AccessAction::BrowseListings)
                .await?;
        }
        self.houses.find_active(page).await
    }

    /// List a house's rooms, gated the same way as browsing.
    pub async fn rooms_of(&self, ctx: &RequestContext, house_id: Uuid) -> AppResult<Vec<Room>> {
        if ctx.is_student() {
            self.gateway
                .require(ctx.user_id, AccessAction::BrowseListings)
                .await?;
        }
        self.find_house(house_id).await?;
        self.rooms.find_by_house(house_id).await
    }

    /// Phase one of removal: the active bookings a deletion would strand.
    pub async fn preview_delete_impact(
        &self,
        ctx: &RequestContext,
        house_id: Uuid,
    ) -> AppResult<Vec<Booking>> {
        let house = self.find_house(house_id).await?;
        self.authorize_manage(ctx, &house)?;
        self.bookings.find_active_by_house(house_id).await
    }

    /// Phase two of removal.
    ///
    /// Without `force`, active bookings block the deletion with a conflict
    /// listing them. With `force`, each is cancelled through the
    /// reservation engine first.
    pub async fn delete_house(
        &self,
        ctx: &RequestContext,
        house_id: Uuid,
        force: bool,
    ) -> AppResult<()> {
        let house = self.find_house(house_id).await?;
        self.authorize_manage(ctx, &house)?;

        let active = self.bookings.find_active_by_house(house_id).await?;
        if !active.is_empty() {
            if !force {
                let ids: Vec<String> = active.iter().map(|b| b.id.to_string()).collect();
                return Err(AppError::conflict(format!(
                    "House has {} active booking(s): {}. Pass force=true to cancel them and delete",
                    active.len(),
                    ids.join(", ")
                )));
            }

            for booking in &active {
                match self
                    .reservations
                    .cancel(ctx, booking.id, Some("House removed from listing"))
                    .await
                {
                    Ok(_) => {}
                    // A booking that raced into a terminal state is already
                    // off the room; nothing left to do for it.
                    Err(e) if e.is_kind(stayhub_core::ErrorKind::Conflict) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        if !self.houses.delete(house_id).await? {
            return Err(AppError::not_found("House not found"));
        }

        info!(%house_id, by = %ctx.user_id, force, "House deleted");
        Ok(())
    }

    async fn find_house(&self, house_id: Uuid) -> AppResult<House> {
        self.houses
            .find_by_id(house_id)
            .await?
            .ok_or_else(|| AppError::not_found("House not found"))
    }

    fn authorize_manage(&self, ctx: &RequestContext, house: &House) -> AppResult<()> {
        let is_owner = house.owner_id.is_some_and(|o| o == ctx.user_id);
        if is_owner || ctx.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Not authorized to manage this house"))
        }
    }
}
