//! Reservation engine — the booking state machine.
//!
//! Lifecycle per booking: `reserved -(confirm)-> confirmed`,
//! `reserved -(expire|cancel)-> expired|cancelled`,
//! `confirmed -(cancel)-> cancelled`. No transition leaves a terminal
//! state. Every transition is a guarded single-statement update, so a
//! confirm racing the sweep (or a second cancel) has exactly one winner;
//! the loser is told what actually happened.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use stayhub_core::clock::Clock;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::traits::Notifier;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{BookingRepository, HouseRepository};
use stayhub_entity::booking::model::{Booking, CreateBooking};
use stayhub_entity::booking::status::BookingStatus;

use crate::access::{AccessAction, AccessGateway};
use crate::context::RequestContext;

use super::ledger::RoomLedger;

/// Orchestrates bookings against the room ledger.
#[derive(Debug, Clone)]
pub struct ReservationService {
    bookings: Arc<BookingRepository>,
    houses: Arc<HouseRepository>,
    ledger: RoomLedger,
    gateway: AccessGateway,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    hold_days: i64,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(
        bookings: Arc<BookingRepository>,
        houses: Arc<HouseRepository>,
        ledger: RoomLedger,
        gateway: AccessGateway,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        hold_days: i64,
    ) -> Self {
        Self {
            bookings,
            houses,
            ledger,
            gateway,
            notifier,
            clock,
            hold_days,
        }
    }

    /// Place a time-boxed hold on a room for the calling student.
    pub async fn reserve(&self, ctx: &RequestContext, room_id: Uuid) -> AppResult<Booking> {
        if !ctx.is_student() {
            return Err(AppError::forbidden("Only students can reserve rooms"));
        }
        self.gateway
            .require(ctx.user_id, AccessAction::Reserve)
            .await?;

        let room = self.ledger.try_reserve(room_id).await?;
        let expires_at = self.clock.now() + Duration::days(self.hold_days);

        let created = self
            .bookings
            .create(&CreateBooking {
                room_id: room.id,
                house_id: room.house_id,
                student_id: ctx.user_id,
                expires_at,
            })
            .await;

        match created {
            Ok(booking) => {
                info!(
                    booking_id = %booking.id,
                    room_id = %room.id,
                    student_id = %ctx.user_id,
                    %expires_at,
                    "Room reserved"
                );
                Ok(booking)
            }
            Err(e) => {
                // Undo the hold so no partial state survives a failed insert.
                if let Err(release_err) = self.ledger.release(room.id).await {
                    warn!(room_id = %room.id, error = %release_err,
                        "Failed to release room after booking insert failure");
                }
                Err(e)
            }
        }
    }

    /// Convert a live hold into a confirmed booking.
    ///
    /// Expiry is checked lazily here: a lapsed hold fails with an expired
    /// error (and is recorded as such) even if the sweep has not run yet.
    pub async fn confirm(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<Booking> {
        let booking = self.find_booking(booking_id).await?;

        // Only the owning student, or an admin completing payment on their
        // behalf, may confirm.
        if booking.student_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden("Not authorized to confirm this booking"));
        }
        if !ctx.is_admin() {
            self.gateway
                .require(ctx.user_id, AccessAction::ConfirmBooking)
                .await?;
        }

        let now = self.clock.now();
        if let Some(confirmed) = self.bookings.confirm(booking_id, now).await? {
            self.ledger.confirm(confirmed.room_id).await?;
            info!(booking_id = %confirmed.id, room_id = %confirmed.room_id, "Booking confirmed");
            return Ok(confirmed);
        }

        // The guard failed: either the hold lapsed or another transition won.
        let current = self.find_booking(booking_id).await?;
        match current.status {
            BookingStatus::Reserved => {
                // Still reserved, so the deadline must have passed.
                self.expire_booking(&current, now).await?;
                Err(AppError::expired("Reservation has expired"))
            }
            BookingStatus::Expired => Err(AppError::expired("Reservation has expired")),
            BookingStatus::Confirmed | BookingStatus::Cancelled => Err(AppError::conflict(
                format!("Booking is already {}", current.status),
            )),
        }
    }

    /// Cancel a hold or a confirmed booking.
    ///
    /// Allowed to the booking's student, the house owner, or an admin.
    pub async fn cancel(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
        reason: Option<&str>,
    ) -> AppResult<Booking> {
        let booking = self.find_booking(booking_id).await?;
        self.authorize_cancel(ctx, &booking).await?;

        let now = self.clock.now();
        match self.bookings.cancel(booking_id, ctx.user_id, reason, now).await? {
            Some(cancelled) => {
                self.ledger.release(cancelled.room_id).await?;
                info!(
                    booking_id = %cancelled.id,
                    room_id = %cancelled.room_id,
                    cancelled_by = %ctx.user_id,
                    "Booking cancelled"
                );
                Ok(cancelled)
            }
            None => Err(AppError::conflict(format!(
                "Booking is already {}",
                self.find_booking(booking_id).await?.status
            ))),
        }
    }

    /// Expire every lapsed hold and release its room.
    ///
    /// Safe to run concurrently with confirm/cancel: the status guard in
    /// the repository means each booking has a single authoritative
    /// transition.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> AppResult<Vec<Booking>> {
        let expired = self.bookings.sweep_expired(now).await?;

        for booking in &expired {
            self.ledger.release(booking.room_id).await?;
            if let Err(e) = self
                .notifier
                .reservation_expired(booking.student_id, booking.id)
                .await
            {
                warn!(booking_id = %booking.id, error = %e, "Expiry notification failed");
            }
        }

        if !expired.is_empty() {
            info!(count = expired.len(), "Swept expired reservations");
        }
        Ok(expired)
    }

    /// Fetch a booking visible to the caller.
    pub async fn get_booking(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<Booking> {
        let booking = self.find_booking(booking_id).await?;
        if booking.student_id != ctx.user_id && !ctx.is_admin() {
            let house = self.houses.find_by_id(booking.house_id).await?;
            let is_house_owner =
                house.is_some_and(|h| h.owner_id.is_some_and(|o| o == ctx.user_id));
            if !is_house_owner {
                return Err(AppError::forbidden("Not authorized to view this booking"));
            }
        }
        Ok(booking)
    }

    /// List the calling student's bookings.
    pub async fn list_my_bookings(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        self.bookings.find_by_student(ctx.user_id, page).await
    }

    async fn find_booking(&self, booking_id: Uuid) -> AppResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    async fn authorize_cancel(&self, ctx: &RequestContext, booking: &Booking) -> AppResult<()> {
        if booking.student_id == ctx.user_id || ctx.is_admin() {
            return Ok(());
        }
        let house = self.houses.find_by_id(booking.house_id).await?;
        if house.is_some_and(|h| h.owner_id.is_some_and(|o| o == ctx.user_id)) {
            return Ok(());
        }
        Err(AppError::forbidden("Not authorized to cancel this booking"))
    }

    async fn expire_booking(&self, booking: &Booking, now: DateTime<Utc>) -> AppResult<()> {
        // Zero rows here means the sweep (or another reader) got there
        // first; the room is theirs to release.
        if let Some(expired) = self.bookings.expire(booking.id, now).await? {
            self.ledger.release(expired.room_id).await?;
            if let Err(e) = self
                .notifier
                .reservation_expired(expired.student_id, expired.id)
                .await
            {
                warn!(booking_id = %expired.id, error = %e, "Expiry notification failed");
            }
        }
        Ok(())
    }
}
