//! Reservation engine end-to-end tests.

use chrono::Duration;

use stayhub_core::{Clock, ErrorKind};
use stayhub_entity::booking::BookingStatus;
use stayhub_entity::room::RoomState;
use stayhub_entity::user::UserRole;

use crate::helpers::{HOLD_DAYS, TestEnv};

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn reserve_confirm_cancel_round_trip() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let booking = env.reservations.reserve(&student_ctx, room.id).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Reserved);
    assert_eq!(
        booking.expires_at.unwrap(),
        env.clock.now() + Duration::days(HOLD_DAYS)
    );

    let held = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(held.state, RoomState::Reserved);

    // Confirm one day into the hold.
    env.clock.advance(Duration::days(1));
    let confirmed = env.reservations.confirm(&student_ctx, booking.id).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(confirmed.paid);
    assert!(confirmed.expires_at.is_none());

    let occupied = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(occupied.state, RoomState::Occupied);

    // The owner cancels a day later; the room frees up.
    env.clock.advance(Duration::days(1));
    let owner_ctx = env.ctx(&owner.id, UserRole::Owner);
    let cancelled = env
        .reservations
        .cancel(&owner_ctx, booking.id, Some("tenant moved out"))
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.cancelled_by, Some(owner.id));

    let freed = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(freed.state, RoomState::Available);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn confirm_after_deadline_fails_without_sweep() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let ctx = env.ctx(&student.id, UserRole::Student);
    let booking = env.reservations.reserve(&ctx, room.id).await.unwrap();

    // One second past the deadline; no sweep has run.
    env.clock.advance(Duration::days(HOLD_DAYS) + Duration::seconds(1));

    let err = env.reservations.confirm(&ctx, booking.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Expired);

    // The lazy path recorded the expiry and freed the room.
    let current = env.bookings.find_by_id(booking.id).await.unwrap().unwrap();
    assert_eq!(current.status, BookingStatus::Expired);
    let freed = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(freed.state, RoomState::Available);

    // A second student can now take the room.
    let other = env.create_verified_student(&admin).await;
    let other_ctx = env.ctx(&other.id, UserRole::Student);
    assert!(env.reservations.reserve(&other_ctx, room.id).await.is_ok());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn sweep_expires_lapsed_holds() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let ctx = env.ctx(&student.id, UserRole::Student);
    let booking = env.reservations.reserve(&ctx, room.id).await.unwrap();

    env.clock.advance(Duration::days(HOLD_DAYS) + Duration::seconds(1));
    let expired = env.reservations.sweep_expired(env.clock.now()).await.unwrap();
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, booking.id);
    assert_eq!(expired[0].status, BookingStatus::Expired);

    let freed = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(freed.state, RoomState::Available);

    // A second sweep finds nothing.
    assert!(env.reservations.sweep_expired(env.clock.now()).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn concurrent_reserves_have_one_winner() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let alice = env.create_verified_student(&admin).await;
    let bob = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let alice_ctx = env.ctx(&alice.id, UserRole::Student);
    let bob_ctx = env.ctx(&bob.id, UserRole::Student);

    let (a, b) = tokio::join!(
        env.reservations.reserve(&alice_ctx, room.id),
        env.reservations.reserve(&bob_ctx, room.id),
    );

    let winners = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(winners, 1, "exactly one concurrent reserve must win");

    let loser = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
    assert_eq!(loser.kind, ErrorKind::Conflict);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn cancel_is_idempotent_against_double_cancel() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let ctx = env.ctx(&student.id, UserRole::Student);
    let booking = env.reservations.reserve(&ctx, room.id).await.unwrap();

    env.reservations.cancel(&ctx, booking.id, None).await.unwrap();
    let err = env.reservations.cancel(&ctx, booking.id, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let freed = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(freed.state, RoomState::Available);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn reserve_is_gated_on_verification() {
    let env = TestEnv::new().await;
    let owner = env.create_user(UserRole::Owner).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    // Email not verified at all.
    let student = env.create_user(UserRole::Student).await;
    let ctx = env.ctx(&student.id, UserRole::Student);
    let err = env.reservations.reserve(&ctx, room.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    // Email verified but no accepted proof.
    env.verification.email_verify(student.id).await.unwrap();
    let err = env.reservations.reserve(&ctx, room.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    // Room was never touched.
    let untouched = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(untouched.state, RoomState::Available);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn only_the_owning_student_or_admin_confirms() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let alice = env.create_verified_student(&admin).await;
    let mallory = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    let alice_ctx = env.ctx(&alice.id, UserRole::Student);
    let booking = env.reservations.reserve(&alice_ctx, room.id).await.unwrap();

    let mallory_ctx = env.ctx(&mallory.id, UserRole::Student);
    let err = env
        .reservations
        .confirm(&mallory_ctx, booking.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    // The admin payment-completion path may confirm.
    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);
    let confirmed = env.reservations.confirm(&admin_ctx, booking.id).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn round_trip_with_and_without_confirm_end_identically() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;
    let ctx = env.ctx(&student.id, UserRole::Student);

    // reserve -> confirm -> cancel
    let b1 = env.reservations.reserve(&ctx, room.id).await.unwrap();
    env.reservations.confirm(&ctx, b1.id).await.unwrap();
    let b1 = env.reservations.cancel(&ctx, b1.id, None).await.unwrap();
    assert_eq!(b1.status, BookingStatus::Cancelled);
    let after_full = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(after_full.state, RoomState::Available);

    // reserve -> cancel
    let b2 = env.reservations.reserve(&ctx, room.id).await.unwrap();
    let b2 = env.reservations.cancel(&ctx, b2.id, None).await.unwrap();
    assert_eq!(b2.status, BookingStatus::Cancelled);
    let after_short = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(after_short.state, RoomState::Available);
}
