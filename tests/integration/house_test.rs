//! Two-phase house removal end-to-end tests.

use stayhub_core::ErrorKind;
use stayhub_entity::user::UserRole;

use crate::helpers::TestEnv;

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn active_bookings_block_unforced_delete() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (house, room) = env.create_house_with_room(&owner).await;

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let booking = env.reservations.reserve(&student_ctx, room.id).await.unwrap();

    let owner_ctx = env.ctx(&owner.id, UserRole::Owner);

    // Phase one: the preview names the blocking booking.
    let impact = env
        .houses
        .preview_delete_impact(&owner_ctx, house.id)
        .await
        .unwrap();
    assert_eq!(impact.len(), 1);
    assert_eq!(impact[0].id, booking.id);

    // Phase two without force: conflict, nothing deleted.
    let err = env
        .houses
        .delete_house(&owner_ctx, house.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(err.message.contains(&booking.id.to_string()));
    assert!(env.rooms.find_by_id(room.id).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn forced_delete_cancels_bookings_first() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (house, room) = env.create_house_with_room(&owner).await;

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    env.reservations.reserve(&student_ctx, room.id).await.unwrap();

    let owner_ctx = env.ctx(&owner.id, UserRole::Owner);
    env.houses
        .delete_house(&owner_ctx, house.id, true)
        .await
        .unwrap();

    assert!(env.rooms.find_by_id(room.id).await.unwrap().is_none());
    let err = env
        .houses
        .preview_delete_impact(&owner_ctx, house.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn only_the_owner_or_admin_manages_a_house() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let stranger = env.create_user(UserRole::Owner).await;
    let (house, _) = env.create_house_with_room(&owner).await;

    let stranger_ctx = env.ctx(&stranger.id, UserRole::Owner);
    let err = env
        .houses
        .delete_house(&stranger_ctx, house.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);
    env.houses
        .delete_house(&admin_ctx, house.id, false)
        .await
        .unwrap();
}
