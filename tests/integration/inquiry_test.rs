//! Inquiry flow end-to-end tests.

use stayhub_core::ErrorKind;
use stayhub_entity::inquiry::InquiryStatus;
use stayhub_entity::room::RoomState;
use stayhub_entity::user::UserRole;

use crate::helpers::TestEnv;

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn send_and_verify_inquiry() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (house, room) = env.create_house_with_room(&owner).await;

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let inquiry = env
        .inquiries
        .send_inquiry(
            &student_ctx,
            house.id,
            "Room availability".to_string(),
            "Is room A1 free from September?".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(inquiry.status, InquiryStatus::Pending);

    let owner_ctx = env.ctx(&owner.id, UserRole::Owner);
    let verified = env
        .inquiries
        .verify_inquiry(&owner_ctx, inquiry.id, Some("Yes, come for a viewing"))
        .await
        .unwrap();
    assert_eq!(verified.status, InquiryStatus::Verified);
    assert!(verified.responded_at.is_some());

    // Inquiries never touch room state.
    let untouched = env.rooms.find_by_id(room.id).await.unwrap().unwrap();
    assert_eq!(untouched.state, RoomState::Available);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn terminal_inquiries_reject_further_transitions() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (house, _) = env.create_house_with_room(&owner).await;

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let inquiry = env
        .inquiries
        .send_inquiry(&student_ctx, house.id, "Hi".to_string(), "Hello".to_string())
        .await
        .unwrap();

    env.inquiries
        .cancel_inquiry(&student_ctx, inquiry.id)
        .await
        .unwrap();

    let err = env
        .inquiries
        .cancel_inquiry(&student_ctx, inquiry.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let owner_ctx = env.ctx(&owner.id, UserRole::Owner);
    let err = env
        .inquiries
        .verify_inquiry(&owner_ctx, inquiry.id, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn sending_requires_full_access() {
    let env = TestEnv::new().await;
    let owner = env.create_user(UserRole::Owner).await;
    let (house, _) = env.create_house_with_room(&owner).await;

    let student = env.create_user(UserRole::Student).await;
    env.verification.email_verify(student.id).await.unwrap();

    let ctx = env.ctx(&student.id, UserRole::Student);
    let err = env
        .inquiries
        .send_inquiry(&ctx, house.id, "Hi".to_string(), "Hello".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}
