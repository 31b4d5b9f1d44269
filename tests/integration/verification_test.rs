//! Verification engine end-to-end tests.

use chrono::Duration;

use stayhub_core::{Clock, ErrorKind};
use stayhub_entity::proof::ProofStatus;
use stayhub_entity::user::UserRole;
use stayhub_service::verification::ReviewDecision;

use crate::helpers::{TestEnv, WINDOW_DAYS};

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn reject_then_accept_grants_access() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let student = env.create_user(UserRole::Student).await;
    env.verification.email_verify(student.id).await.unwrap();

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);

    // First proof is rejected: no access.
    let p1 = env
        .verification
        .record_proof(&student_ctx, "proofs/p1.jpg".to_string(), None)
        .await
        .unwrap();
    let p1 = env
        .verification
        .review_proof(&admin_ctx, p1.id, ReviewDecision::Reject, Some("illegible"))
        .await
        .unwrap();
    assert_eq!(p1.status, ProofStatus::Rejected);
    assert!(
        !env.verification
            .is_access_granted(student.id, env.clock.now())
            .await
            .unwrap()
    );

    // Second proof is accepted: access until the window lapses.
    let p2 = env
        .verification
        .record_proof(&student_ctx, "proofs/p2.jpg".to_string(), None)
        .await
        .unwrap();
    env.verification
        .review_proof(&admin_ctx, p2.id, ReviewDecision::Accept, None)
        .await
        .unwrap();

    assert!(
        env.verification
            .is_access_granted(student.id, env.clock.now())
            .await
            .unwrap()
    );

    let snapshot = env.verification.access_snapshot(student.id).await.unwrap();
    assert_eq!(
        snapshot.admin_verified_expires_at.unwrap(),
        env.clock.now() + Duration::days(WINDOW_DAYS)
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn access_lapses_without_any_write() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let student = env.create_verified_student(&admin).await;

    let just_before = env.clock.now() + Duration::days(WINDOW_DAYS) - Duration::seconds(1);
    assert!(
        env.verification
            .is_access_granted(student.id, just_before)
            .await
            .unwrap()
    );

    // The instant the window closes the derivation flips; no sweep, no
    // revoke call, no write of any kind in between.
    let at_expiry = env.clock.now() + Duration::days(WINDOW_DAYS);
    assert!(
        !env.verification
            .is_access_granted(student.id, at_expiry)
            .await
            .unwrap()
    );

    // The stored flag still reads verified; the report sweep can find it.
    let lapsed = env.verification.lapsed_verifications(at_expiry).await.unwrap();
    assert!(lapsed.iter().any(|u| u.id == student.id));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn re_acceptance_restarts_the_window() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let student = env.create_verified_student(&admin).await;
    let first_expiry = env
        .verification
        .access_snapshot(student.id)
        .await
        .unwrap()
        .admin_verified_expires_at
        .unwrap();

    // Twenty days in, a new proof is accepted.
    env.clock.advance(Duration::days(20));
    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);
    let proof = env
        .verification
        .record_proof(&student_ctx, "proofs/renewal.jpg".to_string(), None)
        .await
        .unwrap();
    env.verification
        .review_proof(&admin_ctx, proof.id, ReviewDecision::Accept, None)
        .await
        .unwrap();

    // The window restarts from the new acceptance, not cumulatively.
    let snapshot = env.verification.access_snapshot(student.id).await.unwrap();
    let new_expiry = snapshot.admin_verified_expires_at.unwrap();
    assert_eq!(new_expiry, env.clock.now() + Duration::days(WINDOW_DAYS));
    assert_eq!(new_expiry, first_expiry + Duration::days(20));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn reviewed_proofs_are_terminal() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let student = env.create_user(UserRole::Student).await;
    env.verification.email_verify(student.id).await.unwrap();

    let student_ctx = env.ctx(&student.id, UserRole::Student);
    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);

    let proof = env
        .verification
        .record_proof(&student_ctx, "proofs/p.jpg".to_string(), None)
        .await
        .unwrap();
    env.verification
        .review_proof(&admin_ctx, proof.id, ReviewDecision::Reject, None)
        .await
        .unwrap();

    let err = env
        .verification
        .review_proof(&admin_ctx, proof.id, ReviewDecision::Accept, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    // The rejected review never touched verification state.
    assert!(
        !env.verification
            .is_access_granted(student.id, env.clock.now())
            .await
            .unwrap()
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn toggling_off_clears_every_verification_field() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let student = env.create_verified_student(&admin).await;
    let admin_ctx = env.ctx(&admin.id, UserRole::Admin);

    env.verification
        .toggle_admin_verification(&admin_ctx, student.id, false)
        .await
        .unwrap();

    let snapshot = env.verification.access_snapshot(student.id).await.unwrap();
    assert!(!snapshot.admin_verified);
    // A stale future date must not survive the clear.
    assert!(snapshot.admin_verified_at.is_none());
    assert!(snapshot.admin_verified_expires_at.is_none());
    assert!(
        !env.verification
            .is_access_granted(student.id, env.clock.now())
            .await
            .unwrap()
    );

    // Toggling back on grants a fresh window.
    env.verification
        .toggle_admin_verification(&admin_ctx, student.id, true)
        .await
        .unwrap();
    assert!(
        env.verification
            .is_access_granted(student.id, env.clock.now())
            .await
            .unwrap()
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn email_verify_is_idempotent() {
    let env = TestEnv::new().await;
    let student = env.create_user(UserRole::Student).await;

    let first = env.verification.email_verify(student.id).await.unwrap();
    let first_at = first.email_verified_at.unwrap();
    let first_version = first.verification_version;

    env.clock.advance(Duration::hours(1));
    let second = env.verification.email_verify(student.id).await.unwrap();

    assert!(second.email_verified);
    assert_eq!(second.email_verified_at.unwrap(), first_at);
    assert_eq!(second.verification_version, first_version);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set STAYHUB_TEST_DATABASE_URL)"]
async fn lapsed_subscription_blocks_reserving_with_expired_error() {
    let env = TestEnv::new().await;
    let admin = env.create_user(UserRole::Admin).await;
    let owner = env.create_user(UserRole::Owner).await;
    let student = env.create_verified_student(&admin).await;
    let (_, room) = env.create_house_with_room(&owner).await;

    env.clock.advance(Duration::days(WINDOW_DAYS) + Duration::seconds(1));

    let ctx = env.ctx(&student.id, UserRole::Student);
    let err = env.reservations.reserve(&ctx, room.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Expired);
}
