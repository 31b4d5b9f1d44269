//! Route definitions for the StayHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via axum's `State`
//! extractor.

use axum::{
    Router,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(booking_routes())
        .merge(house_routes())
        .merge(inquiry_routes())
        .merge(verification_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Booking endpoints: reserve, confirm, cancel, list.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            post(handlers::booking::reserve).get(handlers::booking::list_my_bookings),
        )
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route(
            "/bookings/{id}/confirm",
            post(handlers::booking::confirm_booking),
        )
        .route(
            "/bookings/{id}/cancel",
            post(handlers::booking::cancel_booking),
        )
}

/// House browsing endpoints.
fn house_routes() -> Router<AppState> {
    Router::new()
        .route("/houses", get(handlers::house::browse_houses))
        .route("/houses/{id}/rooms", get(handlers::house::house_rooms))
        .route(
            "/houses/{id}/inquiries",
            get(handlers::inquiry::house_inquiries),
        )
}

/// Inquiry endpoints.
fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/inquiries",
            post(handlers::inquiry::send_inquiry).get(handlers::inquiry::list_my_inquiries),
        )
        .route(
            "/inquiries/{id}/verify",
            post(handlers::inquiry::verify_inquiry),
        )
        .route(
            "/inquiries/{id}/cancel",
            post(handlers::inquiry::cancel_inquiry),
        )
}

/// Verification endpoints: access snapshot and proof upload.
fn verification_routes() -> Router<AppState> {
    Router::new()
        .route("/access", get(handlers::verification::access_status))
        .route(
            "/proofs",
            post(handlers::verification::record_proof)
                .get(handlers::verification::list_my_proofs),
        )
}

/// Admin endpoints: review queue, verification overrides, sweeps, removal.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/proofs",
            get(handlers::admin::proofs::list_pending_proofs),
        )
        .route(
            "/admin/proofs/{id}/review",
            post(handlers::admin::proofs::review_proof),
        )
        .route(
            "/admin/students/{id}/email-verification",
            post(handlers::admin::students::email_verify),
        )
        .route(
            "/admin/students/{id}/verification",
            post(handlers::admin::students::toggle_verification),
        )
        .route(
            "/admin/students/{id}/access",
            get(handlers::admin::students::student_access),
        )
        .route(
            "/admin/bookings/sweep",
            post(handlers::admin::sweep::trigger_sweep),
        )
        .route(
            "/admin/houses/{id}/delete-impact",
            get(handlers::admin::houses::delete_impact),
        )
        .route(
            "/admin/houses/{id}",
            delete(handlers::admin::houses::delete_house),
        )
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
