//! HTTP API Layer
//!
//! REST API for the claims registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and health checks
//! - **Middleware**: Request logging, tracing, request ids
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimService;

use crate::handlers::{claims, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimService,
}

/// Creates the main API router
///
/// Claims are served under `/api/claims`; health checks under `/health`.
pub fn create_router(service: ClaimService) -> Router {
    let state = AppState { service };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Static segments are matched before `/:id`
    let claims_routes = Router::new()
        .route("/", get(claims::list_active_claims).post(claims::create_claim))
        .route("/fraudulent", get(claims::list_fraudulent_claims))
        .route("/deleted", get(claims::list_deleted_claims))
        .route("/search", get(claims::search_claims))
        .route("/stats", get(claims::claim_statistics))
        .route("/claim-number/:claim_number", get(claims::get_claim_by_number))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        )
        .route("/:id/restore", post(claims::restore_claim))
        .route("/:id/fraud-assessment", get(claims::assess_fraud));

    Router::new()
        .merge(public_routes)
        .nest("/api/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
