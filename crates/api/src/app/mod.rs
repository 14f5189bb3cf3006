//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository and generator wiring, use-case construction
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and mapping to use-case inputs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices, jwt_secret: String) -> Router {
    let validator = Arc::new(middleware::Hs256TokenValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState { validator };

    // Protected routes: require an authenticated user.
    let protected = routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(Arc::new(services)))
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                middleware::auth_middleware,
            )),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
