use axum::Router;

pub mod system;
pub mod webinars;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new().nest("/webinars", webinars::router())
}
