use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use confero_core::{User, WebinarId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(organize_webinar))
        .route("/:id/seats", post(change_seats))
}

pub async fn organize_webinar(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::OrganizeWebinarBody>,
) -> axum::response::Response {
    let request = match body.into_request(&user) {
        Ok(r) => r,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_seats", e.to_string()),
    };

    match services.organize_webinar().execute(request).await {
        Ok(response) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": response.id })),
        )
            .into_response(),
        Err(e) => errors::webinar_error_to_response(e),
    }
}

pub async fn change_seats(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::ChangeSeatsBody>,
) -> axum::response::Response {
    // Any path id is a lookup key; unknown ones come back as not found.
    let request = match body.into_request(user, WebinarId::from(id)) {
        Ok(r) => r,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_seats", e.to_string()),
    };

    match services.change_seats().execute(request).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Seats updated" })),
        )
            .into_response(),
        Err(e) => errors::webinar_error_to_response(e),
    }
}
