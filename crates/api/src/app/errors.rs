use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use confero_webinars::{RepositoryError, WebinarError};

pub fn webinar_error_to_response(err: WebinarError) -> axum::response::Response {
    let status = match &err {
        WebinarError::NotFound(_) => StatusCode::NOT_FOUND,
        WebinarError::NotOrganizer => StatusCode::UNAUTHORIZED,
        WebinarError::ReduceSeats { .. } | WebinarError::TooManySeats { .. } => {
            StatusCode::BAD_REQUEST
        }
        WebinarError::Storage(RepositoryError::AlreadyExists(_)) => StatusCode::CONFLICT,
        WebinarError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, err.kind(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
