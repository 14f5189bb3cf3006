//! Webinar use-case failures.

use thiserror::Error;

use confero_core::WebinarId;

use crate::repository::RepositoryError;
use crate::webinar::Seats;

pub type WebinarResult<T> = Result<T, WebinarError>;

/// Every way a webinar use case can fail.
///
/// Each variant is a distinct, named condition; the transport layer maps them to
/// status codes and the core never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebinarError {
    /// The referenced webinar does not exist.
    #[error("webinar not found: {0}")]
    NotFound(WebinarId),

    /// The requester is not the organizer of the webinar.
    #[error("user is not the organizer of this webinar")]
    NotOrganizer,

    /// The requested capacity is not above the current one.
    #[error("cannot reduce seats (current: {current}, requested: {requested})")]
    ReduceSeats { current: Seats, requested: Seats },

    /// The requested capacity is above the policy limit.
    #[error("webinar cannot have more than {max} seats (requested: {requested})")]
    TooManySeats { requested: Seats, max: Seats },

    /// Repository failure, propagated unchanged.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl WebinarError {
    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            WebinarError::NotFound(_) => "not_found",
            WebinarError::NotOrganizer => "not_organizer",
            WebinarError::ReduceSeats { .. } => "reduce_seats",
            WebinarError::TooManySeats { .. } => "too_many_seats",
            WebinarError::Storage(_) => "storage",
        }
    }

    /// Rule rejections are expected outcomes and log at WARN; storage failures
    /// log at ERROR.
    pub(crate) fn log(&self) {
        match self {
            WebinarError::Storage(_) => {
                tracing::error!(error = %self, kind = self.kind(), "webinar storage failure")
            }
            _ => tracing::warn!(error = %self, kind = self.kind(), "webinar request rejected"),
        }
    }
}
