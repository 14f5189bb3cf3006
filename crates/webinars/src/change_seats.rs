use serde::{Deserialize, Serialize};
use tracing::instrument;

use confero_core::{User, WebinarId};

use crate::error::{WebinarError, WebinarResult};
use crate::repository::WebinarRepository;
use crate::webinar::Seats;

/// Input of [`ChangeSeats`]. `seats` is the requested new total capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSeatsRequest {
    pub user: User,
    pub webinar_id: WebinarId,
    pub seats: Seats,
}

/// Use case: let the organizer raise a webinar's seat capacity.
///
/// Checks run in a fixed order and stop at the first violation:
///
/// 1. the webinar exists (`NotFound`), checked before authorization so an
///    unknown id yields not-found for every requester;
/// 2. the requester is the organizer (`NotOrganizer`);
/// 3. the requested capacity is strictly above the current one (`ReduceSeats`,
///    equality included);
/// 4. the requested capacity is at most [`Seats::MAX`] (`TooManySeats`).
///
/// Nothing is written unless every check passes.
pub struct ChangeSeats<R> {
    repository: R,
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(
        skip(self, request),
        fields(
            webinar_id = %request.webinar_id,
            user_id = %request.user.id,
            seats = %request.seats,
        )
    )]
    pub async fn execute(&self, request: ChangeSeatsRequest) -> WebinarResult<()> {
        self.change(request).await.inspect_err(WebinarError::log)
    }

    async fn change(&self, request: ChangeSeatsRequest) -> WebinarResult<()> {
        let ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        } = request;

        let mut webinar = self
            .repository
            .find_by_id(&webinar_id)
            .await?
            .ok_or(WebinarError::NotFound(webinar_id))?;

        if !webinar.is_organizer(&user) {
            return Err(WebinarError::NotOrganizer);
        }

        let current = webinar.seats();
        if seats <= current {
            return Err(WebinarError::ReduceSeats {
                current,
                requested: seats,
            });
        }

        if seats.exceeds_limit() {
            return Err(WebinarError::TooManySeats {
                requested: seats,
                max: Seats::MAX,
            });
        }

        webinar.set_seats(seats);
        self.repository.update(webinar).await?;

        tracing::info!(previous = %current, "webinar seats changed");
        Ok(())
    }
}
