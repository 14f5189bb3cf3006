use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use confero_core::{DateGenerator, IdGenerator, UserId, WebinarId};

use crate::error::{WebinarError, WebinarResult};
use crate::repository::WebinarRepository;
use crate::webinar::{Seats, Webinar, WebinarProps};

/// Input of [`OrganizeWebinar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeWebinarRequest {
    pub user_id: UserId,
    pub title: String,
    pub seats: Seats,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Output of [`OrganizeWebinar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeWebinarResponse {
    pub id: WebinarId,
}

/// Use case: create a webinar owned by the requesting user.
///
/// Seat count and date ordering are accepted as given; only `ChangeSeats`
/// applies seat rules.
pub struct OrganizeWebinar<R, I, D> {
    repository: R,
    id_generator: I,
    date_generator: D,
}

impl<R, I, D> OrganizeWebinar<R, I, D>
where
    R: WebinarRepository,
    I: IdGenerator,
    D: DateGenerator,
{
    pub fn new(repository: R, id_generator: I, date_generator: D) -> Self {
        Self {
            repository,
            id_generator,
            date_generator,
        }
    }

    #[instrument(
        skip(self, request),
        fields(
            user_id = %request.user_id,
            seats = %request.seats,
            webinar_id = tracing::field::Empty,
            organized_at = tracing::field::Empty,
        )
    )]
    pub async fn execute(
        &self,
        request: OrganizeWebinarRequest,
    ) -> WebinarResult<OrganizeWebinarResponse> {
        self.organize(request).await.inspect_err(WebinarError::log)
    }

    async fn organize(
        &self,
        request: OrganizeWebinarRequest,
    ) -> WebinarResult<OrganizeWebinarResponse> {
        let id = WebinarId::from(self.id_generator.generate());

        let span = tracing::Span::current();
        span.record("webinar_id", tracing::field::display(&id));
        span.record(
            "organized_at",
            tracing::field::display(self.date_generator.now().to_rfc3339()),
        );

        let webinar = Webinar::new(WebinarProps {
            id: id.clone(),
            organizer_id: request.user_id,
            title: request.title,
            start_date: request.start_date,
            end_date: request.end_date,
            seats: request.seats,
        });

        self.repository.create(webinar).await?;

        tracing::info!("webinar organized");
        Ok(OrganizeWebinarResponse { id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::fixtures;
    use crate::in_memory::InMemoryWebinarRepository;
    use crate::repository::RepositoryError;
    use confero_core::{FixedDateGenerator, FixedIdGenerator, UuidIdGenerator};

    fn request() -> OrganizeWebinarRequest {
        OrganizeWebinarRequest {
            user_id: fixtures::alice().id,
            title: "New Webinar".to_string(),
            seats: Seats::new(100),
            start_date: fixtures::start(),
            end_date: fixtures::end(),
        }
    }

    fn use_case(
        repository: Arc<InMemoryWebinarRepository>,
    ) -> OrganizeWebinar<Arc<InMemoryWebinarRepository>, FixedIdGenerator, FixedDateGenerator> {
        OrganizeWebinar::new(
            repository,
            FixedIdGenerator::new("id-1"),
            FixedDateGenerator::new(fixtures::start()),
        )
    }

    #[tokio::test]
    async fn returns_the_generated_id() {
        let repository = Arc::new(InMemoryWebinarRepository::new());

        let response = use_case(repository).execute(request()).await.unwrap();

        assert_eq!(response.id, WebinarId::from("id-1"));
    }

    #[tokio::test]
    async fn stores_a_webinar_owned_by_the_requester() {
        let repository = Arc::new(InMemoryWebinarRepository::new());

        let response = use_case(repository.clone()).execute(request()).await.unwrap();

        let stored = repository
            .find_by_id(&response.id)
            .await
            .unwrap()
            .expect("webinar should be persisted");
        assert_eq!(stored.webinar_id(), &response.id);
        assert_eq!(stored.organizer_id(), &fixtures::alice().id);
        assert_eq!(stored.title(), "New Webinar");
        assert_eq!(stored.seats(), Seats::new(100));
        assert_eq!(stored.start_date(), fixtures::start());
        assert_eq!(stored.end_date(), fixtures::end());
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn accepts_seats_above_the_change_limit() {
        let repository = Arc::new(InMemoryWebinarRepository::new());
        let mut req = request();
        req.seats = Seats::new(5000);

        let response = use_case(repository.clone()).execute(req).await.unwrap();

        let stored = repository.find_by_id_sync(&response.id).unwrap();
        assert_eq!(stored.seats(), Seats::new(5000));
    }

    #[tokio::test]
    async fn duplicate_id_surfaces_as_storage_error() {
        let repository = Arc::new(InMemoryWebinarRepository::new());
        let organize = use_case(repository.clone());

        organize.execute(request()).await.unwrap();
        let err = organize.execute(request()).await.unwrap_err();

        assert_eq!(
            err,
            WebinarError::Storage(RepositoryError::AlreadyExists("id-1".into()))
        );
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_id_logs_at_error() {
        let repository = Arc::new(InMemoryWebinarRepository::new());
        let organize = use_case(repository);
        let logs = fixtures::CapturedLevels::default();
        let _guard = logs.install();

        organize.execute(request()).await.unwrap();
        assert!(!logs.take().contains(&tracing::Level::ERROR));

        organize.execute(request()).await.unwrap_err();
        assert!(logs.take().contains(&tracing::Level::ERROR));
    }

    #[tokio::test]
    async fn each_call_persists_one_new_webinar() {
        let repository = Arc::new(InMemoryWebinarRepository::new());
        let organize = OrganizeWebinar::new(
            repository.clone(),
            UuidIdGenerator,
            FixedDateGenerator::new(fixtures::start()),
        );

        let a = organize.execute(request()).await.unwrap();
        let b = organize.execute(request()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repository.len(), 2);
    }
}
