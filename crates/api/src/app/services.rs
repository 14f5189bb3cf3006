//! Infrastructure wiring for the HTTP layer.
//!
//! Handlers never reach storage directly: they build a use case from the ports
//! held here and run it.

use std::sync::Arc;

use confero_core::{DateGenerator, IdGenerator, SystemDateGenerator, UuidIdGenerator};
use confero_infra::{AppConfig, PostgresWebinarRepository};
use confero_webinars::{
    ChangeSeats, InMemoryWebinarRepository, OrganizeWebinar, RepositoryError, WebinarRepository,
};

pub type SharedRepository = Arc<dyn WebinarRepository>;
pub type SharedIdGenerator = Arc<dyn IdGenerator>;
pub type SharedDateGenerator = Arc<dyn DateGenerator>;

/// Ports shared by every request.
#[derive(Clone)]
pub struct AppServices {
    repository: SharedRepository,
    id_generator: SharedIdGenerator,
    date_generator: SharedDateGenerator,
}

impl AppServices {
    pub fn new(
        repository: SharedRepository,
        id_generator: SharedIdGenerator,
        date_generator: SharedDateGenerator,
    ) -> Self {
        Self {
            repository,
            id_generator,
            date_generator,
        }
    }

    /// In-memory storage with real generators (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryWebinarRepository::new()),
            Arc::new(UuidIdGenerator),
            Arc::new(SystemDateGenerator),
        )
    }

    /// Postgres when `DATABASE_URL` is configured, in-memory otherwise.
    pub async fn from_config(config: &AppConfig) -> Result<Self, RepositoryError> {
        let Some(database_url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set; webinars are kept in memory");
            return Ok(Self::in_memory());
        };

        let repository = PostgresWebinarRepository::connect(database_url).await?;
        repository.ensure_schema().await?;
        tracing::info!("using postgres webinar repository");

        Ok(Self::new(
            Arc::new(repository),
            Arc::new(UuidIdGenerator),
            Arc::new(SystemDateGenerator),
        ))
    }

    pub fn organize_webinar(
        &self,
    ) -> OrganizeWebinar<SharedRepository, SharedIdGenerator, SharedDateGenerator> {
        OrganizeWebinar::new(
            self.repository.clone(),
            self.id_generator.clone(),
            self.date_generator.clone(),
        )
    }

    pub fn change_seats(&self) -> ChangeSeats<SharedRepository> {
        ChangeSeats::new(self.repository.clone())
    }
}
