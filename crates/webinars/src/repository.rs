//! Webinar persistence boundary.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use confero_core::WebinarId;

use crate::webinar::Webinar;

/// Storage-level failure reported by a repository adapter.
///
/// These are infrastructure errors; the use cases propagate them unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("webinar already exists: {0}")]
    AlreadyExists(WebinarId),

    #[error("webinar not found in storage: {0}")]
    NotFound(WebinarId),

    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// The only gateway through which webinars are loaded or persisted.
///
/// No locking or versioning is part of this contract: two read-modify-write
/// cycles on the same id may interleave, and the adapter's native single-record
/// atomicity is the only guard.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Look up a webinar. No side effects.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError>;

    /// Persist a brand-new webinar. Adapters reject a duplicate id.
    async fn create(&self, webinar: Webinar) -> Result<(), RepositoryError>;

    /// Overwrite the stored state of an existing webinar.
    async fn update(&self, webinar: Webinar) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R> WebinarRepository for Arc<R>
where
    R: WebinarRepository + ?Sized,
{
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        (**self).create(webinar).await
    }

    async fn update(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        (**self).update(webinar).await
    }
}
