//! In-memory webinar repository for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use confero_core::WebinarId;

use crate::repository::{RepositoryError, WebinarRepository};
use crate::webinar::Webinar;

/// In-memory webinar store.
///
/// - No IO
/// - Duplicate ids are rejected on `create`
/// - `update` of an unknown id is rejected
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: RwLock<HashMap<WebinarId, Webinar>>,
}

impl InMemoryWebinarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-seeded with `webinars`.
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let map = webinars
            .into_iter()
            .map(|w| (w.webinar_id().clone(), w))
            .collect();
        Self {
            webinars: RwLock::new(map),
        }
    }

    /// Synchronous lookup, for assertions outside an async context.
    pub fn find_by_id_sync(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars.read().ok()?.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.webinars.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError> {
        let map = self
            .webinars
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(map.get(id).cloned())
    }

    async fn create(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        let mut map = self
            .webinars
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        let id = webinar.webinar_id().clone();
        if map.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id));
        }
        map.insert(id, webinar);
        Ok(())
    }

    async fn update(&self, webinar: Webinar) -> Result<(), RepositoryError> {
        let mut map = self
            .webinars
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        match map.get_mut(webinar.webinar_id()) {
            Some(slot) => {
                *slot = webinar;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(webinar.webinar_id().clone())),
        }
    }
}
