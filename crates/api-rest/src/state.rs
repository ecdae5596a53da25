//! Shared application state.

use clinic_core::{DirectoryService, ViewSession};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Application state for the REST API server.
///
/// Holds the directory service and the in-memory view sessions. Cloning is cheap; all clones
/// share the same sessions.
#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryService,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(directory: DirectoryService) -> Self {
        Self {
            directory,
            sessions: SessionStore::default(),
        }
    }
}

/// Upper bound on live view sessions held by one server.
pub const MAX_SESSIONS: usize = 10_000;

/// View sessions keyed by identifier. Sessions are lost on restart.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ViewSession>>>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Stores `session` under a new identifier, or returns `None` when the store is full.
    pub async fn insert(&self, session: ViewSession) -> Option<Uuid> {
        let mut sessions = self.inner.write().await;
        if sessions.len() >= self.capacity {
            tracing::warn!("view session limit of {} reached", self.capacity);
            return None;
        }
        let id = Uuid::new_v4();
        sessions.insert(id, session);
        tracing::debug!("created view session {}", id);
        Some(id)
    }

    /// Drops the session. Returns `false` if it was unknown.
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.inner.write().await.remove(id).is_some();
        if removed {
            tracing::debug!("removed view session {}", id);
        }
        removed
    }

    pub async fn get(&self, id: &Uuid) -> Option<ViewSession> {
        self.inner.read().await.get(id).cloned()
    }

    /// Applies `f` to the session and returns its updated value, or `None` if it is unknown.
    pub async fn update<F>(&self, id: &Uuid, f: F) -> Option<ViewSession>
    where
        F: FnOnce(&mut ViewSession),
    {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(id)?;
        f(session);
        Some(session.clone())
    }
}
