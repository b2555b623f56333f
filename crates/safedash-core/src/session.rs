//! Per-session dataset state
//!
//! Each [`Session`] owns one lazily generated dataset: created on first
//! access, read-only afterwards, dropped with the session. Sessions never
//! share datasets, since generation is randomized.
//!
//! A [`SessionStore`] keeps live sessions by id for front ends that serve
//! several users.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::generator::generate_dataset;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use safedash_model::Dataset;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ulid::Ulid;

/// Unique session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's dashboard state
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: DashboardConfig,
    dataset: OnceCell<Arc<Dataset>>,
}

impl Session {
    /// Create a session; the dataset is generated on first access
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            id: SessionId::new(),
            config,
            dataset: OnceCell::new(),
        }
    }

    /// Create a session around an existing dataset
    #[must_use]
    pub fn with_dataset(config: DashboardConfig, dataset: Dataset) -> Self {
        Self {
            id: SessionId::new(),
            config,
            dataset: OnceCell::with_value(Arc::new(dataset)),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The session's dataset, generating it on first call
    ///
    /// Later calls return the same dataset without regenerating.
    pub fn dataset(&self) -> Result<Arc<Dataset>> {
        self.dataset
            .get_or_try_init(|| {
                tracing::info!("Session {}: generating dataset", self.id);
                generate_dataset(&self.config.generator).map(Arc::new)
            })
            .cloned()
    }

    /// Check whether the dataset has been generated yet
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.dataset.get().is_some()
    }
}

/// Live sessions keyed by id
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<Session>>,
    config: DashboardConfig,
}

impl SessionStore {
    /// Create store whose sessions use `config`
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Start a new session
    pub fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new(self.config.clone()));
        self.sessions.insert(session.id(), Arc::clone(&session));
        tracing::info!("Session {} started ({} live)", session.id(), self.sessions.len());
        session
    }

    /// Look up a live session
    pub fn get(&self, id: SessionId) -> Result<Arc<Session>> {
        self.sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(DashboardError::SessionNotFound(id))
    }

    /// End a session, dropping its dataset once no caller holds it
    pub fn end(&self, id: SessionId) -> Result<()> {
        if self.sessions.remove(&id).is_none() {
            return Err(DashboardError::SessionNotFound(id));
        }
        tracing::info!("Session {} ended", id);
        Ok(())
    }

    /// Number of live sessions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
