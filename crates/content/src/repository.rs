use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use humbug_core::model::{Session, SessionId};
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogFile};

/// Errors surfaced by content providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Read-only access to sessions and their banks.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All sessions in display order.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the catalog cannot be read.
    async fn list_sessions(&self) -> Result<Vec<Session>, ContentError>;

    /// Fetch a session by ID.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if missing, or other content errors.
    async fn get_session(&self, id: SessionId) -> Result<Session, ContentError>;
}

/// Catalog held in memory and shared between clones.
#[derive(Clone, Debug)]
pub struct InMemoryCatalog {
    sessions: Arc<Vec<Session>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }

    /// Parse and validate a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or invalid.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let sessions = CatalogFile::from_json(raw)?.into_sessions()?;
        Ok(Self::new(sessions))
    }

    /// Load a JSON catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read and
    /// `ContentError::Catalog` if its contents are invalid.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ContentError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self::from_json(&raw)?)
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    fn find(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id() == id)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_sessions(&self) -> Result<Vec<Session>, ContentError> {
        Ok(self.sessions.to_vec())
    }

    async fn get_session(&self, id: SessionId) -> Result<Session, ContentError> {
        self.find(id).cloned().ok_or(ContentError::NotFound)
    }
}
