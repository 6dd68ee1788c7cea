//! Shared error types for the services crate.

use thiserror::Error;

use content::ContentError;
use humbug_core::game::GameError;

/// Errors emitted by `BriefGenerator` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BriefError {
    #[error("brief generation is not configured")]
    Disabled,
    #[error("brief generation returned an empty response")]
    EmptyResponse,
    #[error("brief request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `GameController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
