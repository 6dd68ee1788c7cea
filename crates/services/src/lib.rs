#![forbid(unsafe_code)]

pub mod brief;
pub mod error;
pub mod game;

pub use brief::{
    BriefGenerator, BriefLlmConfig, BriefTier, CannedBriefGenerator, FallbackBriefGenerator,
    LlmBriefGenerator,
};
pub use error::{BriefError, GameServiceError};
pub use game::{BriefStatus, GameController, GameSettings, GameSnapshot};
