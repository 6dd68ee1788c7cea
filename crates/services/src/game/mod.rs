mod controller;
mod snapshot;

pub use controller::{GameController, GameSettings};
pub use snapshot::{BriefStatus, GameSnapshot};
