mod game;
mod lobby;
mod overlay;
mod play;
mod results;
mod state;
mod terminal;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use state::{ViewError, ViewState, view_state_from_resource};
