use crate::models::state::GameState;
use crate::renderer::Theme;
use std::path::PathBuf;

/// The one running game: its state plus how to present and persist it.
///
/// Owned exclusively by the console loop; commands borrow it mutably for the
/// length of a single turn.
#[derive(Debug)]
pub struct Session {
    /// When the session was started
    pub session_started: std::time::Instant,
    /// Live game state
    pub state: GameState,
    /// Where `save` writes and `load` reads
    pub save_path: PathBuf,
    /// Output colours
    pub theme: Theme,
    /// Number of commands processed
    pub turns: u64,
}

impl Session {
    pub fn new(state: GameState, save_path: impl Into<PathBuf>, theme: Theme) -> Self {
        Self {
            session_started: std::time::Instant::now(),
            state,
            save_path: save_path.into(),
            theme,
            turns: 0,
        }
    }

    /// Replaces the whole game state at once.
    pub fn replace_state(&mut self, state: GameState) -> GameState {
        std::mem::replace(&mut self.state, state)
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }
}
