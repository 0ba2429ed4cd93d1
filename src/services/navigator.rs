use crate::error::{AppResult, DomainError};
use crate::models::state::GameState;
use crate::models::types::Direction;
use crate::scenario::EXIT_ROOM;

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub from: String,
    pub to: String,
    /// Name of the item that cleared the lock on the way in, if any
    pub unlocked_with: Option<String>,
    /// The move ended the game
    pub escaped: bool,
}

/// Moves the player through the exit in `dir`.
///
/// Locked rooms are opened (for good) when the player carries the unlock
/// item. On any error the state is left untouched.
pub fn go(state: &mut GameState, dir: &Direction) -> AppResult<MoveOutcome> {
    if state.game_over {
        return Err(DomainError::GameOver);
    }

    let from = state.current_room()?;
    tracing::debug!(room = %from.name, %dir, exits = ?from.exit_names(), "move attempt");

    let Some(target_name) = from.exit_to(dir).map(str::to_string) else {
        return Err(DomainError::InvalidDirection {
            direction: dir.to_string(),
            available: from.exit_names(),
        });
    };
    let from_name = from.name.clone();

    let target = state.room(&target_name)?;
    let mut unlocked_with = None;
    if target.locked {
        if !target.can_unlock_with(&state.player.inventory) {
            return Err(DomainError::Locked {
                room: target.name.clone(),
                unlock_item: target.unlock_item.clone(),
            });
        }
        unlocked_with = target.unlock_item.clone();
    }

    let target = state.room_mut(&target_name)?;
    if unlocked_with.is_some() {
        target.unlock();
        tracing::info!(room = %target_name, "room unlocked");
    }
    let escaped = target.name == EXIT_ROOM && !target.locked;

    state.player.current_room = target_name.clone();
    if escaped {
        state.finish(true);
        tracing::info!("player escaped");
    }

    Ok(MoveOutcome {
        direction: dir.clone(),
        from: from_name,
        to: target_name,
        unlocked_with,
        escaped,
    })
}
