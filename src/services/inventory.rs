use crate::error::{AppResult, DomainError};
use crate::models::item::Item;
use crate::models::state::GameState;
use crate::models::types::same_name;

pub const HEALTH_POTION: &str = "Health Potion";
pub const POTION_HEAL_AMOUNT: i32 = 50;

/// What happened when an item was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseEffect {
    /// Health went up; carries the new value
    Healed(i32),
    /// Consumed without further effect
    Consumed,
}

/// Moves an item from the current room into the player's inventory.
pub fn take(state: &mut GameState, name: &str) -> AppResult<Item> {
    if state.game_over {
        return Err(DomainError::GameOver);
    }

    let room = state.current_room_mut()?;
    let Some(item) = room.remove_item(name) else {
        return Err(DomainError::ItemNotFound {
            item: name.to_string(),
            available: room.items.names(),
        });
    };

    tracing::debug!(item = %item.name, room = %room.name, "item taken");
    state.player.inventory.push(item.clone());
    Ok(item)
}

/// Consumes a usable item from the inventory and applies its effect.
pub fn use_item(state: &mut GameState, name: &str) -> AppResult<(Item, UseEffect)> {
    if state.game_over {
        return Err(DomainError::GameOver);
    }

    let Some(item) = state.player.inventory.take_where(name, |i| i.usable) else {
        return Err(DomainError::ItemNotUsable(name.to_string()));
    };

    let effect = if same_name(&item.name, HEALTH_POTION) {
        UseEffect::Healed(state.player.heal(POTION_HEAL_AMOUNT))
    } else {
        UseEffect::Consumed
    };

    tracing::debug!(item = %item.name, ?effect, "item used");
    Ok((item, effect))
}
