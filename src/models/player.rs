use crate::models::item::ItemList;
use serde::{Deserialize, Serialize};

pub const MAX_HEALTH: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub inventory: ItemList,
    /// Name of the room the player stands in (key into the room map)
    pub current_room: String,
    /// Always within `0..=MAX_HEALTH`
    pub health: i32,
}

impl Player {
    pub fn new(start_room: impl Into<String>) -> Self {
        Self {
            inventory: ItemList::default(),
            current_room: start_room.into(),
            health: MAX_HEALTH,
        }
    }

    /// Adds `amount` to health, capped at [`MAX_HEALTH`]. Returns the new value.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.set_health(self.health.saturating_add(amount));
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, MAX_HEALTH);
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }
}
