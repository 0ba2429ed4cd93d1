use crate::error::{AppResult, DomainError};
use crate::models::player::{MAX_HEALTH, Player};
use crate::models::room::Room;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate root of a game: every room, the player and the terminal flags.
///
/// This is also the exact shape of a save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub rooms: BTreeMap<String, Room>,
    pub game_over: bool,
    pub won: bool,
}

impl GameState {
    pub fn new(rooms: impl IntoIterator<Item = Room>, player: Player) -> Self {
        Self {
            player,
            rooms: rooms.into_iter().map(|r| (r.name.clone(), r)).collect(),
            game_over: false,
            won: false,
        }
    }

    pub fn room(&self, name: &str) -> AppResult<&Room> {
        self.rooms.get(name).ok_or_else(|| DomainError::RoomNotFound(name.to_string()))
    }

    pub fn room_mut(&mut self, name: &str) -> AppResult<&mut Room> {
        self.rooms
            .get_mut(name)
            .ok_or_else(|| DomainError::RoomNotFound(name.to_string()))
    }

    pub fn current_room(&self) -> AppResult<&Room> {
        self.room(&self.player.current_room)
    }

    pub fn current_room_mut(&mut self) -> AppResult<&mut Room> {
        let name = self.player.current_room.clone();
        self.room_mut(&name)
    }

    /// Ends the game. Winning always implies game over.
    pub fn finish(&mut self, won: bool) {
        self.game_over = true;
        self.won = self.won || won;
    }

    /// Checks the structural invariants of a state built from outside data
    /// (scenario files and save games).
    pub fn validate(&self) -> AppResult<()> {
        if self.rooms.is_empty() {
            return Err(DomainError::InvalidData("no rooms".into()));
        }

        for (key, room) in &self.rooms {
            if key != &room.name {
                return Err(DomainError::InvalidData(format!(
                    "room stored under '{key}' is named '{}'",
                    room.name
                )));
            }
            for (dir, target) in &room.connections {
                if !self.rooms.contains_key(target) {
                    return Err(DomainError::InvalidData(format!(
                        "exit {dir} of '{key}' leads to unknown room '{target}'"
                    )));
                }
            }
        }

        if !self.rooms.contains_key(&self.player.current_room) {
            return Err(DomainError::InvalidData(format!(
                "player is in unknown room '{}'",
                self.player.current_room
            )));
        }

        if !(0..=MAX_HEALTH).contains(&self.player.health) {
            return Err(DomainError::InvalidData(format!(
                "health {} out of range",
                self.player.health
            )));
        }

        if self.won && !self.game_over {
            return Err(DomainError::InvalidData("won without game over".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> GameState {
        GameState::new(
            [
                Room::new("Cell", "Damp.").with_exit("north", "Hall"),
                Room::new("Hall", "Long.").with_exit("south", "Cell"),
            ],
            Player::new("Cell"),
        )
    }

    #[test]
    fn valid_state_passes() {
        assert!(two_rooms().validate().is_ok());
    }

    #[test]
    fn dangling_exit_is_rejected() {
        let mut gs = two_rooms();
        gs.room_mut("Hall").unwrap().add_connection("east", "Nowhere");
        assert!(matches!(gs.validate(), Err(DomainError::InvalidData(_))));
    }

    #[test]
    fn player_must_stand_in_a_known_room() {
        let mut gs = two_rooms();
        gs.player.current_room = "Attic".into();
        assert!(gs.validate().is_err());
        assert!(matches!(gs.current_room(), Err(DomainError::RoomNotFound(_))));
    }

    #[test]
    fn won_requires_game_over() {
        let mut gs = two_rooms();
        gs.won = true;
        assert!(gs.validate().is_err());

        let mut gs = two_rooms();
        gs.finish(true);
        assert!(gs.game_over && gs.won);
        assert!(gs.validate().is_ok());
    }
}
