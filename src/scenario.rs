//! Scenario loading.
//!
//! The dungeon is described declaratively in YAML (see `scenario/default.yaml`)
//! and turned into a fresh [`GameState`]. The default scenario is embedded in
//! the binary, so a broken description is a startup failure rather than a
//! runtime one.

use crate::error::InfraError;
use crate::models::item::Item;
use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::state::GameState;
use crate::models::types::Direction;
use serde::Deserialize;
use std::collections::HashSet;

/// Room every new game starts in.
pub const START_ROOM: &str = "Prison Cell";

/// Entering this room (unlocked) wins the game.
pub const EXIT_ROOM: &str = "Exit Gate";

const DEFAULT_SCENARIO: &str = include_str!("scenario/default.yaml");

#[derive(Debug, Deserialize)]
pub struct ScenarioYaml {
    pub rooms: Vec<RoomYaml>,
}

#[derive(Debug, Deserialize)]
pub struct RoomYaml {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemYaml>,
    #[serde(default)]
    pub exits: Vec<ExitYaml>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub unlock_item: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemYaml {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub unlocks: Vec<String>, // room names
}

#[derive(Debug, Deserialize)]
pub struct ExitYaml {
    pub dir: String, // "north"
    pub to: String,  // "Corridor"
}

impl From<ItemYaml> for Item {
    fn from(y: ItemYaml) -> Self {
        Item {
            name: y.name,
            description: y.description,
            usable: y.usable,
            required_for: y.unlocks,
        }
    }
}

impl From<RoomYaml> for Room {
    fn from(y: RoomYaml) -> Self {
        let mut room = Room::new(y.name, y.description);
        for item in y.items {
            room.items.push(item.into());
        }
        for exit in y.exits {
            room.add_connection(exit.dir.as_str(), exit.to);
        }
        room.locked = y.locked;
        room.unlock_item = y.unlock_item;
        room
    }
}

/// Builds the built-in "Escape the Dungeon" scenario.
pub fn default_scenario() -> Result<GameState, InfraError> {
    from_yaml(DEFAULT_SCENARIO)
}

/// Builds a new game from a YAML scenario description.
pub fn from_yaml(src: &str) -> Result<GameState, InfraError> {
    let doc: ScenarioYaml =
        serde_yaml::from_str(src).map_err(|e| InfraError::Scenario(format!("parse: {e}")))?;
    build(doc)
}

fn build(doc: ScenarioYaml) -> Result<GameState, InfraError> {
    let mut seen = HashSet::new();
    for room in &doc.rooms {
        if !seen.insert(room.name.as_str()) {
            return Err(InfraError::Scenario(format!("duplicate room '{}'", room.name)));
        }
    }
    for required in [START_ROOM, EXIT_ROOM] {
        if !seen.contains(required) {
            return Err(InfraError::Scenario(format!("missing room '{required}'")));
        }
    }

    for room in &doc.rooms {
        let mut dirs = HashSet::new();
        for exit in &room.exits {
            if !dirs.insert(Direction::parse(&exit.dir)) {
                return Err(InfraError::Scenario(format!(
                    "room '{}' has more than one '{}' exit",
                    room.name, exit.dir
                )));
            }
        }
    }

    let item_names: HashSet<String> = doc
        .rooms
        .iter()
        .flat_map(|r| r.items.iter().map(|i| i.name.to_lowercase()))
        .collect();
    for room in doc.rooms.iter().filter(|r| r.locked) {
        match &room.unlock_item {
            None => tracing::warn!(room = %room.name, "locked room has no key and can never be entered"),
            Some(key) if !item_names.contains(&key.to_lowercase()) => {
                tracing::warn!(room = %room.name, key = %key, "key for locked room does not exist")
            }
            Some(_) => {}
        }
    }

    let state = GameState::new(doc.rooms.into_iter().map(Room::from), Player::new(START_ROOM));
    state
        .validate()
        .map_err(|e| InfraError::Scenario(e.to_string()))?;

    tracing::debug!(rooms = state.rooms.len(), "scenario loaded");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_matches_layout() {
        let gs = default_scenario().unwrap();
        assert_eq!(gs.rooms.len(), 6);
        assert_eq!(gs.player.current_room, START_ROOM);
        assert_eq!(gs.player.health, 100);
        assert!(gs.player.inventory.is_empty());
        assert!(!gs.game_over && !gs.won);

        let items: usize = gs.rooms.values().map(|r| r.items.len()).sum();
        assert_eq!(items, 5);

        let corridor = gs.room("Corridor").unwrap();
        assert_eq!(corridor.exit_to(&Direction::East), Some("Armory"));
        assert_eq!(corridor.exit_to(&Direction::West), Some("Guard Post"));
        assert_eq!(corridor.exit_to(&Direction::North), Some("Treasure Room"));
        assert_eq!(corridor.exit_to(&Direction::South), Some("Prison Cell"));

        let armory = gs.room("Armory").unwrap();
        assert!(armory.locked);
        assert_eq!(armory.unlock_item.as_deref(), Some("Rusty Key"));

        let gate = gs.room(EXIT_ROOM).unwrap();
        assert!(gate.locked);
        assert_eq!(gate.unlock_item.as_deref(), Some("Golden Key"));
        assert!(gate.connections.is_empty());
    }

    #[test]
    fn scenario_items_keep_their_flags() {
        let gs = default_scenario().unwrap();
        let torch = gs.room(START_ROOM).unwrap().items.find("torch").unwrap();
        assert!(!torch.usable);

        let key = gs.room("Guard Post").unwrap().items.find("rusty key").unwrap();
        assert!(key.usable);
        assert_eq!(key.required_for, vec!["Armory".to_string()]);
    }

    #[test]
    fn dangling_exit_fails() {
        let src = r#"
rooms:
  - name: Prison Cell
    description: x
    exits: [{ dir: north, to: Nowhere }]
  - name: Exit Gate
    description: y
"#;
        assert!(matches!(from_yaml(src), Err(InfraError::Scenario(_))));
    }

    #[test]
    fn missing_exit_room_fails() {
        let src = "rooms:\n  - name: Prison Cell\n    description: x\n";
        let err = from_yaml(src).unwrap_err();
        assert!(err.to_string().contains("Exit Gate"));
    }

    #[test]
    fn duplicate_room_fails() {
        let src = r#"
rooms:
  - { name: Prison Cell, description: a }
  - { name: Prison Cell, description: b }
  - { name: Exit Gate, description: c }
"#;
        let err = from_yaml(src).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn aliased_exits_fail() {
        let src = r#"
rooms:
  - name: Prison Cell
    description: a
    exits: [{ dir: n, to: Exit Gate }, { dir: North, to: Prison Cell }]
  - { name: Exit Gate, description: c }
"#;
        let err = from_yaml(src).unwrap_err();
        assert!(err.to_string().contains("more than one 'North' exit"));
    }
}
