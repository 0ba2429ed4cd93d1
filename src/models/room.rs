use crate::models::item::{Item, ItemList};
use crate::models::types::{Direction, same_name};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A node in the dungeon graph. Connections are one-way and refer to other
/// rooms by name; the room map in [`GameState`](crate::models::state::GameState)
/// owns every room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name, also the key in the room map
    pub name: String,
    pub description: String,
    pub items: ItemList,
    /// Direction -> target room name
    #[serde(deserialize_with = "unique_directions")]
    pub connections: BTreeMap<Direction, String>,
    /// Locked rooms can only be entered while carrying `unlock_item`
    pub locked: bool,
    // present as `null` when unset; a missing key is a malformed save
    #[serde(deserialize_with = "Option::deserialize")]
    pub unlock_item: Option<String>,
    /// Display only
    pub visited: bool,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: ItemList::default(),
            connections: BTreeMap::new(),
            locked: false,
            unlock_item: None,
            visited: false,
        }
    }

    pub fn with_exit(mut self, dir: impl Into<Direction>, to: impl Into<String>) -> Self {
        self.add_connection(dir, to);
        self
    }

    /// Lock the room behind `item`. `None` makes the room permanently impassable.
    pub fn locked_by(mut self, item: Option<&str>) -> Self {
        self.locked = true;
        self.unlock_item = item.map(str::to_string);
        self
    }

    pub fn add_connection(&mut self, dir: impl Into<Direction>, to: impl Into<String>) {
        self.connections.insert(dir.into(), to.into());
    }

    pub fn exit_to(&self, dir: &Direction) -> Option<&str> {
        self.connections.get(dir).map(String::as_str)
    }

    pub fn exit_names(&self) -> Vec<String> {
        self.connections.keys().map(|d| d.to_string()).collect()
    }

    /// True when `inventory` holds the item that clears this room's lock.
    pub fn can_unlock_with(&self, inventory: &ItemList) -> bool {
        match &self.unlock_item {
            Some(key) => inventory.iter().any(|i| same_name(&i.name, key)),
            None => false,
        }
    }

    /// Clears the lock. Locks never come back.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.take(name)
    }
}

/// Reads a connections map, rejecting keys that name the same direction
/// ("n" and "north").
fn unique_directions<'de, D>(deserializer: D) -> Result<BTreeMap<Direction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConnectionsVisitor;

    impl<'de> Visitor<'de> for ConnectionsVisitor {
        type Value = BTreeMap<Direction, String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of direction to room name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = BTreeMap::new();
            while let Some((key, to)) = map.next_entry::<String, String>()? {
                let dir = Direction::parse(&key);
                if out.contains_key(&dir) {
                    return Err(serde::de::Error::custom(format!("duplicate exit '{key}' ({dir})")));
                }
                out.insert(dir, to);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(ConnectionsVisitor)
}
