use crate::models::types::same_name;
use serde::{Deserialize, Serialize};

/// Something the player can find, carry and possibly use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name (ie: "Rusty Key"), matched case-insensitively
    pub name: String,
    /// One-liner shown in room and inventory listings
    pub description: String,
    /// Can the item be consumed with `use`?
    pub usable: bool,
    /// Names of rooms this item unlocks
    pub required_for: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usable: false,
            required_for: vec![],
        }
    }

    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    pub fn unlocks(mut self, room: impl Into<String>) -> Self {
        self.required_for.push(room.into());
        self
    }

    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Ordered item container shared by rooms and the player's inventory.
///
/// Order is the order in which items were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Item>);

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self(items)
    }

    pub fn push(&mut self, item: Item) {
        self.0.push(item);
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.0.iter().find(|i| i.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Removes the first item matching `name` for which `pred` holds.
    pub fn take_where(&mut self, name: &str, pred: impl Fn(&Item) -> bool) -> Option<Item> {
        let idx = self.0.iter().position(|i| i.is_named(name) && pred(i))?;
        Some(self.0.remove(idx))
    }

    pub fn take(&mut self, name: &str) -> Option<Item> {
        self.take_where(name, |_| true)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|i| i.name.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
