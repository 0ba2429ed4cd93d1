use crate::error::AppResult;
use crate::models::item::ItemList;
use crate::models::state::GameState;

/// Display data for a single item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub name: String,
    pub description: String,
}

/// Everything the renderer needs to show a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub title: String,
    pub body: String,
    pub items: Vec<ItemLine>,
    pub exits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub health: i32,
    pub items: Vec<ItemLine>,
}

fn item_lines(items: &ItemList) -> Vec<ItemLine> {
    items
        .iter()
        .map(|i| ItemLine {
            name: i.name.clone(),
            description: i.description.clone(),
        })
        .collect()
}

/// Builds the view of the player's current room and marks it visited.
pub fn describe_room(state: &mut GameState) -> AppResult<RoomView> {
    let room = state.current_room_mut()?;
    room.visited = true;

    Ok(RoomView {
        title: room.name.clone(),
        body: room.description.clone(),
        items: item_lines(&room.items),
        exits: room.exit_names(),
    })
}

pub fn describe_inventory(state: &GameState) -> InventoryView {
    InventoryView {
        health: state.player.health,
        items: item_lines(&state.player.inventory),
    }
}
