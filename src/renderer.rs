pub mod ansi;

use crate::services::room::{InventoryView, ItemLine, RoomView};

/// Colours used when drawing views. The plain theme has all fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub room_title: String,
    pub room_body: String,
    pub items: String,
    pub exits: String,
    pub notice: String,
    pub reset: String,
}

impl Theme {
    pub fn plain() -> Self {
        Self::default()
    }

    /// 16-color palette, safe on pretty much any terminal
    pub fn ansi16() -> Self {
        Self {
            room_title: ansi::compose_sgr(Some("bright_cyan"), &["bold"]),
            room_body: String::new(),
            items: ansi::compose_sgr(Some("yellow"), &[]),
            exits: ansi::compose_sgr(Some("blue"), &["bold"]),
            notice: ansi::compose_sgr(Some("green"), &["bold"]),
            reset: ansi::RESET.to_string(),
        }
    }

    pub fn from_color(color: bool) -> Self {
        if color { Self::ansi16() } else { Self::plain() }
    }

    fn paint(&self, color: &str, s: &str) -> String {
        if color.is_empty() {
            s.to_string()
        } else {
            format!("{color}{s}{}", self.reset)
        }
    }

    pub fn notice(&self, s: &str) -> String {
        self.paint(&self.notice, s)
    }
}

fn item_lines(theme: &Theme, items: &[ItemLine], out: &mut Vec<String>) {
    for item in items {
        out.push(format!("  - {}: {}", theme.paint(&theme.items, &item.name), item.description));
    }
}

/// Room name, description, items (if any) and exits (if any).
pub fn render_room(theme: &Theme, rv: &RoomView) -> String {
    let mut out = Vec::new();
    out.push(theme.paint(&theme.room_title, &format!("=== {} ===", rv.title)));
    out.push(theme.paint(&theme.room_body, &rv.body));

    if !rv.items.is_empty() {
        out.push(String::new());
        out.push("Items here:".to_string());
        item_lines(theme, &rv.items, &mut out);
    }

    if !rv.exits.is_empty() {
        out.push(String::new());
        out.push(format!("Exits: {}", theme.paint(&theme.exits, &rv.exits.join(", "))));
    }

    out.join("\n")
}

pub fn render_inventory(theme: &Theme, inv: &InventoryView) -> String {
    if inv.items.is_empty() {
        return format!("Your inventory is empty. (Health: {})", inv.health);
    }

    let mut out = vec![format!("Inventory (Health: {}):", inv.health)];
    item_lines(theme, &inv.items, &mut out);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> RoomView {
        RoomView {
            title: "Prison Cell".into(),
            body: "A damp, cold cell.".into(),
            items: vec![ItemLine { name: "Torch".into(), description: "A burning torch.".into() }],
            exits: vec!["north".into()],
        }
    }

    #[test]
    fn plain_room() {
        let s = render_room(&Theme::plain(), &cell());
        assert_eq!(
            s,
            "=== Prison Cell ===\nA damp, cold cell.\n\nItems here:\n  - Torch: A burning torch.\n\nExits: north"
        );
    }

    #[test]
    fn room_without_items_or_exits() {
        let rv = RoomView { items: vec![], exits: vec![], ..cell() };
        assert_eq!(render_room(&Theme::plain(), &rv), "=== Prison Cell ===\nA damp, cold cell.");
    }

    #[test]
    fn colored_room_strips_to_plain() {
        let colored = render_room(&Theme::ansi16(), &cell());
        assert_ne!(colored, render_room(&Theme::plain(), &cell()));
        assert_eq!(ansi::strip(&colored), render_room(&Theme::plain(), &cell()));
    }

    #[test]
    fn inventory_views() {
        let empty = InventoryView { health: 80, items: vec![] };
        assert_eq!(render_inventory(&Theme::plain(), &empty), "Your inventory is empty. (Health: 80)");

        let full = InventoryView {
            health: 100,
            items: vec![ItemLine { name: "Rusty Key".into(), description: "Old.".into() }],
        };
        assert_eq!(
            render_inventory(&Theme::plain(), &full),
            "Inventory (Health: 100):\n  - Rusty Key: Old."
        );
    }
}
