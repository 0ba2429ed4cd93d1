use crate::commands::{CommandOutput, CommandResult, require_argument};
use crate::input::parser::Intent;
use crate::models::types::Direction;
use crate::renderer::render_room;
use crate::services::{navigator, room};
use crate::state::session::Session;
use crate::success;

pub fn go(sess: &mut Session, intent: Intent) -> CommandResult<CommandOutput> {
    let exits = sess.state.current_room()?.exit_names();
    let arg = require_argument(&intent, format!("Go where? Available directions: {}", exits.join(", ")))?;
    let dir = Direction::parse(&arg);

    let outcome = navigator::go(&mut sess.state, &dir)?;

    let mut lines = Vec::new();
    if let Some(key) = &outcome.unlocked_with {
        lines.push(format!("You use the {key} to unlock the door."));
    }
    lines.push(format!("You move {} to the {}.", outcome.direction, outcome.to));
    lines.push(String::new());

    let rv = room::describe_room(&mut sess.state)?;
    lines.push(render_room(&sess.theme, &rv));

    if outcome.escaped {
        lines.push(String::new());
        lines.push(sess.theme.notice("Congratulations! You have escaped the dungeon!"));
    }

    Ok(success!(lines.join("\n")))
}
