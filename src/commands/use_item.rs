use crate::commands::{CommandOutput, CommandResult, require_argument};
use crate::input::parser::Intent;
use crate::services::inventory::{self, UseEffect};
use crate::state::session::Session;
use crate::success;

pub fn use_item(sess: &mut Session, intent: Intent) -> CommandResult<CommandOutput> {
    let what = require_argument(&intent, "Use what?")?;
    let (item, effect) = inventory::use_item(&mut sess.state, &what)?;

    let msg = match effect {
        UseEffect::Healed(health) => format!("You used the {}. Health restored to {health}!", item.name),
        UseEffect::Consumed => format!("You used the {}.", item.name),
    };
    Ok(success!(msg))
}
