use crate::commands::{CommandOutput, CommandResult, require_argument};
use crate::input::parser::Intent;
use crate::services::inventory;
use crate::state::session::Session;
use crate::success;

pub fn take(sess: &mut Session, intent: Intent) -> CommandResult<CommandOutput> {
    let what = require_argument(&intent, "Take what?")?;
    let item = inventory::take(&mut sess.state, &what)?;

    Ok(success!(format!("You took the {}.", item.name)))
}
