use crate::commands::{CommandOutput, CommandResult};
use crate::input::parser::Intent;
use crate::renderer::render_inventory;
use crate::services::room;
use crate::state::session::Session;
use crate::success;

pub fn inventory(sess: &mut Session, _intent: Intent) -> CommandResult<CommandOutput> {
    let view = room::describe_inventory(&sess.state);

    Ok(success!(render_inventory(&sess.theme, &view)))
}
