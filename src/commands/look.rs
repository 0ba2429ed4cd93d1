use crate::commands::{CommandOutput, CommandResult};
use crate::input::parser::Intent;
use crate::renderer::render_room;
use crate::services::room;
use crate::state::session::Session;
use crate::success;

pub fn look(sess: &mut Session, _intent: Intent) -> CommandResult<CommandOutput> {
    let rv = room::describe_room(&mut sess.state)?;

    Ok(success!(render_room(&sess.theme, &rv)))
}
