use crate::commands::{CommandError, CommandOutput, CommandResult};
use crate::input::parser::Intent;
use crate::renderer::render_room;
use crate::services::{room, savegame};
use crate::state::session::Session;
use crate::success;

pub fn load(sess: &mut Session, _intent: Intent) -> CommandResult<CommandOutput> {
    // Parse into a fresh state first; the live one is only replaced on success
    let loaded = savegame::load(&sess.save_path).map_err(|e| {
        tracing::warn!(path = %sess.save_path.display(), error = %e, "load failed");
        CommandError::LoadFailed(e)
    })?;
    sess.replace_state(loaded);

    if sess.is_over() {
        return Ok(success!("Game loaded successfully! That game has already ended."));
    }

    let rv = room::describe_room(&mut sess.state)?;
    Ok(success!(format!("Game loaded successfully!\n\n{}", render_room(&sess.theme, &rv))))
}
