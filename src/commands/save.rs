use crate::commands::{CommandError, CommandOutput, CommandResult};
use crate::input::parser::Intent;
use crate::services::savegame;
use crate::state::session::Session;
use crate::success;

pub fn save(sess: &mut Session, _intent: Intent) -> CommandResult<CommandOutput> {
    savegame::save(&sess.state, &sess.save_path).map_err(|e| {
        tracing::warn!(path = %sess.save_path.display(), error = %e, "save failed");
        CommandError::SaveFailed(e)
    })?;

    Ok(success!("Game saved successfully!"))
}
