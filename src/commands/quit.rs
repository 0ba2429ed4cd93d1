use crate::commands::{CommandOutput, CommandResult};
use crate::input::parser::Intent;
use crate::state::session::Session;
use crate::success;

pub fn quit(sess: &mut Session, _intent: Intent) -> CommandResult<CommandOutput> {
    sess.state.finish(false);
    tracing::info!(turns = sess.turns, elapsed = ?sess.session_started.elapsed(), "player quit");

    Ok(success!("Thanks for playing!"))
}
