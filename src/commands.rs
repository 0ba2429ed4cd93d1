use crate::error::DomainError;
use crate::input::parser::{Intent, Verb, parse_command};
use crate::services::SaveError;
use crate::state::session::Session;
use thiserror::Error;

mod go;
mod inventory;
mod load;
mod look;
mod quit;
mod save;
mod take;
mod use_item;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("I don't understand that command. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// Verb needs an argument; carries the prompt shown to the player
    #[error("{0}")]
    MissingArgument(String),

    #[error(transparent)]
    Domain(DomainError),

    #[error("Failed to save game: {0}")]
    SaveFailed(#[source] SaveError),

    #[error("Failed to load game: {0}")]
    LoadFailed(#[source] SaveError),

    /// The game state itself is inconsistent
    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for CommandError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RoomNotFound(_) | DomainError::InvalidData(_) => {
                CommandError::Internal(e.to_string())
            }
            e => CommandError::Domain(e),
        }
    }
}

#[derive(Debug)]
pub struct CommandOutput {
    pub message: String,
    pub is_error: bool,
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        $crate::commands::CommandOutput { is_error: false, message: $msg.to_string() }
    };
}

#[macro_export]
macro_rules! failure {
    ($msg:expr) => {
        $crate::commands::CommandOutput { is_error: true, message: $msg.to_string() }
    };
}

/// Parses one line of input and runs it against the session.
///
/// Every failure comes back as an error for the caller to show; none of them
/// leave the state half-changed.
pub fn process_command(raw: &str, sess: &mut Session) -> CommandResult<CommandOutput> {
    let intent = parse_command(raw);
    tracing::debug!(verb = intent.verb.as_str(), arg = ?intent.argument, "command");

    if sess.is_over() {
        return Err(DomainError::GameOver.into());
    }
    if intent.is_blank() {
        return Ok(failure!("Please enter a command."));
    }

    sess.turns += 1;

    match intent.verb {
        Verb::Go => go::go(sess, intent),
        Verb::Take => take::take(sess, intent),
        Verb::Use => use_item::use_item(sess, intent),
        Verb::Look => look::look(sess, intent),
        Verb::Inventory => inventory::inventory(sess, intent),
        Verb::Help => Ok(success!(help_text())),
        Verb::Save => save::save(sess, intent),
        Verb::Load => load::load(sess, intent),
        Verb::Quit => quit::quit(sess, intent),
        Verb::Unknown(word) => Err(CommandError::UnknownCommand(word)),
    }
}

/// Pulls the argument out of an intent or fails with `prompt`.
fn require_argument(intent: &Intent, prompt: impl Into<String>) -> CommandResult<String> {
    intent
        .argument
        .clone()
        .ok_or_else(|| CommandError::MissingArgument(prompt.into()))
}

pub fn help_text() -> String {
    r#"Available Commands:
  go <direction>     - Move in a direction (north, south, east, west)
  take <item>        - Pick up an item
  use <item>         - Use an item from your inventory
  look               - Look around the current room
  inventory (inv)    - Show your inventory
  save               - Save the game
  load               - Load a saved game
  help               - Show this help message
  quit               - Exit the game"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Theme;
    use crate::scenario::default_scenario;

    fn session() -> Session {
        Session::new(default_scenario().unwrap(), "unused.json", Theme::plain())
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut sess = session();
        let err = process_command("dance", &mut sess).err().unwrap();
        assert!(matches!(err, CommandError::UnknownCommand(ref w) if w == "dance"));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn missing_arguments_prompt_without_changes() {
        let mut sess = session();
        let before = sess.state.clone();
        for (cmd, prompt) in [("go", "Go where?"), ("take", "Take what?"), ("use", "Use what?")] {
            let err = process_command(cmd, &mut sess).err().unwrap();
            assert!(matches!(err, CommandError::MissingArgument(_)));
            assert!(err.to_string().starts_with(prompt), "{cmd}: {err}");
        }
        assert_eq!(sess.state, before);
    }

    #[test]
    fn blank_line_asks_for_a_command() {
        let mut sess = session();
        let out = process_command("   ", &mut sess).unwrap();
        assert!(out.is_error);
        assert_eq!(out.message, "Please enter a command.");
        assert_eq!(sess.turns, 0);
    }

    #[test]
    fn help_lists_commands() {
        let mut sess = session();
        let out = process_command("HELP", &mut sess).unwrap();
        assert!(out.message.contains("go <direction>"));
        assert!(out.message.contains("quit"));
    }

    #[test]
    fn nothing_is_accepted_after_game_over() {
        let mut sess = session();
        process_command("quit", &mut sess).unwrap();
        assert!(sess.is_over());
        assert!(!sess.state.won);

        let before = sess.state.clone();
        let err = process_command("go north", &mut sess).err().unwrap();
        assert!(matches!(err, CommandError::Domain(DomainError::GameOver)));
        assert_eq!(sess.state, before);
    }
}
