use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// No exit in the requested direction
    #[error("You can't go {direction}. {}", available_exits(.available))]
    InvalidDirection {
        direction: String,
        available: Vec<String>,
    },

    /// Target room is locked and the player lacks the key
    #[error("The door to {room} is locked.{}", unlock_hint(.unlock_item))]
    Locked {
        room: String,
        unlock_item: Option<String>,
    },

    /// Item is not lying in the current room
    #[error("{}", missing_item(.available))]
    ItemNotFound { item: String, available: Vec<String> },

    /// Item is either not carried or cannot be used. Both cases share one message.
    #[error("You don't have that item or it can't be used.")]
    ItemNotUsable(String),

    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("The game is over.")]
    GameOver,

    #[error("invalid data: {0}")]
    InvalidData(String),
}

fn available_exits(available: &[String]) -> String {
    if available.is_empty() {
        "There are no exits here.".to_string()
    } else {
        format!("Available directions: {}", available.join(", "))
    }
}

fn unlock_hint(unlock_item: &Option<String>) -> String {
    match unlock_item {
        Some(item) => format!(" You need a {item}."),
        None => String::new(),
    }
}

fn missing_item(available: &[String]) -> String {
    if available.is_empty() {
        "There are no items here.".to_string()
    } else {
        format!("That item is not here. Available items: {}", available.join(", "))
    }
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid environment: {0}")]
    Env(#[source] ConfigErrorKind),

    #[error("scenario: {0}")]
    Scenario(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
