pub mod banner;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod models;
pub mod renderer;
pub mod scenario;
pub mod services;
pub mod state;

// Convenient re-exports (so call sites can do `dungeon_escape::Session`, etc.)
pub use commands::process_command;
pub use models::state::GameState;
pub use state::session::Session;
