pub mod inventory;
pub mod navigator;
pub mod room;
pub mod savegame;

pub use savegame::SaveError;
