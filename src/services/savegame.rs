//! Save and restore of the complete game state as a JSON document.
//!
//! Loading never touches the live state: a snapshot is parsed and validated
//! into a fresh [`GameState`] which the caller swaps in.

use crate::models::state::GameState;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Save file '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("invalid save file: {0}")]
    Invalid(String),
}

/// Writes `state` to `path` as pretty-printed JSON.
///
/// The document is written next to the target first and then renamed over
/// it, so an existing save survives a failed write.
pub fn save(state: &GameState, path: &Path) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(state)?;

    let tmp = tmp_path(path);
    let written = (|| -> std::io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(json.as_bytes())?;
        f.write_all(b"\n")?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), bytes = json.len(), "game saved");
    Ok(())
}

/// Reads and validates a snapshot from `path`.
pub fn load(path: &Path) -> Result<GameState, SaveError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SaveError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let state = parse(&data)?;
    tracing::info!(path = %path.display(), room = %state.player.current_room, "game loaded");
    Ok(state)
}

/// Parses and validates a snapshot document.
pub fn parse(data: &str) -> Result<GameState, SaveError> {
    let state: GameState = serde_json::from_str(data)?;
    state
        .validate()
        .map_err(|e| SaveError::Invalid(e.to_string()))?;
    Ok(state)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_SAVE_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::default_scenario;
    use serde_json::json;

    #[test]
    fn document_has_expected_top_level_shape() {
        let gs = default_scenario().unwrap();
        let v = serde_json::to_value(&gs).unwrap();
        assert_eq!(v["player"]["current_room"], "Prison Cell");
        assert_eq!(v["player"]["health"], 100);
        assert_eq!(v["player"]["inventory"], json!([]));
        assert_eq!(v["game_over"], false);
        assert_eq!(v["won"], false);
        assert_eq!(v["rooms"]["Armory"]["unlock_item"], "Rusty Key");
        assert_eq!(v["rooms"]["Corridor"]["unlock_item"], serde_json::Value::Null);
    }

    #[test]
    fn missing_field_is_rejected() {
        let gs = default_scenario().unwrap();
        let mut v = serde_json::to_value(&gs).unwrap();
        v["rooms"]["Armory"].as_object_mut().unwrap().remove("unlock_item");
        assert!(matches!(parse(&v.to_string()), Err(SaveError::Json(_))));

        let mut v = serde_json::to_value(&gs).unwrap();
        v.as_object_mut().unwrap().remove("won");
        assert!(matches!(parse(&v.to_string()), Err(SaveError::Json(_))));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let gs = default_scenario().unwrap();
        let mut v = serde_json::to_value(&gs).unwrap();
        v["player"]["health"] = json!("lots");
        assert!(matches!(parse(&v.to_string()), Err(SaveError::Json(_))));
    }

    #[test]
    fn aliased_exits_are_rejected() {
        let gs = default_scenario().unwrap();
        let mut v = serde_json::to_value(&gs).unwrap();
        v["rooms"]["Corridor"]["connections"]["n"] = json!("Guard Post");
        let err = parse(&v.to_string()).unwrap_err();
        assert!(matches!(err, SaveError::Json(_)));
        assert!(err.to_string().contains("duplicate exit"));
    }

    #[test]
    fn dangling_current_room_is_invalid() {
        let gs = default_scenario().unwrap();
        let mut v = serde_json::to_value(&gs).unwrap();
        v["player"]["current_room"] = json!("Kitchen");
        assert!(matches!(parse(&v.to_string()), Err(SaveError::Invalid(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, SaveError::NotFound(_)));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.json");
        save(&default_scenario().unwrap(), &path).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("savegame.json.tmp").exists());
    }
}
