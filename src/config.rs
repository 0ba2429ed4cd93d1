use crate::error::{ConfigErrorKind, InfraError};
use crate::services::savegame::DEFAULT_SAVE_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub save_path: PathBuf, // e.g. "savegame.json"
    pub color: bool,        // ANSI colours in room views
    pub prompt: String,     // e.g. "> "
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            color: true,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })?;
        Ok(cfg)
    }

    /// Defaults overridden by the environment (and `.env`, when present).
    pub fn from_env() -> Result<Self, InfraError> {
        Self::default().apply_env()
    }

    /// Overrides `self` with the process environment (and `.env`, when present).
    pub fn apply_env(self) -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        self.with_env(|k| std::env::var(k).ok())
    }

    /// Applies `DUNGEON_*` variables found through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        if let Some(path) = lookup("DUNGEON_SAVE_PATH").filter(|p| !p.trim().is_empty()) {
            self.save_path = PathBuf::from(path);
        }
        if let Some(v) = lookup("DUNGEON_COLOR") {
            self.color = parse_bool(&v).ok_or_else(|| {
                InfraError::Env(ConfigErrorKind::InvalidEnv("DUNGEON_COLOR".into(), v.clone()))
            })?;
        }
        Ok(self)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.save_path, PathBuf::from("savegame.json"));
        assert!(cfg.color);
        assert_eq!(cfg.prompt, "> ");
    }

    #[test]
    fn env_overrides() {
        let cfg = Config::default()
            .with_env(env(&[("DUNGEON_SAVE_PATH", "/tmp/slot1.json"), ("DUNGEON_COLOR", "off")]))
            .unwrap();
        assert_eq!(cfg.save_path, PathBuf::from("/tmp/slot1.json"));
        assert!(!cfg.color);
    }

    #[test]
    fn bad_env_value_is_an_error() {
        let err = Config::default()
            .with_env(env(&[("DUNGEON_COLOR", "purple")]))
            .unwrap_err();
        assert!(err.to_string().contains("DUNGEON_COLOR"));
    }

    #[test]
    fn toml_file_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeon.toml");
        std::fs::write(&path, "save_path = \"slot2.json\"\ncolor = false\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.save_path, PathBuf::from("slot2.json"));
        assert!(!cfg.color);
        assert_eq!(cfg.prompt, "> ");
    }

    #[test]
    fn broken_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "color = maybe").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, InfraError::Config { source: ConfigErrorKind::Parse(_), .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
