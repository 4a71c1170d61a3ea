use crate::constants::{SETTINGS_DIR, SETTINGS_FILE};
use crate::models::Durations;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// User settings read from `~/.focus-flow/settings.yaml`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub durations: Durations,
}

impl Settings {
    /// Default location of the settings file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SETTINGS_DIR)
            .join(SETTINGS_FILE)
    }

    /// Load settings from `path`. A missing file yields the defaults;
    /// out-of-range durations are a parse error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    /// Load from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "durations:\n  focus: 50\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.durations, Durations::new(50, 5, 15).unwrap());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "durations:\n  short_break: 0\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Short Break"));
    }

    #[test]
    fn test_garbage_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "durations: [1, 2").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "durations:\n  focus: 45\n  short_break: 10\n  long_break: 30\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.durations, Durations::new(45, 10, 30).unwrap());
    }

    #[test]
    fn test_overflowing_duration_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "durations:\n  focus: 80000000\n").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
