use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub use self::appearance::Appearance;
pub use self::logs::Logs;
use crate::environment;
use crate::tactile::HandPlaced;

pub mod appearance;
pub mod logs;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub logs: Logs,
    #[serde(default)]
    pub cards: HandPlaced,
}

impl Config {
    pub fn config_dir() -> Result<PathBuf, Error> {
        let dir = environment::config_dir().ok_or(Error::NoConfigDir)?;

        if !dir.exists() {
            std::fs::create_dir_all(dir.as_path())?;
        }

        Ok(dir)
    }

    fn path() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join(environment::CONFIG_FILE_NAME))
    }

    /// Loads `config.toml`, falling back to defaults when it doesn't exist.
    pub fn load() -> Result<Self, Error> {
        let path = Self::path()?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }
}

#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("config could not be read: {0}")]
    Io(String),
    #[error("config could not be parsed: {0}")]
    Parse(String),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::appearance::Mode;
    use crate::config::logs::LevelFilter;
    use crate::tactile::{HandPlaced, Style};

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").expect("empty config");

        assert!(config.appearance.follow_system);
        assert_eq!(config.appearance.fallback, Mode::Light);
        assert_eq!(config.logs.level, LevelFilter::Info);
        assert_eq!(config.cards, HandPlaced::default());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            [appearance]
            follow_system = false
            fallback = "dark"

            [logs]
            level = "trace"

            [cards]
            rotation_style = "dynamic"
            include_offset = true
            "#,
        )
        .expect("valid config");

        assert!(!config.appearance.follow_system);
        assert_eq!(config.appearance.fallback, Mode::Dark);
        assert_eq!(config.logs.level, LevelFilter::Trace);
        assert_eq!(
            config.cards,
            HandPlaced {
                rotation_style: Style::Dynamic,
                include_offset: true,
                offset_style: Style::Subtle,
            }
        );
    }

    #[test]
    fn unknown_fallback_is_an_error() {
        assert!(Config::parse("[appearance]\nfallback = \"sepia\"").is_err());
    }
}
