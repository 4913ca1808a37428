use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::environment;

/// Key-value store backing persisted preferences.
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

#[derive(Debug, Clone, Default)]
pub struct Memory(BTreeMap<String, String>);

impl Storage for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored as a flat JSON object on disk.
///
/// The file is read once on [`File::open`]; every [`Storage::set`] rewrites it.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl File {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                BTreeMap::new()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, entries })
    }

    /// Opens `preferences.json` in the data dir.
    pub fn open_default() -> Result<Self, Error> {
        Self::open(path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for File {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());

        let bytes = serde_json::to_vec_pretty(&entries)?;
        std::fs::write(&self.path, bytes)?;

        self.entries = entries;

        Ok(())
    }
}

fn path() -> Result<PathBuf, Error> {
    let parent = environment::data_dir().ok_or(Error::NoDataDir)?;

    Ok(parent.join("preferences.json"))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no data directory available")]
    NoDataDir,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{File, Memory, Storage};

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("robot-friends-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn memory_overwrites() {
        let mut storage = Memory::default();

        assert_eq!(storage.get("rf-theme").unwrap(), None);

        storage.set("rf-theme", "dark").unwrap();
        storage.set("rf-theme", "light").unwrap();

        assert_eq!(storage.get("rf-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_survives_reopen() {
        let dir = scratch("reopen");
        let path = dir.join("preferences.json");

        let mut storage = File::open(&path).expect("missing file is empty");
        assert_eq!(storage.get("rf-theme").unwrap(), None);

        storage.set("rf-theme", "dark").expect("write preferences");

        let reopened = File::open(&path).expect("reopen preferences");
        assert_eq!(reopened.get("rf-theme").unwrap().as_deref(), Some("dark"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn file_rejects_garbage() {
        let dir = scratch("garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, b"not json").unwrap();

        assert!(File::open(&path).is_err());

        let _ = std::fs::remove_dir_all(dir);
    }
}
