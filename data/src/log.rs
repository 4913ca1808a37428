use std::path::PathBuf;
use std::{fs, io};

use crate::environment;

const FILE_NAME: &str = "robot-friends.log";

/// Opens the log file in the data dir, truncating the previous run's log.
pub fn file() -> Result<fs::File, Error> {
    let path = path()?;

    Ok(fs::OpenOptions::new()
        .write(true)
        .create(true)
        .append(false)
        .truncate(true)
        .open(path)?)
}

fn path() -> Result<PathBuf, Error> {
    let parent = environment::data_dir().ok_or(Error::NoDataDir)?;

    if !parent.exists() {
        fs::create_dir_all(&parent)?;
    }

    Ok(parent.join(FILE_NAME))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no data directory available")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SetLog(#[from] log::SetLoggerError),
}
