use std::env;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONFIG_FILE_NAME: &str = "config.toml";
const DIR_NAME: &str = "robot-friends";

pub fn config_dir() -> Option<PathBuf> {
    portable_dir()
        .or_else(|| dirs_next::config_dir().map(|dir| dir.join(DIR_NAME)))
}

pub fn data_dir() -> Option<PathBuf> {
    portable_dir()
        .or_else(|| dirs_next::data_dir().map(|dir| dir.join(DIR_NAME)))
}

/// Checks if a config file exists in the same directory as the executable.
/// If so, it'll use that directory for both config & data dirs.
fn portable_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?;

    dir.join(CONFIG_FILE_NAME)
        .is_file()
        .then(|| dir.to_path_buf())
}
