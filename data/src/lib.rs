pub use self::appearance::Mode;
pub use self::config::Config;
pub use self::document::Root;

pub mod appearance;
pub mod config;
pub mod document;
pub mod environment;
pub mod log;
pub mod tactile;
