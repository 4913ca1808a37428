mod appearance;
mod command;
mod error;
mod logger;

use clap::Parser;
use data::appearance::storage::{self, Storage};
use data::appearance::{Handle, ThemeState, styles};
use data::{Config, Root, environment, tactile};

use self::command::{Cli, Command};
use self::error::Error;

pub fn main() -> Result<(), Error> {
    let command = Cli::parse().into_command();

    #[cfg(debug_assertions)]
    let is_debug = true;
    #[cfg(not(debug_assertions))]
    let is_debug = false;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error)),
    };

    logger::setup(is_debug, config.logs.level.into())?;
    log::info!("robot-friends ({}) has started", environment::VERSION);

    if let Some(error) = config_error {
        log::error!("failed to load config, using defaults: {error}");
    }

    match command {
        Command::Cards(args) => {
            let options = args.options(config.cards);

            for index in 0..args.count {
                println!("{index}: {}", tactile::combined(index, &options));
            }
        }
        Command::Preset(args) => {
            let layout = args.layout();

            for index in 0..args.count {
                println!("{index}: {}", tactile::preset(index, layout));
            }
        }
        Command::Tape { count } => {
            for index in 0..count {
                let tape = tactile::tape(index);
                println!("{index}: {tape} {{ {} }}", tape.placement());
            }
        }
        Command::Stylesheet => print!("{}", styles::stylesheet()),
        Command::Status | Command::Toggle | Command::Light | Command::Dark => {
            theme(&config, &command);
        }
    }

    Ok(())
}

fn theme(config: &Config, command: &Command) {
    let root = Root::default();
    let theme = Handle::new(ThemeState::new(
        &config.appearance,
        open_storage(),
        Box::new(appearance::System),
        root.clone(),
    ));
    theme.initialize();

    let result = match (command, command.mode()) {
        (Command::Toggle, _) => theme.toggle().map(|_| ()),
        (_, Some(mode)) => theme.set_mode(mode),
        _ => Ok(()),
    };

    if let Err(error) = result {
        log::error!("{error}");
    }

    println!("{} <html {}>", theme.mode(), root.render());
}

fn open_storage() -> Option<Box<dyn Storage>> {
    match storage::File::open_default() {
        Ok(file) => {
            log::debug!("preferences stored in {}", file.path().display());
            Some(Box::new(file))
        }
        Err(error) => {
            log::warn!("preferences unavailable, theme won't persist: {error}");
            None
        }
    }
}
