use clap::{Args, Parser, Subcommand};
use data::Mode;
use data::tactile::{HandPlaced, Preset, Style};

const DEFAULT_COUNT: usize = 8;

#[derive(Debug, Parser)]
#[command(
    name = "robot-friends",
    about = "Theme and hand-placed layout tools for the Robot Friends site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// `status` when no command is given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current mode.
    Status,

    /// Switch between light and dark.
    Toggle,

    /// Select light mode.
    Light,

    /// Select dark mode.
    Dark,

    /// Hand-placed transforms for a card grid.
    Cards(CardsArgs),

    /// Hand-tuned transforms for a known layout.
    Preset(PresetArgs),

    /// Tape placements for taped cards.
    Tape {
        #[arg(default_value_t = DEFAULT_COUNT)]
        count: usize,
    },

    /// CSS custom properties for both modes.
    Stylesheet,
}

impl Command {
    /// The mode this command selects, if any.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Command::Light => Some(Mode::Light),
            Command::Dark => Some(Mode::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CardsArgs {
    #[arg(default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Rotation style (subtle, playful, dynamic); unknown names mean playful.
    pub rotation: Option<String>,

    /// Offset style (subtle, playful, dynamic); giving one enables offsets.
    /// Unknown names mean subtle.
    pub offset: Option<String>,
}

impl CardsArgs {
    /// Applies the arguments on top of the configured defaults.
    pub fn options(&self, mut options: HandPlaced) -> HandPlaced {
        if let Some(name) = &self.rotation {
            options.rotation_style =
                name.parse().unwrap_or(Style::ROTATION_DEFAULT);
        }

        if let Some(name) = &self.offset {
            options.include_offset = true;
            options.offset_style = name.parse().unwrap_or(Style::OFFSET_DEFAULT);
        }

        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct PresetArgs {
    /// twoCol, threeCol, fourCol or scattered; unknown names mean fourCol.
    pub layout: Option<String>,

    #[arg(default_value_t = DEFAULT_COUNT)]
    pub count: usize,
}

impl PresetArgs {
    pub fn layout(&self) -> Preset {
        self.layout
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}
