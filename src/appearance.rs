use data::appearance::SystemPreference;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Dark,
    Light,
    Unspecified,
}

impl From<dark_light::Mode> for Mode {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => Mode::Dark,
            dark_light::Mode::Light => Mode::Light,
            dark_light::Mode::Unspecified => Mode::Unspecified,
        }
    }
}

/// Color scheme reported by the desktop environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;

impl SystemPreference for System {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect().map(Mode::from) {
            Ok(Mode::Dark) => Some(true),
            // We map `Unspecified` to `Light`.
            // This is because Gnome never specifies `Light` and only sends `Unspecified`.
            Ok(Mode::Light | Mode::Unspecified) => Some(false),
            Err(error) => {
                log::debug!("system color scheme unavailable: {error:?}");
                None
            }
        }
    }
}
