use serde::{Deserialize, Serialize};

pub use self::styles::Styles;
pub use self::theme::{Handle, SystemPreference, ThemeState};

pub mod storage;
pub mod styles;
pub mod theme;

/// Key the selected mode is persisted under.
pub const STORAGE_KEY: &str = "rf-theme";
/// Root attribute stylesheets select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    use super::Mode;

    #[test]
    fn textual_form() {
        assert_eq!(Mode::Light.to_string(), "light");
        assert_eq!(Mode::Dark.as_ref(), "dark");
        assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
        assert!("Dark".parse::<Mode>().is_err());
        assert!("sepia".parse::<Mode>().is_err());
    }

    #[test]
    fn serde_tokens() {
        assert_tokens(
            &Mode::Dark,
            &[Token::UnitVariant {
                name: "Mode",
                variant: "dark",
            }],
        );
        assert_de_tokens_error::<Mode>(
            &[Token::UnitVariant {
                name: "Mode",
                variant: "neon",
            }],
            "unknown variant `neon`, expected `light` or `dark`",
        );
    }

    #[test]
    fn toggle_is_an_involution() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
        assert!(Mode::Dark.is_dark());
        assert!(!Mode::Light.is_dark());
    }
}
