use serde::Deserialize;

use crate::appearance::Mode;

#[derive(Debug, Clone, Deserialize)]
pub struct Appearance {
    /// Consult the system color scheme when nothing has been stored.
    #[serde(default = "default_follow_system")]
    pub follow_system: bool,
    /// Used when the system can't tell, or isn't consulted.
    #[serde(default)]
    pub fallback: Mode,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            follow_system: default_follow_system(),
            fallback: Mode::default(),
        }
    }
}

fn default_follow_system() -> bool {
    true
}
