use palette::{FromColor, Okhsl, Srgb, Srgba, WithAlpha};

use super::{Mode, THEME_ATTRIBUTE};

pub type Color = Srgba;

/// Colors every view picks from for a given [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Styles {
    pub mode: Mode,
    /// Page background.
    pub background: Color,
    /// Cards, forms and other raised panels.
    pub surface: Color,
    /// Alternate section band.
    pub section: Color,
    pub footer: Color,
    /// Translucent navigation bar.
    pub navbar: Color,
    pub border: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    /// Emoticons, required-field markers and highlights.
    pub accent: Color,
    pub link_hover: Color,
    pub shadow: Color,
}

impl Styles {
    pub fn new(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self {
                mode,
                background: rgb(0xFF, 0xF9, 0xF0),
                surface: rgb(0xFF, 0xFF, 0xFF),
                section: rgb(0xFF, 0xF9, 0xF0),
                footer: rgb(0x2B, 0x3A, 0x67),
                navbar: rgba(255, 249, 240, 0.9),
                border: rgb(0xEB, 0xE5, 0xDC),
                heading: rgb(0x2B, 0x3A, 0x67),
                body: rgb(0x66, 0x66, 0x66),
                muted: rgb(0x80, 0x80, 0x80),
                accent: rgb(0xFF, 0x6B, 0x6B),
                link_hover: rgb(0x2B, 0x3A, 0x67),
                shadow: rgba(43, 58, 103, 0.08),
            },
            Mode::Dark => Self {
                mode,
                background: rgb(0x1E, 0x2A, 0x4A),
                surface: rgb(0x1E, 0x2A, 0x4A),
                section: rgb(0x15, 0x1D, 0x38),
                footer: rgb(0x0D, 0x12, 0x21),
                navbar: rgba(30, 42, 74, 0.9),
                border: rgba(61, 78, 122, 0.5),
                heading: rgb(0xFF, 0xFF, 0xFF),
                body: rgba(255, 255, 255, 0.7),
                muted: rgba(255, 255, 255, 0.5),
                accent: rgb(0xFF, 0xE6, 0x6D),
                link_hover: rgb(0xFF, 0xE6, 0x6D),
                shadow: rgba(0, 0, 0, 0.3),
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        is_dark(self.background)
    }

    fn entries(&self) -> [(&'static str, Color); 12] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("section", self.section),
            ("footer", self.footer),
            ("navbar", self.navbar),
            ("border", self.border),
            ("heading", self.heading),
            ("body", self.body),
            ("muted", self.muted),
            ("accent", self.accent),
            ("link-hover", self.link_hover),
            ("shadow", self.shadow),
        ]
    }
}

/// CSS custom properties for both modes, selected by the root's
/// `data-theme` attribute.
pub fn stylesheet() -> String {
    [Mode::Light, Mode::Dark]
        .into_iter()
        .map(|mode| {
            let properties = Styles::new(mode)
                .entries()
                .into_iter()
                .map(|(name, color)| format!("  --rf-{name}: {};\n", to_css(color)))
                .collect::<String>();

            format!(":root[{THEME_ATTRIBUTE}=\"{mode}\"] {{\n{properties}}}\n")
        })
        .collect()
}

pub fn to_css(color: Color) -> String {
    let [r, g, b] = [color.red, color.green, color.blue]
        .map(|channel| (channel * 255.0).round() as u8);

    if color.alpha >= 1.0 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("rgba({r}, {g}, {b}, {})", color.alpha)
    }
}

pub fn is_dark(color: Color) -> bool {
    Okhsl::from_color(color.color).lightness < 0.5
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    rgba(r, g, b, 1.0)
}

fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    Srgb::new(r, g, b).into_format::<f32>().with_alpha(alpha)
}

#[cfg(test)]
mod tests {
    use super::{Styles, stylesheet, to_css};
    use crate::appearance::Mode;

    #[test]
    fn sets_follow_the_mode() {
        let light = Styles::new(Mode::Light);
        let dark = Styles::new(Mode::Dark);

        assert!(!light.is_dark());
        assert!(dark.is_dark());
        assert_eq!(to_css(light.heading), "#2B3A67");
        assert_eq!(to_css(dark.accent), "#FFE66D");
        assert_eq!(to_css(dark.border), "rgba(61, 78, 122, 0.5)");
        assert_ne!(light, dark);
    }

    #[test]
    fn stylesheet_keys_off_root_attribute() {
        let css = stylesheet();

        assert!(css.contains(":root[data-theme=\"light\"] {"));
        assert!(css.contains(":root[data-theme=\"dark\"] {"));
        assert!(css.contains("  --rf-footer: #0D1221;"));
        assert!(css.contains("  --rf-shadow: rgba(43, 58, 103, 0.08);"));
    }

    #[test]
    fn stylesheet_has_one_block_per_mode() {
        let css = stylesheet();
        let lines = css.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2 * (12 + 2));
        assert_eq!(lines[0], ":root[data-theme=\"light\"] {");
        assert_eq!(lines[1], "  --rf-background: #FFF9F0;");
        assert_eq!(lines[13], "}");
        assert_eq!(lines[14], ":root[data-theme=\"dark\"] {");
        assert!(css.ends_with("}\n"));
    }
}
