//! Deterministic "hand-placed" variation for card grids.
//!
//! Rotations and offsets come from fixed tables indexed by a card's
//! position, so a grid looks loosely arranged while rendering identically
//! every time.

use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Professional sections.
    Subtle,
    /// Testimonials, methodology.
    Playful,
    /// Hero elements, featured content.
    Dynamic,
}

impl Style {
    pub const ROTATION_DEFAULT: Style = Style::Playful;
    pub const OFFSET_DEFAULT: Style = Style::Subtle;

    fn rotations(self) -> &'static [f32] {
        match self {
            Style::Subtle => &[-1.5, -0.5, 0.5, 1.0, -1.0, 1.5],
            Style::Playful => &[-3.0, -1.5, 2.0, -2.5, 1.0, 3.0, -2.0, 2.5],
            Style::Dynamic => &[-4.0, -2.0, 3.0, -3.5, 2.5, 4.0, -1.5, 3.5],
        }
    }

    fn offsets(self) -> &'static [f32] {
        match self {
            Style::Subtle => &[0.0, 2.0, -2.0, 1.0, -1.0],
            Style::Playful => &[0.0, 4.0, -3.0, 2.0, -4.0, 3.0],
            Style::Dynamic => &[0.0, 6.0, -5.0, 3.0, -6.0, 4.0, -2.0],
        }
    }

    fn parse_or(name: &str, default: Style) -> Style {
        name.parse().unwrap_or(default)
    }
}

/// Rotation in degrees for the card at `index`.
pub fn rotation(index: usize, style: Style) -> f32 {
    let rotations = style.rotations();
    // 7 and 3 keep neighbouring cards off neighbouring entries
    rotations[stride(index, 7, 3, rotations.len())]
}

/// `(index * multiplier + offset) % len`, reduced first so it can't overflow.
fn stride(index: usize, multiplier: usize, offset: usize, len: usize) -> usize {
    ((index % len) * multiplier + offset) % len
}

/// Like [`rotation`], with unknown style names treated as playful.
pub fn rotation_named(index: usize, style: &str) -> f32 {
    rotation(index, Style::parse_or(style, Style::ROTATION_DEFAULT))
}

/// Vertical offset in pixels for the card at `index`.
pub fn offset(index: usize, style: Style) -> f32 {
    let offsets = style.offsets();
    offsets[stride(index, 5, 2, offsets.len())]
}

/// Like [`offset`], with unknown style names treated as subtle.
pub fn offset_named(index: usize, style: &str) -> f32 {
    offset(index, Style::parse_or(style, Style::OFFSET_DEFAULT))
}

/// How [`combined`] varies a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPlaced {
    pub rotation_style: Style,
    pub include_offset: bool,
    pub offset_style: Style,
}

impl Default for HandPlaced {
    fn default() -> Self {
        Self {
            rotation_style: Style::ROTATION_DEFAULT,
            include_offset: false,
            offset_style: Style::OFFSET_DEFAULT,
        }
    }
}

impl<'de> Deserialize<'de> for HandPlaced {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            rotation_style: Option<String>,
            #[serde(default)]
            include_offset: bool,
            offset_style: Option<String>,
        }

        let Inner {
            rotation_style,
            include_offset,
            offset_style,
        } = Inner::deserialize(deserializer)?;

        Ok(HandPlaced {
            rotation_style: rotation_style.map_or(Style::ROTATION_DEFAULT, |name| {
                Style::parse_or(&name, Style::ROTATION_DEFAULT)
            }),
            include_offset,
            offset_style: offset_style.map_or(Style::OFFSET_DEFAULT, |name| {
                Style::parse_or(&name, Style::OFFSET_DEFAULT)
            }),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    /// Degrees.
    pub rotation: f32,
    /// Pixels along the y axis.
    pub offset: f32,
}

impl fmt::Display for Variation {
    /// Renders as a CSS transform.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate({}deg)", self.rotation)?;

        if self.offset != 0.0 {
            write!(f, " translateY({}px)", self.offset)?;
        }

        Ok(())
    }
}

/// Rotation and, if enabled, offset for the card at `index`.
pub fn combined(index: usize, options: &HandPlaced) -> Variation {
    let rotation = rotation(index, options.rotation_style);
    let offset = if options.include_offset {
        offset(index, options.offset_style)
    } else {
        0.0
    };

    Variation { rotation, offset }
}

/// Hand-tuned variation tables for known grid shapes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(serialize_all = "camelCase")]
pub enum Preset {
    TwoCol,
    ThreeCol,
    #[default]
    FourCol,
    /// Collage layouts.
    Scattered,
}

impl Preset {
    pub fn variations(self) -> &'static [Variation] {
        match self {
            Preset::TwoCol => TWO_COL,
            Preset::ThreeCol => THREE_COL,
            Preset::FourCol => FOUR_COL,
            Preset::Scattered => SCATTERED,
        }
    }
}

const fn v(rotation: f32, offset: f32) -> Variation {
    Variation { rotation, offset }
}

const TWO_COL: &[Variation] = &[v(-2.0, 0.0), v(1.5, 2.0)];
const THREE_COL: &[Variation] = &[v(-2.5, 0.0), v(1.0, -2.0), v(2.0, 1.0)];
const FOUR_COL: &[Variation] =
    &[v(-2.0, 0.0), v(2.5, -3.0), v(-1.5, 2.0), v(3.0, -1.0)];
const SCATTERED: &[Variation] = &[
    v(-3.5, 4.0),
    v(2.0, -2.0),
    v(-1.0, 6.0),
    v(4.0, -4.0),
    v(-2.5, 1.0),
    v(1.5, -3.0),
];

pub fn preset(index: usize, preset: Preset) -> Variation {
    let variations = preset.variations();
    variations[index % variations.len()]
}

/// Like [`preset`], with unknown layout names treated as four columns.
pub fn preset_named(index: usize, name: &str) -> Variation {
    preset(index, name.parse().unwrap_or_default())
}

/// Where the strip of tape sits on a taped card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::VariantArray,
)]
#[strum(serialize_all = "camelCase")]
pub enum Tape {
    TopCenter,
    TopLeft,
    TopRight,
    CornerTopRight,
    CornerTopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left(&'static str),
    Right(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: &'static str,
    pub anchor: Anchor,
    pub transform: &'static str,
}

impl Tape {
    pub fn placement(self) -> Placement {
        let (top, anchor, transform) = match self {
            Tape::TopCenter => (
                "-12px",
                Anchor::Left("50%"),
                "translateX(-50%) rotate(-3deg)",
            ),
            Tape::TopLeft => ("-8px", Anchor::Left("20px"), "rotate(-15deg)"),
            Tape::TopRight => ("-8px", Anchor::Right("20px"), "rotate(12deg)"),
            Tape::CornerTopRight => {
                ("-6px", Anchor::Right("15px"), "rotate(35deg)")
            }
            Tape::CornerTopLeft => {
                ("-6px", Anchor::Left("15px"), "rotate(-35deg)")
            }
        };

        Placement {
            top,
            anchor,
            transform,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (side, value) = match self.anchor {
            Anchor::Left(value) => ("left", value),
            Anchor::Right(value) => ("right", value),
        };

        write!(
            f,
            "top: {}; {side}: {value}; transform: {};",
            self.top, self.transform
        )
    }
}

/// Tape placement for the card at `index`.
pub fn tape(index: usize) -> Tape {
    use strum::VariantArray;

    Tape::VARIANTS[stride(index, 3, 1, Tape::VARIANTS.len())]
}
