use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw a line on top of every level
    #[serde(default)]
    pub level_lines: bool,
    ///Print the id of every item inside it
    #[serde(default)]
    pub item_labels: bool,
    ///Sort the items of every level by descending height before drawing
    #[serde(default)]
    pub normalize: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            level_lines: true,
            item_labels: false,
            normalize: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub strip_fill: Color,
    pub item_fill: Color,
    pub level_line_color: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        strip_fill: Color(0xFF, 0xFF, 0xFF),
        item_fill: Color(0xCC, 0x24, 0x1D),
        level_line_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        strip_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x3A, 0x3A, 0x3A),
        level_line_color: Color(0x00, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("invalid color {s}: {e}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}
