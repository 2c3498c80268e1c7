use std::fmt;
use std::str::FromStr;

/// A concrete RGBA color value handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hex encoding, `#rrggbb` when opaque and `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Why a color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidLength,
    InvalidDigit,
    UnknownName,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ColorParseError::Empty => "empty color string",
            ColorParseError::InvalidLength => "invalid hex color length",
            ColorParseError::InvalidDigit => "invalid hex digit",
            ColorParseError::UnknownName => "unknown color name",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a theme color string.
///
/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or one of the named colors
/// in [`NAMED_COLORS`] (case-insensitive). Surrounding whitespace is ignored.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    match input.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named_color(input).ok_or(ColorParseError::UnknownName),
    }
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit);
    }

    let nibble = |i: usize| -> Result<u8, ColorParseError> {
        u8::from_str_radix(&hex[i..=i], 16)
            .map(|v| v * 0x11)
            .map_err(|_| ColorParseError::InvalidDigit)
    };
    let byte = |i: usize| -> Result<u8, ColorParseError> {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::InvalidDigit)
    };

    match hex.len() {
        3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Ok(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(ColorParseError::InvalidLength),
    }
}

/// Named colors accepted in theme files.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("lime", Color::rgb(0x00, 0xff, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xff)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
    ("cyan", Color::rgb(0x00, 0xff, 0xff)),
    ("magenta", Color::rgb(0xff, 0x00, 0xff)),
    ("orange", Color::rgb(0xff, 0xa5, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("pink", Color::rgb(0xff, 0xc0, 0xcb)),
    ("brown", Color::rgb(0xa5, 0x2a, 0x2a)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("darkgray", Color::rgb(0xa9, 0xa9, 0xa9)),
    ("darkgrey", Color::rgb(0xa9, 0xa9, 0xa9)),
    ("lightgray", Color::rgb(0xd3, 0xd3, 0xd3)),
    ("lightgrey", Color::rgb(0xd3, 0xd3, 0xd3)),
    ("transparent", Color::rgba(0x00, 0x00, 0x00, 0x00)),
];

fn named_color(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_color("#336699"), Ok(Color::rgb(51, 102, 153)));
        assert_eq!(parse_color("#33669980"), Ok(Color::rgba(51, 102, 153, 128)));
        assert_eq!(parse_color("  #FFFFFF "), Ok(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#369"), Ok(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(parse_color("#0008"), Ok(Color::rgba(0, 0, 0, 0x88)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("Navy"), Ok(Color::rgb(0, 0, 0x80)));
        assert_eq!(parse_color("transparent"), Ok(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidLength));
        assert_eq!(parse_color("#zzzzzz"), Err(ColorParseError::InvalidDigit));
        assert_eq!(parse_color("#ééé"), Err(ColorParseError::InvalidDigit));
        assert_eq!(parse_color("336699"), Err(ColorParseError::UnknownName));
        assert_eq!(parse_color("chartreuse-ish"), Err(ColorParseError::UnknownName));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(51, 102, 153).to_hex(), "#336699");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
