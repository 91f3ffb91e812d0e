/// Color record and the conversions between its decimal and hex forms.
use std::fmt;
use std::str::FromStr;

use rand::RngExt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// A single RGB color. Channels are bounded to 0..=255 by their type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Color shown on startup.
    pub const DEFAULT: Color = Color::new(221, 222, 238);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// The six uppercase digits shown in the hex field, without `#`.
    pub fn hex_code(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// `rgb(r, g, b)`.
    pub fn to_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn with_channel(self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => Self { red: value, ..self },
            Channel::Green => Self {
                green: value,
                ..self
            },
            Channel::Blue => Self { blue: value, ..self },
        }
    }

    /// Perceived brightness, used to pick readable text on top of the color.
    pub fn is_light(&self) -> bool {
        let luma =
            299 * u32::from(self.red) + 587 * u32::from(self.green) + 114 * u32::from(self.blue);
        luma >= 128_000
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Validate a bare six-digit hex code (no `#`), either case.
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Decode a bare six-digit hex code into its channels.
pub fn hex_to_color(hex: &str) -> Result<Color, ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lenient parse for user-supplied values: trims and accepts an optional `#`.
pub fn parse_color(value: &str) -> Result<Color, ColorError> {
    let trimmed = value.trim();
    hex_to_color(trimmed.strip_prefix('#').unwrap_or(trimmed))
}

/// Generate a color with every channel drawn uniformly from 0..=255.
pub fn random_color() -> Color {
    let mut rng = rand::rng();
    random_color_with(&mut rng)
}

pub fn random_color_with<R: RngExt>(rng: &mut R) -> Color {
    Color::new(
        rng.random_range(0..=u8::MAX),
        rng.random_range(0..=u8::MAX),
        rng.random_range(0..=u8::MAX),
    )
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(Color::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(Color::DEFAULT.to_hex(), "#dddeee");
    }

    #[test]
    fn hex_code_is_uppercase_without_prefix() {
        assert_eq!(Color::new(171, 205, 239).hex_code(), "ABCDEF");
        assert_eq!(Color::new(1, 2, 3).hex_code(), "010203");
    }

    #[test]
    fn rgb_string_format() {
        assert_eq!(Color::new(221, 222, 238).to_rgb(), "rgb(221, 222, 238)");
        assert_eq!(Color::new(0, 0, 0).to_rgb(), "rgb(0, 0, 0)");
    }

    #[test]
    fn valid_hex_requires_exactly_six_digits() {
        assert!(is_valid_hex("ABCDEF"));
        assert!(is_valid_hex("abcdef"));
        assert!(is_valid_hex("09aF3c"));
        assert!(!is_valid_hex("ABCDE"));
        assert!(!is_valid_hex("ABCDEF0"));
        assert!(!is_valid_hex("#ABCDE"));
        assert!(!is_valid_hex("GGGGGG"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn valid_hex_rejects_multibyte_input() {
        // six bytes, but not six ascii digits
        assert!(!is_valid_hex("ééé"));
    }

    #[test]
    fn hex_to_color_splits_channels() {
        assert_eq!(hex_to_color("FF8000"), Ok(Color::new(255, 128, 0)));
        assert_eq!(hex_to_color("dddeee"), Ok(Color::DEFAULT));
    }

    #[test]
    fn hex_to_color_rejects_invalid() {
        assert_eq!(
            hex_to_color("12345"),
            Err(ColorError::InvalidHex("12345".to_string()))
        );
        assert!(hex_to_color("#123456").is_err());
    }

    #[test]
    fn parse_color_is_lenient() {
        assert_eq!(parse_color("  #102030 "), Ok(Color::new(16, 32, 48)));
        assert_eq!("102030".parse::<Color>(), Ok(Color::new(16, 32, 48)));
        assert!(parse_color("##102030").is_err());
    }

    #[test]
    fn hex_code_parses_back() {
        let color = Color::new(7, 128, 254);
        assert_eq!(hex_to_color(&color.hex_code()), Ok(color));
    }

    #[test]
    fn with_channel_replaces_one_channel() {
        let color = Color::new(1, 2, 3).with_channel(Channel::Green, 200);
        assert_eq!(color, Color::new(1, 200, 3));
        assert_eq!(color.channel(Channel::Green), 200);
        assert_eq!(color.channel(Channel::Blue), 3);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = random_color_with(&mut StdRng::seed_from_u64(42));
        let b = random_color_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn lightness_threshold() {
        assert!(Color::new(255, 255, 255).is_light());
        assert!(Color::DEFAULT.is_light());
        assert!(!Color::new(0, 0, 0).is_light());
    }
}
