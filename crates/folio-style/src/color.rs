//! Colour values: hex RGB, RGB with alpha, and OKLCH literals.

use std::fmt;
use std::str::FromStr;

/// Error parsing a colour literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not a `#rgb` or `#rrggbb` literal.
    InvalidHex(String),
    /// Not an `oklch(L% C H)` literal.
    InvalidOklch(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(raw) => write!(f, "invalid hex colour: {raw:?}"),
            Self::InvalidOklch(raw) => write!(f, "invalid oklch colour: {raw:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(raw: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError::InvalidHex(raw.to_string());
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::new(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => Err(err()),
        }
    }

    /// Attach an alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { rgb: self, a }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Nearest ANSI 256-colour index, for terminals without true colour.
    #[must_use]
    pub fn to_ansi256(self) -> u8 {
        let Self { r, g, b } = self;
        if r == g && g == b {
            if r < 8 {
                return 16;
            }
            if r > 248 {
                return 231;
            }
            return 232 + ((r - 8) / 10).min(23);
        }
        16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
    }
}

/// Cube levels are `[0, 95, 135, 175, 215, 255]`; split at the midpoints.
fn cube_index(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// RGB colour with an 8-bit alpha, rendered as `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Colour channels.
    pub rgb: Rgb,
    /// Alpha (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Blend over an opaque background.
    #[must_use]
    pub fn over(self, background: Rgb) -> Rgb {
        background.lerp(self.rgb, f32::from(self.a) / 255.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02x}", self.rgb, self.a)
    }
}

// ---------------------------------------------------------------------------
// Oklch
// ---------------------------------------------------------------------------

/// A colour in OKLCH space, kept verbatim for style output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Perceived lightness in percent (0–100).
    pub lightness: f32,
    /// Chroma (0 and up, typically below 0.4).
    pub chroma: f32,
    /// Hue angle in degrees.
    pub hue: f32,
}

impl Oklch {
    /// Create an OKLCH colour.
    #[must_use]
    pub const fn new(lightness: f32, chroma: f32, hue: f32) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Parse `oklch(54.06% 0.216 264.05)`. The `%` is optional.
    pub fn parse(raw: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError::InvalidOklch(raw.to_string());
        let body = raw
            .trim()
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut parts = body.split_whitespace();
        let mut next = || parts.next().ok_or_else(err);
        let lightness = next()?;
        let lightness = lightness.strip_suffix('%').unwrap_or(lightness);
        let lightness: f32 = lightness.parse().map_err(|_| err())?;
        let chroma: f32 = next()?.parse().map_err(|_| err())?;
        let hue: f32 = next()?.parse().map_err(|_| err())?;
        if parts.next().is_some() || !(0.0..=100.0).contains(&lightness) || chroma < 0.0 {
            return Err(err());
        }
        Ok(Self::new(lightness, chroma, hue))
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {})",
            self.lightness, self.chroma, self.hue
        )
    }
}

impl FromStr for Oklch {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
