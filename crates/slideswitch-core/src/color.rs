//! Color representation with 8-bit ARGB conversion and channel interpolation.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Pack into `0xAARRGGBB`.
    #[must_use]
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Convert to 8-bit channels `[r, g, b, a]`.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            Self::channel_to_u8(self.r),
            Self::channel_to_u8(self.g),
            Self::channel_to_u8(self.b),
            Self::channel_to_u8(self.a),
        ]
    }

    /// Parse an ARGB hex color string (`#AARRGGBB` or `#RRGGBB`).
    ///
    /// Six-digit strings are treated as opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_argb_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }

        match hex.len() {
            6 => {
                let rgb = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHex)?;
                Ok(Self::from_argb(0xFF00_0000 | rgb))
            }
            8 => {
                let argb = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHex)?;
                Ok(Self::from_argb(argb))
            }
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to `#AARRGGBB`.
    #[must_use]
    pub fn to_argb_hex(&self) -> String {
        format!("#{:08X}", self.to_argb())
    }

    /// Interpolate 8-bit RGB channels from `self` toward `other`, fully opaque.
    ///
    /// Each channel is `floor(from + (to - from) * t + 0.5)`, i.e. rounded
    /// half-up in integer channel space. Alpha is always 255.
    #[must_use]
    pub fn lerp_rgb8(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let [r0, g0, b0, _] = self.to_rgba8();
        let [r1, g1, b1, _] = other.to_rgba8();
        Self::from_rgba8(
            Self::lerp_channel(r0, r1, t),
            Self::lerp_channel(g0, g1, t),
            Self::lerp_channel(b0, b1, t),
            u8::MAX,
        )
    }

    /// Linear interpolation between two colors in float space.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
        let from = f32::from(from);
        let delta = f32::from(to) - from;
        (from + delta * t + 0.5).floor().clamp(0.0, 255.0) as u8
    }

    fn channel_to_u8(c: f32) -> u8 {
        (c * 255.0).round() as u8
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}
