//! Structured RGBA colors.
//!
//! Draw commands carry colors as values rather than CSS strings so that the
//! per-line alpha can be replaced without touching text. [`Rgba::css`] renders
//! the `rgba(...)` form a Canvas 2D context expects.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An 8-bit RGB color with a floating point alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    pub const fn from_rgb(rgb: [u8; 3], alpha: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], alpha)
    }

    /// Same channels, alpha replaced outright.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    #[inline]
    pub fn same_rgb(&self, other: &Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// CSS `rgba()` string for canvas fill/stroke styles.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("unrecognised color syntax: {0:?}")]
    Syntax(String),
    #[error("invalid color channel {0:?} (expected 0-255)")]
    Channel(String),
    #[error("color alpha {0} outside [0, 1]")]
    Alpha(f32),
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Accepts `rgba(r, g, b, a)`, `rgb(r, g, b)` and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Syntax(s.to_string()));
        }

        let (body, with_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorParseError::Syntax(s.to_string()));
        };
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::Syntax(s.to_string()))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ColorParseError::Syntax(s.to_string()));
        }

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| ColorParseError::Channel(p.to_string()))
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;

        let alpha = if with_alpha {
            let a = parts[3]
                .parse::<f32>()
                .map_err(|_| ColorParseError::Syntax(s.to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorParseError::Alpha(a));
            }
            a
        } else {
            1.0
        };

        Ok(Rgba::new(r, g, b, alpha))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 1.0))
}
