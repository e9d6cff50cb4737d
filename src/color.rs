//! SwatchColor type and the rgb → hex normalizer.
//!
//! Palette entries are plain strings, either hex (`#e91e63`, `#fff`) or CSS
//! style `rgb(r, g, b)` triplets. Selections are always stored as lowercase
//! `#rrggbb`.

use crate::error::{SwatchError, SwatchResult};

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwatchColor {
    r: u8,
    g: u8,
    b: u8,
}

impl SwatchColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }
    pub fn g(&self) -> u8 {
        self.g
    }
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> SwatchResult<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidHex(hex.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| SwatchError::InvalidHex(hex.to_string()))
        };
        match stripped.len() {
            3 => Ok(Self {
                r: channel(&stripped[0..1])? * 17,
                g: channel(&stripped[1..2])? * 17,
                b: channel(&stripped[2..3])? * 17,
            }),
            6 => Ok(Self {
                r: channel(&stripped[0..2])?,
                g: channel(&stripped[2..4])?,
                b: channel(&stripped[4..6])?,
            }),
            _ => Err(SwatchError::InvalidHex(hex.to_string())),
        }
    }

    /// Parse an `rgb(r, g, b)` string.
    ///
    /// Only the text between the first `(` and the following `)` is read, so
    /// the function name is not checked. Exactly three integer components in
    /// 0–255 are accepted.
    pub fn from_rgb_str(rgb: &str) -> SwatchResult<Self> {
        let body = rgb
            .split_once('(')
            .and_then(|(_, rest)| rest.split(')').next())
            .ok_or_else(|| SwatchError::MalformedRgb(rgb.to_string()))?;

        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() != 3 {
            return Err(SwatchError::ComponentCount(parts.len()));
        }
        let component = |s: &str| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| SwatchError::InvalidComponent(s.trim().to_string()))
        };
        Ok(Self {
            r: component(parts[0])?,
            g: component(parts[1])?,
            b: component(parts[2])?,
        })
    }

    /// Parse either notation. Strings mentioning `rgb` go through the triplet
    /// parser, everything else is treated as hex.
    pub fn parse(value: &str) -> SwatchResult<Self> {
        if is_rgb_notation(value) {
            Self::from_rgb_str(value)
        } else {
            Self::from_hex(value)
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub(crate) fn is_rgb_notation(value: &str) -> bool {
    value.contains("rgb")
}

/// Convert an `rgb(r, g, b)` string to `#rrggbb`.
///
/// Returns an empty string when the input does not hold exactly three valid
/// components.
pub fn rgb_to_hex(rgb: &str) -> String {
    match SwatchColor::from_rgb_str(rgb) {
        Ok(color) => color.to_hex(),
        Err(err) => {
            log::debug!("rgb_to_hex({rgb:?}): {err}");
            String::new()
        }
    }
}

/// Bring a raw swatch string into the stored form: rgb triplets become hex,
/// anything else is kept verbatim.
pub fn normalize_color(raw: &str) -> String {
    if is_rgb_notation(raw) {
        rgb_to_hex(raw)
    } else {
        raw.to_string()
    }
}
