//! `#rrggbb` color validation and decoding

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::errors::{PortmapError, Result};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Check that a string is a `#rrggbb` color
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Decoded RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decode a `#rrggbb` string
    ///
    /// # Example
    /// ```
    /// use portmaps::port::Rgb;
    ///
    /// let rgb = Rgb::parse("#007bff").unwrap();
    /// assert_eq!((rgb.r, rgb.g, rgb.b), (0x00, 0x7b, 0xff));
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        if !is_hex_color(value) {
            return Err(PortmapError::InvalidColor(value.to_string()));
        }

        let bytes = hex::decode(&value[1..])
            .map_err(|e| PortmapError::InvalidColor(format!("{}: {}", value, e)))?;

        match bytes.as_slice() {
            [r, g, b] => Ok(Rgb { r: *r, g: *g, b: *b }),
            _ => Err(PortmapError::InvalidColor(value.to_string())),
        }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
