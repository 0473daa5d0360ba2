// SPDX-License-Identifier: MIT

//!
//! Colours used when drawing a timeline
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (e.g. `#ab66ef`)")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    /// Create a colour from RGB values
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    pub fn black() -> Self {
        Colour::from_rgb(0, 0, 0)
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let error = || ColourError::InvalidHex(original.clone());

        let hex_colour = original.strip_prefix('#').unwrap_or(&original);
        if !hex_colour.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(error());
        }

        // Drop any alpha component
        let hex_colour = match hex_colour.len() {
            6 => hex_colour,
            8 => &hex_colour[0..6],
            _ => return Err(error()),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex_colour[range], 16).map_err(|_| error())
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// Get a colour as a hex string (e.g. `#ab66ef`)
    pub fn as_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}
