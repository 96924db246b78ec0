/// Color parsing and formatting for fills and strokes
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CalendarError, Result};

pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const LIGHT_GRAY: Srgb<u8> = Srgb::new(230, 230, 230);
/// Month and year labels
pub const LABEL_GRAY: Srgb<u8> = Srgb::new(190, 190, 190);
/// Day names on the week ring
pub const DAY_NAME_GRAY: Srgb<u8> = Srgb::new(220, 220, 220);

/// Parse a hex color string
/// Accepts `#rgb`, `#rrggbb` and the same without the leading `#`
pub fn parse_color(color_str: &str) -> Result<Srgb<u8>> {
    let trimmed = color_str.trim();
    Srgb::from_str(trimmed).map_err(|_| CalendarError::InvalidColor(color_str.to_string()))
}

/// SVG attribute value for a color, e.g. `rgb(230,230,230)`
/// Pure white is written as `white`
pub fn color_attr(color: Srgb<u8>) -> String {
    if color == WHITE {
        return "white".to_string();
    }
    format!("rgb({},{},{})", color.red, color.green, color.blue)
}

/// Two colors used alternately to fill consecutive intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shading {
    pub first: String,
    pub second: String,
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            first: "#e6e6e6".to_string(),
            second: "#ffffff".to_string(),
        }
    }
}

impl Shading {
    /// Parse both colors; fails on the first one that is not a hex color
    pub fn resolve(&self) -> Result<ShadingColors> {
        Ok(ShadingColors {
            first: parse_color(&self.first)?,
            second: parse_color(&self.second)?,
        })
    }
}

/// Parsed [`Shading`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingColors {
    pub first: Srgb<u8>,
    pub second: Srgb<u8>,
}

impl Default for ShadingColors {
    fn default() -> Self {
        Self {
            first: LIGHT_GRAY,
            second: WHITE,
        }
    }
}

impl ShadingColors {
    /// Endless `first, second, first, ...` sequence
    pub fn alternating(&self) -> impl Iterator<Item = Srgb<u8>> {
        [self.first, self.second].into_iter().cycle()
    }
}
