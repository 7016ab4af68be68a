//! # Finder Configuration
//!
//! The fret window kept around each CAGED anchor is a heuristic, so its
//! per-shape margins are configuration rather than constants. They can be
//! loaded from YAML:
//!
//! ```yaml
//! margins:
//!   C: { back: 1, forward: 4 }
//!   G: { back: 2, forward: 4 }
//! ```
//!
//! Shapes left out keep their defaults.

use serde::{Deserialize, Serialize};

use crate::caged::CagedShape;
use crate::error::CagedError;

/// Frets kept below and above the anchor fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margins {
    pub back: u8,
    pub forward: u8,
}

impl Margins {
    pub const fn new(back: u8, forward: u8) -> Self {
        Self { back, forward }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeMargins {
    #[serde(rename = "C")]
    pub c: Margins,
    #[serde(rename = "A")]
    pub a: Margins,
    #[serde(rename = "G")]
    pub g: Margins,
    #[serde(rename = "E")]
    pub e: Margins,
    #[serde(rename = "D")]
    pub d: Margins,
}

impl Default for ShapeMargins {
    fn default() -> Self {
        Self {
            c: Margins::new(1, 4),
            a: Margins::new(1, 4),
            g: Margins::new(2, 4),
            e: Margins::new(1, 4),
            d: Margins::new(1, 4),
        }
    }
}

impl ShapeMargins {
    pub fn for_shape(&self, shape: CagedShape) -> Margins {
        match shape {
            CagedShape::C => self.c,
            CagedShape::A => self.a,
            CagedShape::G => self.g,
            CagedShape::E => self.e,
            CagedShape::D => self.d,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    pub margins: ShapeMargins,
}

impl FinderConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, CagedError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CagedError::ConfigError(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, CagedError> {
        serde_yaml::to_string(self).map_err(|e| CagedError::ConfigError(e.to_string()))
    }
}
