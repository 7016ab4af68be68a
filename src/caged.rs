//! # CAGED Position Location
//!
//! Each of the five shapes owns:
//! - the anchor strings its root is read from
//! - a target fret window that picks *which* octave of the root to anchor on
//!
//! | Shape | Anchor strings | Window  |
//! |-------|----------------|---------|
//! | C     | A, B           | 1 - 5   |
//! | A     | A, G           | 3 - 7   |
//! | G     | low E, G       | 5 - 9   |
//! | E     | low E, high E  | 7 - 11  |
//! | D     | D, B           | 9 - 13  |
//!
//! A root recurs every 12 frets, so each anchor string has two candidates:
//! the lowest fret giving the root and the same note an octave up. The one
//! inside the window wins. If neither is inside, the one closer to the window
//! wins, ties going to the lower fret.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::CagedError;
use crate::fretboard::{STANDARD_TUNING, STRING_COUNT};
use crate::pitch::{distance, PitchClass};

/// Root fret per string; `None` on strings the shape does not anchor on.
pub type RootFrets = [Option<u8>; STRING_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CagedShape {
    C,
    A,
    G,
    E,
    D,
}

/// Inclusive fret range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretWindow {
    pub low: u8,
    pub high: u8,
}

impl FretWindow {
    pub fn contains(&self, fret: u8) -> bool {
        (self.low..=self.high).contains(&fret)
    }

    /// Frets between `fret` and the nearest edge; 0 when inside.
    pub fn distance_to(&self, fret: u8) -> u8 {
        if fret < self.low {
            self.low - fret
        } else if fret > self.high {
            fret - self.high
        } else {
            0
        }
    }
}

impl CagedShape {
    /// In the order the shapes climb the neck for a C root.
    pub const ALL: [CagedShape; 5] = [
        CagedShape::C,
        CagedShape::A,
        CagedShape::G,
        CagedShape::E,
        CagedShape::D,
    ];

    pub fn anchor_strings(self) -> &'static [usize] {
        match self {
            CagedShape::C => &[1, 4],
            CagedShape::A => &[1, 3],
            CagedShape::G => &[0, 3],
            CagedShape::E => &[0, 5],
            CagedShape::D => &[2, 4],
        }
    }

    pub fn target_window(self) -> FretWindow {
        let (low, high) = match self {
            CagedShape::C => (1, 5),
            CagedShape::A => (3, 7),
            CagedShape::G => (5, 9),
            CagedShape::E => (7, 11),
            CagedShape::D => (9, 13),
        };
        FretWindow { low, high }
    }

    pub fn label(self) -> &'static str {
        match self {
            CagedShape::C => "C",
            CagedShape::A => "A",
            CagedShape::G => "G",
            CagedShape::E => "E",
            CagedShape::D => "D",
        }
    }
}

impl FromStr for CagedShape {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(CagedShape::C),
            "A" => Ok(CagedShape::A),
            "G" => Ok(CagedShape::G),
            "E" => Ok(CagedShape::E),
            "D" => Ok(CagedShape::D),
            _ => Err(CagedError::UnknownPosition(s.to_string())),
        }
    }
}

impl fmt::Display for CagedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick between the open-position root fret and its octave.
fn choose_octave(base: u8, window: FretWindow) -> u8 {
    let high = base + 12;
    if window.contains(base) {
        base
    } else if window.contains(high) {
        high
    } else if window.distance_to(base) <= window.distance_to(high) {
        base
    } else {
        high
    }
}

/// Root frets of `root` on the anchor strings of `shape`.
pub fn locate(root: PitchClass, shape: CagedShape) -> RootFrets {
    let window = shape.target_window();
    let mut root_frets: RootFrets = [None; STRING_COUNT];

    for &string in shape.anchor_strings() {
        let base = distance(STANDARD_TUNING[string], root);
        root_frets[string] = Some(choose_octave(base, window));
    }

    debug!("{} shape root frets for {}: {:?}", shape, root, root_frets);
    root_frets
}
