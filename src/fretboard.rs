//! # Fretboard Mapping
//!
//! Enumerates every fretboard cell whose note belongs to a scale.
//!
//! Strings are indexed low to high in standard tuning:
//! ```text
//! 0: E  1: A  2: D  3: G  4: B  5: E
//! ```
//! Frets run from the open string (0) to [`MAX_FRET`] inclusive. The mapping is
//! not restricted to any CAGED position; `filter` narrows it afterwards.

use serde::Serialize;

use crate::pitch::{Interval, PitchClass, Spelling};
use crate::scale::Scale;

/// Highest fret considered on any string.
pub const MAX_FRET: u8 = 14;

pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes, low E first.
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// One scale note at a concrete string and fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretPosition {
    pub name: &'static str,
    pub interval: Interval,
    /// 0 = low E string.
    pub string: usize,
    pub fret: u8,
}

impl FretPosition {
    pub fn is_root(&self) -> bool {
        self.interval == Interval::Root
    }
}

/// Pitch class sounding at `fret` on `string`.
///
/// # Panics
/// If `string` is not a string index in `0..STRING_COUNT`.
pub fn note_at(string: usize, fret: u8) -> PitchClass {
    STANDARD_TUNING[string].transpose(fret)
}

/// Every in-scale cell on the neck, string by string, fret ascending.
///
/// Notes are named with `spelling` and labelled by their interval above `root`.
pub fn map_scale(
    members: &[PitchClass],
    root: PitchClass,
    spelling: Spelling,
) -> Vec<FretPosition> {
    let mut positions = Vec::new();
    for string in 0..STRING_COUNT {
        for fret in 0..=MAX_FRET {
            let pitch = note_at(string, fret);
            if !members.contains(&pitch) {
                continue;
            }
            positions.push(FretPosition {
                name: pitch.name(spelling),
                interval: Interval::between(root, pitch),
                string,
                fret,
            });
        }
    }
    positions
}

/// [`map_scale`] using the scale's own root and spelling.
pub fn map(scale: &Scale) -> Vec<FretPosition> {
    map_scale(&scale.notes, scale.root, scale.spelling)
}
