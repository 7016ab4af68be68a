//! # Scale Modes and Scale Construction
//!
//! ## Catalog
//! Six modes, each an ordered list of semitone steps from the root:
//!
//! | Mode             | Steps         |
//! |------------------|---------------|
//! | Major Scale      | 2 2 1 2 2 2 1 |
//! | Natural Minor    | 2 1 2 2 1 2 2 |
//! | Major Pentatonic | 2 2 3 2 3     |
//! | Minor Pentatonic | 3 2 2 3 2     |
//! | Major Blues      | 2 3 1 1 3 2   |
//! | Minor Blues      | 3 2 1 1 3 2   |
//!
//! ## Building
//! The root is emitted first, then every step is applied cumulatively mod 12.
//! Every pattern sums to 12, so the list ends on the root an octave up.
//!
//! ## Spelling
//! Accidentals follow the key signature: sharp keys get sharps, all others
//! flats. The spelling only affects display names.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CagedError;
use crate::pitch::{PitchClass, Spelling};

/// Whether a mode is heard against a major or a minor tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tonality {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScaleMode {
    #[serde(rename = "Major Scale")]
    Major,
    #[serde(rename = "Natural Minor")]
    NaturalMinor,
    #[serde(rename = "Major Pentatonic")]
    MajorPentatonic,
    #[serde(rename = "Minor Pentatonic")]
    MinorPentatonic,
    #[serde(rename = "Major Blues")]
    MajorBlues,
    #[serde(rename = "Minor Blues")]
    MinorBlues,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 6] = [
        ScaleMode::Major,
        ScaleMode::NaturalMinor,
        ScaleMode::MajorPentatonic,
        ScaleMode::MinorPentatonic,
        ScaleMode::MajorBlues,
        ScaleMode::MinorBlues,
    ];

    /// Semitone steps between consecutive scale notes.
    pub fn pattern(self) -> &'static [u8] {
        match self {
            ScaleMode::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleMode::NaturalMinor => &[2, 1, 2, 2, 1, 2, 2],
            ScaleMode::MajorPentatonic => &[2, 2, 3, 2, 3],
            ScaleMode::MinorPentatonic => &[3, 2, 2, 3, 2],
            ScaleMode::MajorBlues => &[2, 3, 1, 1, 3, 2],
            ScaleMode::MinorBlues => &[3, 2, 1, 1, 3, 2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Major => "Major Scale",
            ScaleMode::NaturalMinor => "Natural Minor",
            ScaleMode::MajorPentatonic => "Major Pentatonic",
            ScaleMode::MinorPentatonic => "Minor Pentatonic",
            ScaleMode::MajorBlues => "Major Blues",
            ScaleMode::MinorBlues => "Minor Blues",
        }
    }

    pub fn tonality(self) -> Tonality {
        match self {
            ScaleMode::Major | ScaleMode::MajorPentatonic | ScaleMode::MajorBlues => {
                Tonality::Major
            }
            ScaleMode::NaturalMinor | ScaleMode::MinorPentatonic | ScaleMode::MinorBlues => {
                Tonality::Minor
            }
        }
    }
}

impl FromStr for ScaleMode {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s.trim())
            .ok_or_else(|| CagedError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spelling dictated by the key signature of `root` in the given tonality.
///
/// Sharp major keys: C G D A E B F♯. Sharp minor keys: A E B F♯ C♯ G♯ D♯.
pub fn key_spelling(root: PitchClass, tonality: Tonality) -> Spelling {
    // Pitch classes of the sharp keys, walking the circle of fifths.
    const SHARP_MAJOR: [u8; 7] = [0, 7, 2, 9, 4, 11, 6];
    const SHARP_MINOR: [u8; 7] = [9, 4, 11, 6, 1, 8, 3];

    let sharp_keys = match tonality {
        Tonality::Major => &SHARP_MAJOR,
        Tonality::Minor => &SHARP_MINOR,
    };
    if sharp_keys.contains(&root.value()) {
        Spelling::Sharp
    } else {
        Spelling::Flat
    }
}

/// A root plus a mode, expanded into its ordered notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub root: PitchClass,
    pub mode: ScaleMode,
    pub spelling: Spelling,
    /// Root first, and the root again an octave up at the end.
    pub notes: Vec<PitchClass>,
}

impl Scale {
    /// Parse key and mode names, then build the scale.
    pub fn from_names(key: &str, mode: &str) -> Result<Self, CagedError> {
        let root = PitchClass::from_name(key)?;
        let mode = mode.parse()?;
        Ok(build(root, mode))
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.notes.contains(&pitch)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|note| note.name(self.spelling)).collect()
    }
}

/// Expand `root` through the step pattern of `mode`.
pub fn build(root: PitchClass, mode: ScaleMode) -> Scale {
    let pattern = mode.pattern();
    let mut notes = Vec::with_capacity(pattern.len() + 1);
    let mut current = root;
    notes.push(current);
    for &step in pattern {
        current = current.transpose(step);
        notes.push(current);
    }

    Scale {
        root,
        mode,
        spelling: key_spelling(root, mode.tonality()),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::distance;

    fn names(key: &str, mode: &str) -> Vec<&'static str> {
        Scale::from_names(key, mode).unwrap().names()
    }

    #[test]
    fn test_c_major() {
        assert_eq!(
            names("C", "Major Scale"),
            vec!["C", "D", "E", "F", "G", "A", "B", "C"]
        );
    }

    #[test]
    fn test_a_minor_pentatonic() {
        assert_eq!(
            names("A", "Minor Pentatonic"),
            vec!["A", "C", "D", "E", "G", "A"]
        );
    }

    #[test]
    fn test_g_major_blues() {
        assert_eq!(
            names("G", "Major Blues"),
            vec!["G", "A", "C", "C♯", "D", "F", "G"]
        );
    }

    #[test]
    fn test_flat_keys_spell_with_flats() {
        assert_eq!(
            names("F", "Major Scale"),
            vec!["F", "G", "A", "B♭", "C", "D", "E", "F"]
        );
        assert_eq!(
            names("D", "Natural Minor"),
            vec!["D", "E", "F", "G", "A", "B♭", "C", "D"]
        );
    }

    #[test]
    fn test_sharp_minor_keys() {
        assert_eq!(
            names("C♯", "Natural Minor"),
            vec!["C♯", "D♯", "E", "F♯", "G♯", "A", "B", "C♯"]
        );
        // D♭ major is a flat key, whichever way the root is written
        assert_eq!(
            names("C♯", "Major Pentatonic"),
            vec!["D♭", "E♭", "F", "A♭", "B♭", "D♭"]
        );
    }

    #[test]
    fn test_every_scale_follows_its_pattern() {
        for root in PitchClass::all() {
            for mode in ScaleMode::ALL {
                let scale = build(root, mode);
                assert_eq!(scale.notes[0], root);
                assert_eq!(scale.notes.len(), mode.pattern().len() + 1);
                let steps: Vec<u8> = scale
                    .notes
                    .windows(2)
                    .map(|pair| distance(pair[0], pair[1]))
                    .collect();
                assert_eq!(steps, mode.pattern());
                let total: u32 = mode.pattern().iter().map(|&s| s as u32).sum();
                assert_eq!(total % 12, 0, "{} does not close the octave", mode);
            }
        }
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in ScaleMode::ALL {
            assert_eq!(mode.name().parse::<ScaleMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_unknown_mode() {
        let result = Scale::from_names("C", "Dorian");
        assert_eq!(result, Err(CagedError::UnknownMode("Dorian".to_string())));
    }
}
