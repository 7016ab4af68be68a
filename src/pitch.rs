//! # Pitch Classes and Intervals
//!
//! Chromatic arithmetic over the 12-tone scale.
//!
//! ## Pitch Class
//! A note's identity modulo the octave, stored as the semitone distance from C
//! (`0 = C`, `1 = C♯/D♭`, ... `11 = B`). Every accepted note name maps to
//! exactly one pitch class; accidentals have two display names, naturals one.
//!
//! ## Distance
//! `distance(a, b)` is always measured *upward* from `a` to `b`, so it is not
//! symmetric: `distance(C, D) == 2` but `distance(D, C) == 10`.
//!
//! ## Interval
//! Scale-degree label of a semitone distance from the root (`1`, `♭3`, `5`, ...).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CagedError;

/// Sharp spellings indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// Flat spellings indexed by pitch class.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// Which enharmonic spelling to use when naming an accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// A note modulo the octave, as semitones above C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// Wraps any semitone count into the 0-11 range.
    pub const fn new(semitones: u8) -> Self {
        PitchClass(semitones % 12)
    }

    /// Every pitch class in chromatic order starting from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Parse a note name such as `"C"`, `"F♯"`, `"B♭"`, `"C#"` or `"Db"`.
    ///
    /// # Errors
    /// Returns [`CagedError::UnknownNote`] for anything outside the 12-entry
    /// table (including `"E♯"`, `"C♭"` and the like).
    pub fn from_name(name: &str) -> Result<Self, CagedError> {
        let semitone = match name.trim() {
            "C" => 0,
            "C♯" | "C#" | "D♭" | "Db" => 1,
            "D" => 2,
            "D♯" | "D#" | "E♭" | "Eb" => 3,
            "E" => 4,
            "F" => 5,
            "F♯" | "F#" | "G♭" | "Gb" => 6,
            "G" => 7,
            "G♯" | "G#" | "A♭" | "Ab" => 8,
            "A" => 9,
            "A♯" | "A#" | "B♭" | "Bb" => 10,
            "B" => 11,
            _ => return Err(CagedError::UnknownNote(name.to_string())),
        };
        Ok(PitchClass(semitone))
    }

    /// Display name in the requested spelling.
    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }

    /// True for the five pitch classes that need an accidental.
    pub fn is_accidental(self) -> bool {
        SHARP_NAMES[self.0 as usize] != FLAT_NAMES[self.0 as usize]
    }

    /// Move up by `semitones`, wrapping at the octave.
    pub fn transpose(self, semitones: u8) -> Self {
        PitchClass::new(self.0 + semitones % 12)
    }
}

impl FromStr for PitchClass {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Spelling::Sharp))
    }
}

/// Look up the pitch class of a note name.
pub fn semitone_of(name: &str) -> Result<PitchClass, CagedError> {
    PitchClass::from_name(name)
}

/// Name a pitch class in the requested spelling.
pub fn name_of(pitch: PitchClass, spelling: Spelling) -> &'static str {
    pitch.name(spelling)
}

/// Upward distance from `a` to `b`: `(b - a + 12) mod 12`.
pub fn distance(a: PitchClass, b: PitchClass) -> u8 {
    (b.0 + 12 - a.0) % 12
}

/// Scale-degree label for a semitone distance from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interval {
    #[serde(rename = "1")]
    Root,
    #[serde(rename = "♭2")]
    FlatSecond,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "♭3")]
    FlatThird,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "♭5")]
    FlatFifth,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "♭6")]
    FlatSixth,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "♭7")]
    FlatSeventh,
    #[serde(rename = "7")]
    Seventh,
}

impl Interval {
    const TABLE: [Interval; 12] = [
        Interval::Root,
        Interval::FlatSecond,
        Interval::Second,
        Interval::FlatThird,
        Interval::Third,
        Interval::Fourth,
        Interval::FlatFifth,
        Interval::Fifth,
        Interval::FlatSixth,
        Interval::Sixth,
        Interval::FlatSeventh,
        Interval::Seventh,
    ];

    /// Interval for a semitone distance; wraps at the octave.
    pub fn from_semitones(semitones: u8) -> Self {
        Self::TABLE[(semitones % 12) as usize]
    }

    /// Interval of `note` above `root`.
    pub fn between(root: PitchClass, note: PitchClass) -> Self {
        Self::from_semitones(distance(root, note))
    }

    /// Semitone distance from the root, in `0..=11`.
    pub fn semitones(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Interval::Root => "1",
            Interval::FlatSecond => "♭2",
            Interval::Second => "2",
            Interval::FlatThird => "♭3",
            Interval::Third => "3",
            Interval::Fourth => "4",
            Interval::FlatFifth => "♭5",
            Interval::Fifth => "5",
            Interval::FlatSixth => "♭6",
            Interval::Sixth => "6",
            Interval::FlatSeventh => "♭7",
            Interval::Seventh => "7",
        }
    }

    /// Parse a label such as `"♭3"` (ASCII `"b3"` also accepted).
    pub fn from_label(label: &str) -> Result<Self, CagedError> {
        let normalized = label.trim().replacen('b', "♭", 1);
        Self::TABLE
            .iter()
            .copied()
            .find(|interval| interval.label() == normalized)
            .ok_or_else(|| CagedError::UnknownInterval(label.to_string()))
    }
}

impl FromStr for Interval {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::from_label(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the interval `semitones` above the root.
pub fn interval_label(semitones: u8) -> &'static str {
    Interval::from_semitones(semitones).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_maps_to_one_pitch_class() {
        for (i, (sharp, flat)) in SHARP_NAMES.iter().zip(FLAT_NAMES.iter()).enumerate() {
            assert_eq!(semitone_of(sharp).unwrap().value() as usize, i);
            assert_eq!(semitone_of(flat).unwrap().value() as usize, i);
        }
    }

    #[test]
    fn test_ascii_spellings() {
        assert_eq!(semitone_of("C#").unwrap(), semitone_of("C♯").unwrap());
        assert_eq!(semitone_of("Bb").unwrap(), semitone_of("B♭").unwrap());
    }

    #[test]
    fn test_unknown_note() {
        assert_eq!(
            semitone_of("H"),
            Err(CagedError::UnknownNote("H".to_string()))
        );
        assert!(semitone_of("E♯").is_err());
        assert!(semitone_of("").is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for name in SHARP_NAMES.iter().chain(FLAT_NAMES.iter()) {
            let pitch = semitone_of(name).unwrap();
            for spelling in [Spelling::Sharp, Spelling::Flat] {
                assert_eq!(semitone_of(name_of(pitch, spelling)).unwrap(), pitch);
            }
        }
    }

    #[test]
    fn test_accidentals_have_two_names() {
        let accidentals: Vec<u8> = PitchClass::all()
            .filter(|p| p.is_accidental())
            .map(|p| p.value())
            .collect();
        assert_eq!(accidentals, vec![1, 3, 6, 8, 10]);
    }

    #[test]
    fn test_distance_properties() {
        for a in PitchClass::all() {
            assert_eq!(distance(a, a), 0);
            for b in PitchClass::all() {
                let up = distance(a, b);
                assert!(up <= 11);
                if a != b {
                    assert_eq!(up + distance(b, a), 12);
                }
            }
        }
    }

    #[test]
    fn test_distance_is_upward() {
        assert_eq!(distance(PitchClass::C, PitchClass::D), 2);
        assert_eq!(distance(PitchClass::D, PitchClass::C), 10);
    }

    #[test]
    fn test_interval_labels() {
        let a = semitone_of("A").unwrap();
        let c = semitone_of("C").unwrap();
        let e = semitone_of("E").unwrap();
        let d = semitone_of("D").unwrap();
        let b = semitone_of("B").unwrap();
        assert_eq!(interval_label(distance(a, c)), "♭3");
        assert_eq!(interval_label(distance(e, d)), "♭7");
        assert_eq!(interval_label(distance(b, c)), "♭2");
        assert_eq!(interval_label(distance(c, c)), "1");
        assert_eq!(interval_label(6), "♭5");
    }

    #[test]
    fn test_interval_from_label() {
        for semitones in 0..12 {
            let interval = Interval::from_semitones(semitones);
            assert_eq!(Interval::from_label(interval.label()), Ok(interval));
            assert_eq!(interval.semitones(), semitones);
        }
        assert_eq!("b7".parse::<Interval>(), Ok(Interval::FlatSeventh));
        assert_eq!("6".parse::<Interval>(), Ok(Interval::Sixth));
        assert!(Interval::from_label("♯4").is_err());
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::E.transpose(12), PitchClass::E);
    }
}
