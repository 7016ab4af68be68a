//! # Public API
//!
//! Entry points consumed by the presentation layer.
//!
//! ## Query Functions
//!
//! - [`find_notes()`] - Notes of one scale inside one CAGED position
//! - [`find_notes_with_config()`] - Same, with custom position margins
//! - [`position_report()`] - Notes plus start fret, ready to serialize
//! - [`find_all_positions()`] - Reports for all five shapes
//!
//! ## Pipeline
//! 1. Parse key, mode and position names
//! 2. Build the scale and map it onto the whole fretboard
//! 3. Locate the shape's root frets on its anchor strings
//! 4. Keep only the notes inside the window around the lowest root
//!
//! ## Typical Usage
//!
//! ```rust
//! use caged::find_notes;
//!
//! let notes = find_notes("C", "Major Scale", "C")?;
//! assert!(notes.iter().any(|n| n.string == 1 && n.fret == 3 && n.name == "C"));
//! # Ok::<(), caged::CagedError>(())
//! ```

use log::trace;
use serde::Serialize;

use crate::{
    build, filter, key_spelling, locate, map, start_fret, CagedError, CagedShape, FinderConfig,
    FretPosition, PitchClass, ScaleMode,
};

/// One complete position query, as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    pub key: String,
    pub mode: ScaleMode,
    pub position: CagedShape,
    pub start_fret: u8,
    pub notes: Vec<FretPosition>,
}

/// Notes of `mode` rooted on `root`, restricted to `shape`.
pub fn position_notes(
    root: PitchClass,
    mode: ScaleMode,
    shape: CagedShape,
    config: &FinderConfig,
) -> Result<Vec<FretPosition>, CagedError> {
    let scale = build(root, mode);
    let all_notes = map(&scale);
    trace!("{} {}: {:?}", root, mode, all_notes);

    let root_frets = locate(root, shape);
    filter(&all_notes, &root_frets, shape, config.margins.for_shape(shape))
}

/// Find the notes of a scale inside one CAGED position.
///
/// # Example
/// ```rust
/// use caged::find_notes;
///
/// let notes = find_notes("A", "Minor Pentatonic", "E")?;
/// assert!(notes.iter().all(|n| n.fret >= 4));
/// # Ok::<(), caged::CagedError>(())
/// ```
///
/// # Errors
/// [`CagedError::UnknownNote`], [`CagedError::UnknownMode`] or
/// [`CagedError::UnknownPosition`] for unrecognised names.
pub fn find_notes(
    key: &str,
    mode: &str,
    position: &str,
) -> Result<Vec<FretPosition>, CagedError> {
    find_notes_with_config(key, mode, position, &FinderConfig::default())
}

/// [`find_notes()`] with custom position margins.
pub fn find_notes_with_config(
    key: &str,
    mode: &str,
    position: &str,
    config: &FinderConfig,
) -> Result<Vec<FretPosition>, CagedError> {
    let root = PitchClass::from_name(key)?;
    let mode: ScaleMode = mode.parse()?;
    let shape: CagedShape = position.parse()?;
    position_notes(root, mode, shape, config)
}

/// Notes and start fret for one position.
///
/// The reported key is spelled the way the notes are, so `"Db"` and `"C♯"`
/// major both come back as `"D♭"`.
pub fn position_report(
    key: &str,
    mode: &str,
    position: &str,
    config: &FinderConfig,
) -> Result<PositionReport, CagedError> {
    let root = PitchClass::from_name(key)?;
    let mode: ScaleMode = mode.parse()?;
    let shape: CagedShape = position.parse()?;
    let notes = position_notes(root, mode, shape, config)?;

    Ok(PositionReport {
        key: root.name(key_spelling(root, mode.tonality())).to_string(),
        mode,
        position: shape,
        start_fret: start_fret(&notes),
        notes,
    })
}

/// Reports for every CAGED shape, in C A G E D order.
pub fn find_all_positions(
    key: &str,
    mode: &str,
    config: &FinderConfig,
) -> Result<Vec<PositionReport>, CagedError> {
    CagedShape::ALL
        .iter()
        .map(|shape| position_report(key, mode, shape.label(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interval, Margins};

    fn has(
        notes: &[FretPosition],
        name: &str,
        interval: Interval,
        string: usize,
        fret: u8,
    ) -> bool {
        notes.iter().any(|n| {
            n.name == name && n.interval == interval && n.string == string && n.fret == fret
        })
    }

    #[test]
    fn test_c_major_c_shape() {
        let notes = find_notes("C", "Major Scale", "C").unwrap();
        assert!(has(&notes, "C", Interval::Root, 1, 3));
        assert!(has(&notes, "D", Interval::Second, 1, 5));
        assert!(has(&notes, "D", Interval::Second, 4, 3));
        assert!(has(&notes, "C", Interval::Root, 4, 1));
        assert!(has(&notes, "G", Interval::Fifth, 0, 3));
        assert!(has(&notes, "G", Interval::Fifth, 5, 3));
        assert!(!notes.iter().any(|n| n.string == 1 && n.fret == 9));
    }

    #[test]
    fn test_errors_carry_offending_value() {
        assert_eq!(
            find_notes("X", "Major Scale", "C"),
            Err(CagedError::UnknownNote("X".to_string()))
        );
        assert_eq!(
            find_notes("C", "Lydian", "C"),
            Err(CagedError::UnknownMode("Lydian".to_string()))
        );
        assert_eq!(
            find_notes("C", "Major Scale", "B"),
            Err(CagedError::UnknownPosition("B".to_string()))
        );
    }

    #[test]
    fn test_config_widens_window() {
        let mut config = FinderConfig::default();
        config.margins.c = Margins::new(1, 8);
        let notes = find_notes_with_config("C", "Major Scale", "C", &config).unwrap();
        assert!(has(&notes, "F", Interval::Fourth, 1, 8));
        assert!(notes.iter().all(|n| n.fret <= 9));
    }

    #[test]
    fn test_report() {
        let report = position_report("C", "Major Scale", "E", &FinderConfig::default()).unwrap();
        assert_eq!(report.position, CagedShape::E);
        assert_eq!(report.start_fret, 8);
        assert!(report.notes.iter().all(|n| (7..=12).contains(&n.fret)));
    }

    #[test]
    fn test_all_positions() {
        let reports = find_all_positions("G", "Minor Blues", &FinderConfig::default()).unwrap();
        let shapes: Vec<CagedShape> = reports.iter().map(|r| r.position).collect();
        assert_eq!(shapes, CagedShape::ALL.to_vec());
        assert!(reports.iter().all(|r| !r.notes.is_empty()));
    }

    #[test]
    fn test_report_key_matches_note_spelling() {
        let config = FinderConfig::default();
        for (key, mode) in [
            ("Db", "Major Scale"),
            ("C♯", "Major Pentatonic"),
            ("Gb", "Minor Blues"),
            ("A#", "Natural Minor"),
        ] {
            let report = position_report(key, mode, "C", &config).unwrap();
            let root = report.notes.iter().find(|n| n.is_root()).unwrap();
            assert_eq!(report.key, root.name, "{} {}", key, mode);
        }

        let report = position_report("Db", "Major Scale", "C", &config).unwrap();
        assert_eq!(report.key, "D♭");
        let report = position_report("C♯", "Natural Minor", "C", &config).unwrap();
        assert_eq!(report.key, "C♯");
    }

    #[test]
    fn test_report_json() {
        let report = position_report("C", "Major Scale", "C", &FinderConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "Major Scale");
        assert_eq!(json["position"], "C");
        assert_eq!(json["startFret"], 1);
        // Open low E is the first cell inside the window
        assert_eq!(json["notes"][0]["name"], "E");
        assert_eq!(json["notes"][0]["interval"], "3");
    }
}
