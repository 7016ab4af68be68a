//! # Position Filter
//!
//! Narrows the full fretboard mapping to the notes of one CAGED position.
//!
//! The anchor is the lowest located root fret. Everything between
//! `anchor - back` (clamped at the nut) and `anchor + forward` is kept, on
//! every string alike. Strings far from the anchor can therefore show a note
//! or two outside the textbook box.

use log::debug;

use crate::caged::{CagedShape, FretWindow, RootFrets};
use crate::config::Margins;
use crate::error::CagedError;
use crate::fretboard::FretPosition;

/// Fret window implied by the root frets and margins.
pub fn position_window(
    root_frets: &RootFrets,
    shape: CagedShape,
    margins: Margins,
) -> Result<FretWindow, CagedError> {
    let anchor = root_frets
        .iter()
        .flatten()
        .copied()
        .min()
        .ok_or(CagedError::NoRootFret(shape))?;

    Ok(FretWindow {
        low: anchor.saturating_sub(margins.back),
        high: anchor.saturating_add(margins.forward),
    })
}

/// Keep the notes whose fret lies inside the position window.
///
/// # Errors
/// [`CagedError::NoRootFret`] when every slot of `root_frets` is empty.
pub fn filter(
    notes: &[FretPosition],
    root_frets: &RootFrets,
    shape: CagedShape,
    margins: Margins,
) -> Result<Vec<FretPosition>, CagedError> {
    let window = position_window(root_frets, shape, margins)?;
    let kept: Vec<FretPosition> = notes
        .iter()
        .filter(|note| window.contains(note.fret))
        .copied()
        .collect();

    debug!(
        "{} shape window frets {}-{}: kept {} of {} notes",
        shape,
        window.low,
        window.high,
        kept.len(),
        notes.len()
    );
    Ok(kept)
}

/// Lowest fret holding the root, used to label a position diagram.
///
/// The key needs no separate argument: each note's interval already says
/// whether it is the root. Returns 0 when `notes` contains no root.
pub fn start_fret(notes: &[FretPosition]) -> u8 {
    notes
        .iter()
        .filter(|note| note.is_root())
        .map(|note| note.fret)
        .min()
        .unwrap_or(0)
}
