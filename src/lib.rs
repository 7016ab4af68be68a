pub mod api;
pub mod caged;
pub mod config;
pub mod error;
pub mod filter;
pub mod fretboard;
pub mod pitch;
pub mod scale;

pub use api::{
    find_all_positions, find_notes, find_notes_with_config, position_notes, position_report,
    PositionReport,
};
pub use caged::{locate, CagedShape, FretWindow, RootFrets};
pub use config::{FinderConfig, Margins, ShapeMargins};
pub use error::*;
pub use filter::{filter, position_window, start_fret};
pub use fretboard::{map, map_scale, note_at, FretPosition, MAX_FRET, STANDARD_TUNING};
pub use pitch::{distance, interval_label, name_of, semitone_of, Interval, PitchClass, Spelling};
pub use scale::{build, key_spelling, Scale, ScaleMode, Tonality};
