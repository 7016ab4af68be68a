//! # Error Types
//!
//! This module defines all error types for the CAGED note finder.
//!
//! Every error carries the offending value so the caller can report exactly
//! which selection was rejected. Errors are raised only at the string-parsing
//! boundary or when a shape/key combination yields no usable root fret.
//!
//! ## Error Types
//! - `UnknownNote` - Note name not in the chromatic table
//! - `UnknownMode` - Scale mode name not in the catalog
//! - `UnknownPosition` - CAGED label other than C, A, G, E or D
//! - `UnknownInterval` - Interval label not in the interval table
//! - `NoRootFret` - No anchor string produced a root fret
//! - `ConfigError` - Invalid YAML configuration
//!
//! ## Usage
//! ```rust
//! use caged::{find_notes, CagedError};
//!
//! match find_notes("H", "Major Scale", "C") {
//!     Ok(notes) => println!("{} notes", notes.len()),
//!     Err(CagedError::UnknownNote(name)) => eprintln!("No such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::caged::CagedShape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CagedError {
    /// Note name outside the 12-entry chromatic table.
    ///
    /// # Example
    /// ```
    /// # use caged::CagedError;
    /// let err = CagedError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unrecognized note: H");
    /// ```
    #[error("Unrecognized note: {0}")]
    UnknownNote(String),

    /// Scale mode name outside the pattern catalog.
    #[error("Unknown scale mode: {0}")]
    UnknownMode(String),

    /// CAGED label other than C, A, G, E or D.
    #[error("Unknown CAGED position: {0}")]
    UnknownPosition(String),

    /// Interval label outside the interval table.
    #[error("Invalid interval: {0}")]
    UnknownInterval(String),

    /// Every root-fret slot was empty for this shape.
    #[error("No root frets for position {0}")]
    NoRootFret(CagedShape),

    /// Invalid YAML configuration.
    ///
    /// # Example
    /// ```
    /// # use caged::CagedError;
    /// let err = CagedError::ConfigError("margins.C.back must be a number".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: margins.C.back must be a number");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
