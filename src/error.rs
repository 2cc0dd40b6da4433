//! # Error Types
//!
//! This module defines all error types for the fretwise engine.
//!
//! Every failure is a pure validation failure: nothing is retried and no partial
//! result is ever returned alongside an error.
//!
//! ## Error Types
//! - `UnknownNote` - a note name that does not resolve to a pitch class
//! - `UnknownFormula` - a formula name missing from the catalog
//! - `InvalidRange` - a negative fret range, a string index outside the tuning, or a
//!   pitch-class value outside 0..=11
//! - `Config` - a configuration document that could not be read or validated
//!
//! ## Usage
//! ```rust
//! use fretwise::{Engine, TheoryError};
//!
//! let engine = Engine::builtin().unwrap();
//! match engine.voicing("H", "Minor", 0) {
//!     Ok(voicing) => println!("{:?}", voicing.notes()),
//!     Err(TheoryError::UnknownNote { name }) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// Note name that is neither a canonical sharp name nor one of the known flats.
    ///
    /// # Example
    /// ```
    /// # use fretwise::TheoryError;
    /// let err = TheoryError::UnknownNote { name: "H".to_string() };
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {name}")]
    UnknownNote { name: String },

    /// Formula name absent from the catalog.
    ///
    /// # Example
    /// ```
    /// # use fretwise::TheoryError;
    /// let err = TheoryError::UnknownFormula { name: "Hexatonic".to_string() };
    /// assert_eq!(err.to_string(), "Unknown formula: Hexatonic");
    /// ```
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// Value outside the range an operation accepts.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Configuration could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
