//! # Chord Shapes
//!
//! What a chord diagram shows per string: muted, open, or fretted.
//!
//! Diagram inputs traditionally write a muted string as fret `-1`. That sentinel is
//! accepted at the boundary by [`ChordShape::from_frets`] and becomes
//! [`StringState::Muted`]; the search engine itself never produces it.
//!
//! A fretted string holds a `NonZeroU16`, so `Fretted` can neither duplicate `Open` nor
//! widen into a value that reads back as the muted marker.
//!
//! ## Example
//! ```rust
//! use fretwise::{ChordShape, StringTuning};
//!
//! // Open C major: x32010
//! let shape = ChordShape::from_frets(&[-1, 3, 2, 0, 1, 0]).unwrap();
//! let notes: Vec<_> = shape
//!     .resolve(&StringTuning::standard())
//!     .unwrap()
//!     .into_iter()
//!     .map(|pc| pc.map(|pc| pc.name()))
//!     .collect();
//! assert_eq!(notes, vec![None, Some("C"), Some("E"), Some("G"), Some("C"), Some("E")]);
//! ```

use serde::Serialize;
use std::num::NonZeroU16;

use crate::catalog::IntervalFormula;
use crate::error::TheoryError;
use crate::fretboard::{note_at, StringTuning};
use crate::pitch::PitchClass;

/// Fret used by diagram inputs to mean "not played".
pub const MUTED_FRET: i32 = -1;

/// State of one string in a chord diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StringState {
    Muted,
    Open,
    Fretted(NonZeroU16),
}

impl StringState {
    pub fn from_fret(fret: i32) -> Result<Self, TheoryError> {
        if fret == MUTED_FRET {
            return Ok(StringState::Muted);
        }
        let Ok(fret) = u16::try_from(fret) else {
            return Err(TheoryError::InvalidRange(format!(
                "fret {} is outside {}..={}",
                fret, MUTED_FRET, u16::MAX
            )));
        };
        Ok(match NonZeroU16::new(fret) {
            Some(fret) => StringState::Fretted(fret),
            None => StringState::Open,
        })
    }

    /// Fret number as diagram inputs write it, `-1` when muted.
    pub fn to_fret(self) -> i32 {
        match self {
            StringState::Muted => MUTED_FRET,
            StringState::Open => 0,
            StringState::Fretted(fret) => i32::from(fret.get()),
        }
    }

    pub fn fret(self) -> Option<u32> {
        match self {
            StringState::Muted => None,
            StringState::Open => Some(0),
            StringState::Fretted(fret) => Some(u32::from(fret.get())),
        }
    }
}

/// One state per string, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordShape {
    strings: Vec<StringState>,
}

impl ChordShape {
    /// Parse diagram frets, `-1` meaning muted.
    pub fn from_frets(frets: &[i32]) -> Result<Self, TheoryError> {
        let strings = frets
            .iter()
            .map(|&f| StringState::from_fret(f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { strings })
    }

    pub fn strings(&self) -> &[StringState] {
        &self.strings
    }

    /// Diagram frets, `-1` for muted strings.
    pub fn to_frets(&self) -> Vec<i32> {
        self.strings.iter().map(|s| s.to_fret()).collect()
    }

    /// Pitch class per string, `None` for muted strings.
    ///
    /// The shape must have exactly one state per string of `tuning`.
    pub fn resolve(&self, tuning: &StringTuning) -> Result<Vec<Option<PitchClass>>, TheoryError> {
        if self.strings.len() != tuning.string_count() {
            return Err(TheoryError::InvalidRange(format!(
                "shape has {} strings but the tuning has {}",
                self.strings.len(),
                tuning.string_count()
            )));
        }
        self.strings
            .iter()
            .enumerate()
            .map(|(string, state)| match state.fret() {
                Some(fret) => note_at(tuning, string, fret).map(Some),
                None => Ok(None),
            })
            .collect()
    }

    /// Whether every sounding string plays a note of `formula` over `root`.
    pub fn fits(
        &self,
        root: PitchClass,
        formula: &IntervalFormula,
        tuning: &StringTuning,
    ) -> Result<bool, TheoryError> {
        let valid = formula.pitch_classes(root);
        let notes = self.resolve(tuning)?;
        Ok(notes.into_iter().flatten().all(|pc| valid.contains(pc)))
    }
}
