//! # Public API
//!
//! [`Engine`] binds one [`EngineConfig`] and answers the name-based questions a diagram
//! renderer asks: which keys to light, which frets to dot, what color each note gets and
//! how to label it.
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretwise::{Engine, FunctionalRole};
//!
//! let engine = Engine::builtin()?;
//!
//! let voicing = engine.voicing("A", "Minor", 1)?;
//! assert_eq!(voicing.notes(), &[0, 4, 9]);
//!
//! let positions = engine.positions("A", "Minor_Pentatonic", None)?;
//! assert!(positions.iter().any(|p| p.string == 0 && p.fret == 5));
//!
//! assert_eq!(engine.role("C", "Eb")?, FunctionalRole::Third);
//! # Ok::<(), fretwise::TheoryError>(())
//! ```
//!
//! Each call resolves names first, so an unknown note or formula fails before any
//! computation starts.

use crate::catalog::IntervalFormula;
use crate::config::EngineConfig;
use crate::error::TheoryError;
use crate::fretboard::{find_positions, note_at, FretPosition};
use crate::label::LabelPair;
use crate::pitch::PitchClass;
use crate::role::{classify, FunctionalRole};
use crate::shape::ChordShape;
use crate::voicing::{compute_voicing, AbsoluteVoicing};

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine over the built-in configuration.
    pub fn builtin() -> Result<Self, TheoryError> {
        EngineConfig::builtin().map(Self::new)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn formula(&self, name: &str) -> Result<&IntervalFormula, TheoryError> {
        self.config.catalog.get(name)
    }

    /// Keyboard voicing of `formula` over `root` after `inversion` inversions.
    pub fn voicing(
        &self,
        root: &str,
        formula: &str,
        inversion: usize,
    ) -> Result<AbsoluteVoicing, TheoryError> {
        let root = PitchClass::from_name(root)?;
        let formula = self.formula(formula)?;
        Ok(compute_voicing(root, formula, inversion))
    }

    /// Fretboard positions of `formula` over `root`, up to `max_fret` or the
    /// configured default.
    pub fn positions(
        &self,
        root: &str,
        formula: &str,
        max_fret: Option<i32>,
    ) -> Result<Vec<FretPosition>, TheoryError> {
        let root = PitchClass::from_name(root)?;
        let formula = self.formula(formula)?;
        let max_fret = max_fret.unwrap_or(self.config.max_fret);
        find_positions(root, formula, &self.config.tuning, max_fret)
    }

    pub fn role(&self, root: &str, note: &str) -> Result<FunctionalRole, TheoryError> {
        let root = PitchClass::from_name(root)?;
        let note = PitchClass::from_name(note)?;
        Ok(classify(root, note))
    }

    pub fn label(&self, name: &str) -> Result<LabelPair, TheoryError> {
        self.config.labels.pair(name)
    }

    /// Pitch class at a fret on the configured tuning.
    pub fn note_at(&self, string: usize, fret: u32) -> Result<PitchClass, TheoryError> {
        note_at(&self.config.tuning, string, fret)
    }

    /// Notes of a diagram shape on the configured tuning, `None` for muted strings.
    pub fn shape_notes(&self, shape: &ChordShape) -> Result<Vec<Option<PitchClass>>, TheoryError> {
        shape.resolve(&self.config.tuning)
    }

    /// Whether every sounding string of `shape` plays a note of `formula` over `root`.
    pub fn shape_fits(
        &self,
        shape: &ChordShape,
        root: &str,
        formula: &str,
    ) -> Result<bool, TheoryError> {
        let root = PitchClass::from_name(root)?;
        let formula = self.formula(formula)?;
        shape.fits(root, formula, &self.config.tuning)
    }
}
