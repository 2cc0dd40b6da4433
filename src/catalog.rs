//! # Formula Catalog
//!
//! Named interval formulas: chords, modes and pentatonics all share one shape, an
//! ordered list of semitone offsets from a root.
//!
//! ## Offsets
//! - The first offset is 0 by convention (not enforced)
//! - Offsets may exceed 11 to put an extension in a higher octave, e.g. the 14 of a
//!   ninth chord
//! - A formula never has zero offsets
//!
//! The catalog is plain data handed to the engine. It is usually built from the
//! `formulas` section of a configuration document (see `config`).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::TheoryError;
use crate::pitch::{PitchClass, PitchClassSet};

/// An immutable, named sequence of semitone offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalFormula {
    name: String,
    offsets: Vec<u8>,
}

impl IntervalFormula {
    pub fn new(name: impl Into<String>, offsets: Vec<u8>) -> Result<Self, TheoryError> {
        let name = name.into();
        if offsets.is_empty() {
            return Err(TheoryError::Config(format!(
                "formula '{}' has no offsets",
                name
            )));
        }
        Ok(Self { name, offsets })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offsets(&self) -> &[u8] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Pitch classes this formula produces over `root`.
    pub fn pitch_classes(&self, root: PitchClass) -> PitchClassSet {
        PitchClassSet::from_offsets(root, &self.offsets)
    }
}

/// Lookup table from formula name to formula, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormulaCatalog {
    formulas: BTreeMap<String, IntervalFormula>,
}

impl FormulaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw name/offset pairs, rejecting empty formulas.
    pub fn from_table(table: BTreeMap<String, Vec<u8>>) -> Result<Self, TheoryError> {
        let mut catalog = Self::new();
        for (name, offsets) in table {
            catalog.insert(IntervalFormula::new(name, offsets)?);
        }
        Ok(catalog)
    }

    /// Add or replace a formula under its own name.
    pub fn insert(&mut self, formula: IntervalFormula) -> Option<IntervalFormula> {
        self.formulas.insert(formula.name.clone(), formula)
    }

    /// Look a formula up by name. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Result<&IntervalFormula, TheoryError> {
        self.formulas
            .get(name)
            .ok_or_else(|| TheoryError::UnknownFormula {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formulas.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formulas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntervalFormula> {
        self.formulas.values()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
