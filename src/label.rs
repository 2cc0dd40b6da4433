//! # Note Labels
//!
//! Bilingual note labels for diagrams: the name as spelled plus a localized name,
//! e.g. `C` / `Do` or `Db` / `Réb`.
//!
//! The table is keyed by spelling, not by pitch class, so `C#` and `Db` can carry
//! different localized names. A spelling missing from the table is still a valid label
//! as long as it names a note; its localized half repeats the name.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Canonical and localized name of one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPair {
    pub name: String,
    pub localized: String,
}

impl LabelPair {
    /// Two-line form used under keyboard keys: `"C\n(Do)"`.
    pub fn stacked(&self) -> String {
        format!("{}\n({})", self.name, self.localized)
    }

    /// Single-line form used beside open strings: `"C (Do)"`.
    pub fn inline(&self) -> String {
        format!("{} ({})", self.name, self.localized)
    }
}

/// Spelling -> localized name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelTable {
    names: BTreeMap<String, String>,
}

impl LabelTable {
    /// Build a table, rejecting keys that are not note names.
    pub fn new(names: BTreeMap<String, String>) -> Result<Self, TheoryError> {
        for key in names.keys() {
            if PitchClass::from_name(key).is_err() {
                return Err(TheoryError::Config(format!(
                    "label key '{}' is not a note name",
                    key
                )));
            }
        }
        Ok(Self { names })
    }

    /// Label for a spelled note name.
    ///
    /// # Examples
    /// ```
    /// use fretwise::EngineConfig;
    ///
    /// let labels = EngineConfig::builtin().unwrap().labels;
    /// assert_eq!(labels.pair("Db").unwrap().stacked(), "Db\n(Réb)");
    /// assert!(labels.pair("H").is_err());
    /// ```
    pub fn pair(&self, name: &str) -> Result<LabelPair, TheoryError> {
        PitchClass::from_name(name)?;
        Ok(LabelPair {
            name: name.to_string(),
            localized: self.localized(name).to_string(),
        })
    }

    /// Label for a pitch class, using its canonical sharp spelling.
    pub fn for_pitch_class(&self, pc: PitchClass) -> LabelPair {
        let name = pc.name();
        LabelPair {
            name: name.to_string(),
            localized: self.localized(name).to_string(),
        }
    }

    fn localized<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
