//! # Engine Configuration
//!
//! The static tables the engine works from (formula catalog, string tuning, label
//! translations and the default fret range) travel together as one [`EngineConfig`]
//! value. Nothing here is global: build as many configs as needed and hand each to its
//! own [`Engine`](crate::Engine).
//!
//! ## Format
//! Configs are YAML documents with kebab-case keys:
//! ```yaml
//! max-fret: 15
//! tuning: [D, A, D, G, B, E]
//! formulas:
//!   Minor: [0, 3, 7]
//! labels:
//!   C: Do
//! ```
//! Every section is optional. A missing section is taken whole from the built-in
//! defaults in `data/default.yaml`; a present section replaces the default one
//! entirely.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::FormulaCatalog;
use crate::error::TheoryError;
use crate::fretboard::StringTuning;
use crate::label::LabelTable;

const DEFAULT_CONFIG: &str = include_str!("../data/default.yaml");

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    pub max_fret: Option<i32>,
    pub tuning: Option<Vec<String>>,
    pub formulas: Option<BTreeMap<String, Vec<u8>>>,
    pub labels: Option<BTreeMap<String, String>>,
}

impl RawConfig {
    /// Fill every missing section from `defaults`.
    fn or(self, defaults: RawConfig) -> RawConfig {
        RawConfig {
            max_fret: self.max_fret.or(defaults.max_fret),
            tuning: self.tuning.or(defaults.tuning),
            formulas: self.formulas.or(defaults.formulas),
            labels: self.labels.or(defaults.labels),
        }
    }
}

/// Validated tables for one engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub catalog: FormulaCatalog,
    pub tuning: StringTuning,
    pub labels: LabelTable,
    pub max_fret: i32,
}

impl EngineConfig {
    /// Defaults compiled into the crate: standard tuning, 12 frets, common chords,
    /// modes and pentatonics, French solfège labels.
    pub fn builtin() -> Result<Self, TheoryError> {
        Self::from_raw(parse_raw(DEFAULT_CONFIG)?)
    }

    /// Parse a YAML document, taking missing sections from the built-in defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, TheoryError> {
        let raw = parse_raw(content)?;
        Self::from_raw(raw.or(parse_raw(DEFAULT_CONFIG)?))
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let display = path.display();
        let content = fs::read_to_string(path)
            .map_err(|e| TheoryError::Config(format!("{}: {}", display, e)))?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_yaml_str(&content)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, TheoryError> {
        let tuning = match &raw.tuning {
            Some(names) => StringTuning::from_names(names.as_slice())
                .map_err(|e| TheoryError::Config(format!("tuning: {}", e)))?,
            None => StringTuning::standard(),
        };
        let catalog = FormulaCatalog::from_table(raw.formulas.unwrap_or_default())?;
        let labels = LabelTable::new(raw.labels.unwrap_or_default())?;
        let max_fret = raw.max_fret.unwrap_or(12);
        if max_fret < 0 {
            return Err(TheoryError::Config(format!(
                "max-fret {} is negative",
                max_fret
            )));
        }

        debug!(
            formulas = catalog.len(),
            labels = labels.len(),
            strings = tuning.string_count(),
            max_fret,
            "configuration ready"
        );

        Ok(Self {
            catalog,
            tuning,
            labels,
            max_fret,
        })
    }
}

fn parse_raw(content: &str) -> Result<RawConfig, TheoryError> {
    // An empty document deserializes as unit, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| TheoryError::Config(e.to_string()))
}
