pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod fretboard;
pub mod label;
pub mod pitch;
pub mod role;
pub mod shape;
pub mod voicing;

pub use catalog::{FormulaCatalog, IntervalFormula};
pub use config::{EngineConfig, RawConfig};
pub use engine::Engine;
pub use error::*;
pub use fretboard::{find_positions, note_at, FretPosition, StringTuning};
pub use label::{LabelPair, LabelTable};
pub use pitch::{note_to_pitch_class, pitch_class_to_note_name, PitchClass, PitchClassSet};
pub use role::{classify, interval_name, FunctionalRole};
pub use shape::{ChordShape, StringState, MUTED_FRET};
pub use voicing::{compute_voicing, normalize, AbsoluteVoicing, DISPLAY_WINDOW};
