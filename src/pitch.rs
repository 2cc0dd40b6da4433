//! # Pitch Classes
//!
//! Canonical 12-tone representation of note names.
//!
//! ## Spelling
//! - Canonical names use sharps: `C C# D D# E F F# G G# A A# B` (index 0 = C)
//! - The flats `Db Eb Gb Ab Bb` are rewritten to their sharp equivalent through
//!   [`ENHARMONIC_FLATS`] before lookup, so `"Eb"` and `"D#"` are the same pitch class
//! - Names are case-sensitive; `"c"` is not a note
//!
//! ## Arithmetic
//! All arithmetic reduces with `rem_euclid(12)`, so subtracting a higher pitch class
//! from a lower one still lands in 0..=11.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

/// Chromatic scale using sharps. Index 0 = C.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and the sharp name they normalize to.
pub const ENHARMONIC_FLATS: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// A note name modulo the octave, always in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from a value that must already be in 0..=11.
    pub fn new(value: u8) -> Result<Self, TheoryError> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(TheoryError::InvalidRange(format!(
                "pitch class {} is outside 0..=11",
                value
            )))
        }
    }

    /// Reduce any semitone count to its pitch class.
    pub fn from_semitones(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    /// Resolve a note name, normalizing flats to sharps first.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let canonical = ENHARMONIC_FLATS
            .iter()
            .find(|(flat, _)| *flat == name)
            .map(|(_, sharp)| *sharp)
            .unwrap_or(name);

        CHROMATIC_SCALE
            .iter()
            .position(|n| *n == canonical)
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| TheoryError::UnknownNote {
                name: name.to_string(),
            })
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Canonical (sharp) name.
    pub fn name(self) -> &'static str {
        CHROMATIC_SCALE[self.0 as usize]
    }

    /// Move up (or down, for negative counts) by semitones, wrapping at the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitones(self.0 as i32 + semitones)
    }

    /// Ascending distance from `self` to `other`, in 0..=11.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }

    /// All twelve pitch classes, C first.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s)
    }
}

/// Resolve a note name to its pitch class.
///
/// # Examples
/// ```
/// use fretwise::note_to_pitch_class;
///
/// assert_eq!(note_to_pitch_class("D#").unwrap().value(), 3);
/// assert_eq!(note_to_pitch_class("Eb").unwrap().value(), 3);
/// assert!(note_to_pitch_class("E#").is_err());
/// ```
pub fn note_to_pitch_class(name: &str) -> Result<PitchClass, TheoryError> {
    PitchClass::from_name(name)
}

/// Canonical name of a raw pitch-class value. Fails outside 0..=11.
pub fn pitch_class_to_note_name(value: u8) -> Result<&'static str, TheoryError> {
    PitchClass::new(value).map(PitchClass::name)
}

/// Set of pitch classes stored as a 12-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pitch classes of `root + offset` for every offset, reduced mod 12.
    pub fn from_offsets(root: PitchClass, offsets: &[u8]) -> Self {
        offsets
            .iter()
            .map(|&offset| root.transpose(offset as i32))
            .collect()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.value();
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.value()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchClassSet::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}
