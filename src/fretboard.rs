//! # Fretboard Search
//!
//! Finds every (string, fret) on a tuned stringed instrument whose note belongs to a
//! formula.
//!
//! ## Strings
//! String 0 is the lowest-pitched string. The standard tuning has six strings
//! (E A D G B E), but a [`StringTuning`] can hold any non-zero number of them and all
//! string-index checks use the tuning's own length.
//!
//! ## Search
//! The formula is reduced to a `PitchClassSet` once, then every string is scanned
//! from fret 0 to `max_fret` inclusive. Results come out string-major, fret-ascending.

use serde::Serialize;

use crate::catalog::IntervalFormula;
use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Open-string pitch classes, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringTuning(Vec<PitchClass>);

impl StringTuning {
    pub fn new(strings: Vec<PitchClass>) -> Result<Self, TheoryError> {
        if strings.is_empty() {
            return Err(TheoryError::InvalidRange(
                "a tuning needs at least one string".to_string(),
            ));
        }
        Ok(Self(strings))
    }

    /// Build a tuning from note names, lowest string first.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TheoryError> {
        let strings = names
            .iter()
            .map(|n| PitchClass::from_name(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(strings)
    }

    /// Standard six-string guitar tuning: E A D G B E.
    pub fn standard() -> Self {
        // 4=E, 9=A, 2=D, 7=G, 11=B
        let strings = [4, 9, 2, 7, 11, 4]
            .into_iter()
            .map(PitchClass::from_semitones)
            .collect();
        Self(strings)
    }

    pub fn string_count(&self) -> usize {
        self.0.len()
    }

    pub fn strings(&self) -> &[PitchClass] {
        &self.0
    }

    /// Open pitch of one string.
    pub fn open(&self, string: usize) -> Result<PitchClass, TheoryError> {
        match self.0.get(string) {
            Some(&open) => Ok(open),
            None => Err(TheoryError::InvalidRange(format!(
                "string index {} is outside 0..={}",
                string,
                self.0.len() - 1
            ))),
        }
    }
}

impl Default for StringTuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// A sounding position on the fretboard. Fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FretPosition {
    pub string: usize,
    pub fret: u32,
}

impl FretPosition {
    pub fn new(string: usize, fret: u32) -> Self {
        Self { string, fret }
    }
}

/// Pitch class sounding at `fret` on `string`.
///
/// # Examples
/// ```
/// use fretwise::{note_at, StringTuning};
///
/// let tuning = StringTuning::standard();
/// assert_eq!(note_at(&tuning, 0, 5).unwrap().name(), "A");
/// assert_eq!(note_at(&tuning, 4, 1).unwrap().name(), "C");
/// assert!(note_at(&tuning, 6, 0).is_err());
/// ```
pub fn note_at(
    tuning: &StringTuning,
    string: usize,
    fret: u32,
) -> Result<PitchClass, TheoryError> {
    let open = tuning.open(string)?;
    Ok(open.transpose((fret % 12) as i32))
}

/// Every position from fret 0 to `max_fret` whose note belongs to `formula` over `root`.
///
/// A negative `max_fret` fails with [`TheoryError::InvalidRange`]. No match at all is
/// an empty list, not an error.
///
/// # Cost
/// Any non-negative `max_fret` is accepted. Time and memory grow linearly with it: every
/// string is scanned fret by fret and each match is stored, so `i32::MAX` asks for
/// billions of positions. Callers passing user input should bound it first (the
/// configured default is 12).
///
/// # Examples
/// ```
/// use fretwise::{find_positions, FretPosition, IntervalFormula, PitchClass, StringTuning};
///
/// let pentatonic = IntervalFormula::new("Minor_Pentatonic", vec![0, 3, 5, 7, 10]).unwrap();
/// let a = PitchClass::from_name("A").unwrap();
/// let positions = find_positions(a, &pentatonic, &StringTuning::standard(), 12).unwrap();
///
/// assert!(positions.contains(&FretPosition::new(0, 5)));
/// assert!(positions.contains(&FretPosition::new(1, 0)));
/// ```
pub fn find_positions(
    root: PitchClass,
    formula: &IntervalFormula,
    tuning: &StringTuning,
    max_fret: i32,
) -> Result<Vec<FretPosition>, TheoryError> {
    let Ok(max_fret) = u32::try_from(max_fret) else {
        return Err(TheoryError::InvalidRange(format!(
            "max fret {} is negative",
            max_fret
        )));
    };
    let valid = formula.pitch_classes(root);

    let mut positions = Vec::new();
    for (string, open) in tuning.strings().iter().enumerate() {
        for fret in 0..=max_fret {
            if valid.contains(open.transpose((fret % 12) as i32)) {
                positions.push(FretPosition { string, fret });
            }
        }
    }
    Ok(positions)
}
