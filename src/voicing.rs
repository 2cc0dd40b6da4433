//! # Voicing Engine
//!
//! Expands a root, a formula and an inversion count into absolute semitone values for
//! a two-octave keyboard display.
//!
//! ## Pipeline
//! 1. **Transpose**: `root + offset` for every offset, with no octave reduction, so a
//!    14 stays an octave above the 2
//! 2. **Invert**: `inversion` times, take the lowest voice off the front and append it
//!    an octave higher
//! 3. **Normalize**: shift every voice by the same whole number of octaves so the
//!    lowest voice lands in 0..=11
//!
//! Value 0 is the lowest C of the display ("Display-C"). Only the minimum voice drives
//! the normalization shift, so wide formulas can reach past [`DISPLAY_WINDOW`]; clipping
//! is left to the renderer ([`AbsoluteVoicing::visible`]).
//!
//! ## Inversion Counts
//! Any count is accepted. Past the number of voices the rotation keeps cycling and
//! every full cycle raises all voices by an octave, which normalization then removes.
//! Inverting a triad 3 times therefore gives the root position back.

use serde::Serialize;

use crate::catalog::IntervalFormula;
use crate::pitch::PitchClass;

/// Semitones shown by the keyboard display: two octaves, 14 white keys.
pub const DISPLAY_WINDOW: i32 = 24;

/// Octave-placed voices, ordered as produced by the inversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AbsoluteVoicing(Vec<i32>);

impl AbsoluteVoicing {
    pub fn notes(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lowest(&self) -> Option<i32> {
        self.0.iter().copied().min()
    }

    /// Pitch class of each voice, in voice order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.0
            .iter()
            .map(|&n| PitchClass::from_semitones(n))
            .collect()
    }

    /// Whether every voice is inside `0..size`.
    pub fn fits_window(&self, size: i32) -> bool {
        self.0.iter().all(|&n| (0..size).contains(&n))
    }

    /// Voices inside `0..size`, for displays that clip wide voicings.
    pub fn visible(&self, size: i32) -> impl Iterator<Item = i32> + '_ {
        self.0
            .iter()
            .copied()
            .filter(move |n| (0..size).contains(n))
    }
}

/// Compute the voicing of `formula` over `root` after `inversion` inversions.
///
/// # Examples
/// ```
/// use fretwise::{compute_voicing, IntervalFormula, PitchClass};
///
/// let minor = IntervalFormula::new("Minor", vec![0, 3, 7]).unwrap();
/// let a = PitchClass::from_name("A").unwrap();
///
/// assert_eq!(compute_voicing(a, &minor, 0).notes(), &[9, 12, 16]);
/// // First inversion: C E A
/// assert_eq!(compute_voicing(a, &minor, 1).notes(), &[0, 4, 9]);
/// ```
pub fn compute_voicing(
    root: PitchClass,
    formula: &IntervalFormula,
    inversion: usize,
) -> AbsoluteVoicing {
    let raw: Vec<i32> = formula
        .offsets()
        .iter()
        .map(|&offset| root.value() as i32 + offset as i32)
        .collect();

    AbsoluteVoicing(normalize(&invert(&raw, inversion)))
}

/// Rotate the lowest-first voice to the top `count` times, raising it an octave each
/// time it moves.
///
/// Full cycles are dropped: each one lifts every voice by the same octave, which
/// [`normalize`] takes back off.
fn invert(notes: &[i32], count: usize) -> Vec<i32> {
    if notes.is_empty() {
        return Vec::new();
    }

    let steps = count % notes.len();
    let mut inverted: Vec<i32> = notes[steps..]
        .iter()
        .chain(&notes[..steps])
        .copied()
        .collect();
    for n in inverted.iter_mut().skip(notes.len() - steps) {
        *n += 12;
    }
    inverted
}

/// Shift all voices by whole octaves until the lowest lies in 0..=11.
///
/// Applying it to an already-normalized voicing changes nothing.
pub fn normalize(notes: &[i32]) -> Vec<i32> {
    let Some(lowest) = notes.iter().copied().min() else {
        return Vec::new();
    };
    let shift = lowest.div_euclid(12) * 12;
    notes.iter().map(|&n| n - shift).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(offsets: &[u8]) -> IntervalFormula {
        IntervalFormula::new("Test", offsets.to_vec()).unwrap()
    }

    fn pc(name: &str) -> PitchClass {
        PitchClass::from_name(name).unwrap()
    }

    #[test]
    fn test_root_position() {
        let major = formula(&[0, 4, 7]);
        assert_eq!(compute_voicing(pc("C"), &major, 0).notes(), &[0, 4, 7]);
        assert_eq!(compute_voicing(pc("B"), &major, 0).notes(), &[11, 15, 18]);
    }

    #[test]
    fn test_inversions_rotate_and_raise() {
        let major = formula(&[0, 4, 7]);
        // E G C
        assert_eq!(compute_voicing(pc("C"), &major, 1).notes(), &[4, 7, 12]);
        // G C E
        assert_eq!(compute_voicing(pc("C"), &major, 2).notes(), &[7, 12, 16]);
        // back to root position
        assert_eq!(compute_voicing(pc("C"), &major, 3).notes(), &[0, 4, 7]);
        assert_eq!(compute_voicing(pc("C"), &major, 4).notes(), &[4, 7, 12]);
    }

    #[test]
    fn test_inversion_drops_octave_when_lowest_passes_twelve() {
        // G B D: second inversion starts on D (14) and normalizes down to 2
        let major = formula(&[0, 4, 7]);
        assert_eq!(compute_voicing(pc("G"), &major, 2).notes(), &[2, 7, 11]);
    }

    #[test]
    fn test_extension_keeps_its_span() {
        let dominant9 = formula(&[0, 4, 7, 10, 14]);
        assert_eq!(
            compute_voicing(pc("A"), &dominant9, 0).notes(),
            &[9, 13, 16, 19, 23]
        );

        // Four voices moved up; the ninth stays first and above the new lowest voice
        assert_eq!(
            compute_voicing(pc("A"), &dominant9, 4).notes(),
            &[11, 9, 13, 16, 19]
        );
    }

    #[test]
    fn test_wide_formula_passes_the_window() {
        let thirteenth = formula(&[0, 4, 7, 10, 14, 17, 21]);
        let voicing = compute_voicing(pc("B"), &thirteenth, 0);
        assert_eq!(voicing.notes(), &[11, 15, 18, 21, 25, 28, 32]);
        assert_eq!(voicing.lowest(), Some(11));
        assert!(!voicing.fits_window(DISPLAY_WINDOW));
        assert_eq!(
            voicing.visible(DISPLAY_WINDOW).collect::<Vec<_>>(),
            vec![11, 15, 18, 21]
        );
    }

    #[test]
    fn test_huge_inversion_count() {
        let major = formula(&[0, 4, 7]);
        let steps = usize::MAX % 3;
        assert_eq!(
            compute_voicing(pc("C"), &major, usize::MAX),
            compute_voicing(pc("C"), &major, steps)
        );
    }

    #[test]
    fn test_normalize_negative_and_high() {
        assert_eq!(normalize(&[-3, 1, 4]), vec![9, 13, 16]);
        assert_eq!(normalize(&[26, 30, 33]), vec![2, 6, 9]);
        assert_eq!(normalize(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_normalize_idempotent() {
        for notes in [vec![0, 4, 7], vec![11, 21, 25, 28, 31], vec![-13, 0, 12]] {
            let once = normalize(&notes);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_invert_raises_only_moved_voices() {
        assert_eq!(invert(&[0, 4, 7], 1), vec![4, 7, 12]);
        assert_eq!(invert(&[0, 4, 7], 2), vec![7, 12, 16]);
        assert_eq!(invert(&[0, 4, 7], 3), vec![0, 4, 7]);
        assert_eq!(invert(&[], 5), Vec::<i32>::new());
    }
}
