//! Harmonic role of a note relative to a root, used by renderers to pick colors.

use serde::Serialize;
use std::fmt;

use crate::pitch::PitchClass;

/// Harmonic function of a note over a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionalRole {
    Root,
    Third,
    Fifth,
    Seventh,
    /// 2nd/9th, 4th/11th, 6th/13th
    Extension,
    /// Minor 2nd, tritone, minor 6th
    Default,
}

impl FunctionalRole {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionalRole::Root => "root",
            FunctionalRole::Third => "third",
            FunctionalRole::Fifth => "fifth",
            FunctionalRole::Seventh => "seventh",
            FunctionalRole::Extension => "extension",
            FunctionalRole::Default => "default",
        }
    }
}

impl fmt::Display for FunctionalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Indexed by ascending interval in semitones
const ROLES: [FunctionalRole; 12] = [
    FunctionalRole::Root,      // 0
    FunctionalRole::Default,   // 1
    FunctionalRole::Extension, // 2
    FunctionalRole::Third,     // 3
    FunctionalRole::Third,     // 4
    FunctionalRole::Extension, // 5
    FunctionalRole::Default,   // 6
    FunctionalRole::Fifth,     // 7
    FunctionalRole::Default,   // 8
    FunctionalRole::Extension, // 9
    FunctionalRole::Seventh,   // 10
    FunctionalRole::Seventh,   // 11
];

const INTERVAL_NAMES: [&str; 12] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "TT", "P5", "m6", "M6", "m7", "M7",
];

/// Role of `note` over `root`. Total: every pair has a role.
///
/// # Examples
/// ```
/// use fretwise::{classify, FunctionalRole, PitchClass};
///
/// let c = PitchClass::from_name("C").unwrap();
/// let e = PitchClass::from_name("E").unwrap();
/// let f_sharp = PitchClass::from_name("F#").unwrap();
///
/// assert_eq!(classify(c, e), FunctionalRole::Third);
/// assert_eq!(classify(c, f_sharp), FunctionalRole::Default);
/// ```
pub fn classify(root: PitchClass, note: PitchClass) -> FunctionalRole {
    ROLES[root.interval_to(note) as usize]
}

/// Short interval name (`P1`, `m3`, `TT`, `M7`, ...) of `note` over `root`.
pub fn interval_name(root: PitchClass, note: PitchClass) -> &'static str {
    INTERVAL_NAMES[root.interval_to(note) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(name: &str) -> PitchClass {
        PitchClass::from_name(name).unwrap()
    }

    #[test]
    fn test_classify_over_c() {
        let expected = [
            ("C", FunctionalRole::Root),
            ("C#", FunctionalRole::Default),
            ("D", FunctionalRole::Extension),
            ("D#", FunctionalRole::Third),
            ("E", FunctionalRole::Third),
            ("F", FunctionalRole::Extension),
            ("F#", FunctionalRole::Default),
            ("G", FunctionalRole::Fifth),
            ("G#", FunctionalRole::Default),
            ("A", FunctionalRole::Extension),
            ("A#", FunctionalRole::Seventh),
            ("B", FunctionalRole::Seventh),
        ];
        for (note, role) in expected {
            assert_eq!(classify(pc("C"), pc(note)), role, "C -> {}", note);
        }
    }

    #[test]
    fn test_classify_wraps_below_root() {
        // G is numerically below A but is A's minor seventh
        assert_eq!(classify(pc("A"), pc("G")), FunctionalRole::Seventh);
        assert_eq!(classify(pc("B"), pc("D")), FunctionalRole::Third);
        assert_eq!(classify(pc("Bb"), pc("F")), FunctionalRole::Fifth);
    }

    #[test]
    fn test_classify_is_transposition_invariant() {
        for root in PitchClass::all() {
            for step in 0..12 {
                assert_eq!(classify(root, root.transpose(step)), ROLES[step as usize]);
            }
        }
    }

    #[test]
    fn test_interval_names() {
        assert_eq!(interval_name(pc("C"), pc("C")), "P1");
        assert_eq!(interval_name(pc("A"), pc("C")), "m3");
        assert_eq!(interval_name(pc("C"), pc("F#")), "TT");
        assert_eq!(interval_name(pc("D"), pc("C#")), "M7");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(FunctionalRole::Seventh.to_string(), "seventh");
        assert_eq!(
            serde_json::to_string(&FunctionalRole::Extension).unwrap(),
            "\"extension\""
        );
    }
}
