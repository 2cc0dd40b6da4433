//! Integration tests for the fretwise engine
//!
//! Exercises voicings, fretboard search, roles and labels through the public API with
//! the built-in configuration.

use fretwise::pitch::CHROMATIC_SCALE;
use fretwise::{
    classify, compute_voicing, find_positions, normalize, note_to_pitch_class, Engine,
    EngineConfig, FretPosition, FunctionalRole, PitchClass, StringTuning, TheoryError,
};
use pretty_assertions::assert_eq;

fn config() -> EngineConfig {
    EngineConfig::builtin().expect("built-in configuration should load")
}

fn voices(engine: &Engine, root: &str, formula: &str, inversion: usize) -> Vec<i32> {
    engine
        .voicing(root, formula, inversion)
        .unwrap()
        .notes()
        .to_vec()
}

#[test]
fn test_sharp_and_flat_spellings_agree() {
    let pairs = [
        ("C#", "Db"),
        ("D#", "Eb"),
        ("F#", "Gb"),
        ("G#", "Ab"),
        ("A#", "Bb"),
    ];
    for (sharp, flat) in pairs {
        assert_eq!(note_to_pitch_class(sharp), note_to_pitch_class(flat));
    }
    assert_eq!(note_to_pitch_class("Eb").unwrap().value(), 3);
    for (i, name) in CHROMATIC_SCALE.iter().enumerate() {
        assert_eq!(note_to_pitch_class(name).unwrap().value() as usize, i);
    }
}

#[test]
fn test_root_position_lowest_voice_in_first_octave() {
    let config = config();
    for formula in config.catalog.iter() {
        for root in PitchClass::all() {
            let voicing = compute_voicing(root, formula, 0);
            let lowest = voicing.lowest().unwrap();
            assert!(
                (0..12).contains(&lowest),
                "{} over {} starts at {}",
                formula.name(),
                root,
                lowest
            );
        }
    }
}

#[test]
fn test_inversions_keep_pitch_classes() {
    let config = config();
    for formula in config.catalog.iter() {
        for root in PitchClass::all() {
            let raw: Vec<PitchClass> = formula
                .offsets()
                .iter()
                .map(|&o| root.transpose(o as i32))
                .collect();
            let valid = formula.pitch_classes(root);
            for k in 0..(formula.len() * 2 + 1) {
                let voicing = compute_voicing(root, formula, k);
                assert_eq!(voicing.len(), formula.len());
                let lowest = voicing.lowest().unwrap();
                assert!((0..12).contains(&lowest));

                // Voice i of inversion k is raw voice (i + k) mod n
                for (i, pc) in voicing.pitch_classes().into_iter().enumerate() {
                    assert_eq!(pc, raw[(i + k) % formula.len()]);
                    assert!(valid.contains(pc));
                }
            }
        }
    }
}

#[test]
fn test_normalization_is_idempotent_on_voicings() {
    let config = config();
    for formula in config.catalog.iter() {
        for k in 0..formula.len() {
            let voicing = compute_voicing(PitchClass::from_semitones(11), formula, k);
            assert_eq!(normalize(voicing.notes()), voicing.notes().to_vec());
        }
    }
}

#[test]
fn test_a_minor_pentatonic_positions() {
    let config = config();
    let a = note_to_pitch_class("A").unwrap();
    let formula = config.catalog.get("Minor_Pentatonic").unwrap();
    let positions = find_positions(a, formula, &StringTuning::standard(), 12).unwrap();

    assert!(positions.contains(&FretPosition::new(0, 5)));
    assert!(positions.contains(&FretPosition::new(1, 0)));

    let valid = formula.pitch_classes(a);
    for p in &positions {
        let open = StringTuning::standard().strings()[p.string];
        assert!(valid.contains(open.transpose(p.fret as i32)));
    }
    // Five per octave on every string, plus fret 12 on the five strings whose open
    // note is in the scale (all but B)
    assert_eq!(positions.len(), 6 * 5 + 5);
}

#[test]
fn test_open_strings_only_at_fret_zero() {
    let engine = Engine::new(config());
    let positions = engine.positions("G", "Major", Some(0)).unwrap();
    assert!(positions.iter().all(|p| p.fret == 0));
    // G B D: open D, G, B ring
    assert_eq!(
        positions,
        vec![
            FretPosition::new(2, 0),
            FretPosition::new(3, 0),
            FretPosition::new(4, 0),
        ]
    );
}

#[test]
fn test_classify_examples() {
    let c = PitchClass::C;
    let e = PitchClass::from_semitones(4);
    let f_sharp = PitchClass::from_semitones(6);
    assert_eq!(classify(c, e), FunctionalRole::Third);
    assert_eq!(classify(c, f_sharp), FunctionalRole::Default);
}

#[test]
fn test_engine_end_to_end() {
    let engine = Engine::new(config());

    assert_eq!(voices(&engine, "C", "Major7", 0), vec![0, 4, 7, 11]);
    assert_eq!(voices(&engine, "Bb", "Major", 0), vec![10, 14, 17]);
    assert_eq!(voices(&engine, "Bb", "Major", 1), vec![2, 5, 10]);
    assert_eq!(voices(&engine, "D", "Dominant9", 0), vec![2, 6, 9, 12, 16]);

    let label = engine.label("Gb").unwrap();
    assert_eq!(label.name, "Gb");
    assert_eq!(label.localized, "Solb");
    assert_eq!(engine.role("A", "G").unwrap(), FunctionalRole::Seventh);
}

#[test]
fn test_errors_are_typed() {
    let engine = Engine::new(config());
    assert_eq!(
        engine.voicing("Cb", "Major", 0),
        Err(TheoryError::UnknownNote {
            name: "Cb".to_string()
        })
    );
    assert_eq!(
        engine.voicing("C", "major", 0),
        Err(TheoryError::UnknownFormula {
            name: "major".to_string()
        })
    );
    assert!(matches!(
        engine.positions("C", "Major", Some(-1)),
        Err(TheoryError::InvalidRange(_))
    ));
    assert!(matches!(engine.note_at(6, 0), Err(TheoryError::InvalidRange(_))));
}

#[test]
fn test_independent_configs() {
    let standard = Engine::new(config());
    let drop_d_config = EngineConfig::from_yaml_str("tuning: [D, A, D, G, B, E]").unwrap();
    let drop_d = Engine::new(drop_d_config);

    let on_standard = standard.positions("D", "Major", Some(0)).unwrap();
    let on_drop_d = drop_d.positions("D", "Major", Some(0)).unwrap();
    assert_eq!(
        on_standard,
        vec![FretPosition::new(1, 0), FretPosition::new(2, 0)]
    );
    assert_eq!(
        on_drop_d,
        vec![
            FretPosition::new(0, 0),
            FretPosition::new(1, 0),
            FretPosition::new(2, 0),
        ]
    );
}
