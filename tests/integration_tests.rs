// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for KEYWORK
//!
//! These tests exercise the public API across modules and check the
//! engine's numeric invariants over every key, quality, inversion, and
//! practical octave.

use keywork::config::{ExerciseFile, ExerciseOutput};
use keywork::music::chord::{chord_offsets, voice_leading_distance};
use keywork::music::circle::{next_key, previous_key};
use keywork::music::note::{midi_to_note, note_to_midi};
use keywork::music::scale::scale_steps;
use keywork::music::{
    Arpeggio, ArpeggioOctaves, ArpeggioType, Chord, ChordArity, ChordInversion, ChordType,
    HandSelection, Key, Progression, ProgressionStyle, Scale, ScaleType,
};
use keywork::TheoryError;

/// Octaves where every generated voicing stays inside the MIDI range
const SAFE_OCTAVES: std::ops::RangeInclusive<i32> = 1..=7;

#[test]
fn test_scale_steps_and_notes() {
    for scale_type in ScaleType::ALL {
        let total: u32 = scale_steps(scale_type).iter().map(|&s| s as u32).sum();
        assert_eq!(total, 12);

        for root in Key::ALL {
            let scale = Scale::new(root, scale_type);
            assert_eq!(scale.notes().len(), 8);
            assert_eq!(scale.notes()[0], scale.notes()[7]);
            assert_eq!(scale.notes()[0], root);
        }
    }
}

#[test]
fn test_scale_sequences_ascend_and_return() {
    for root in Key::ALL {
        for scale_type in ScaleType::ALL {
            let scale = Scale::new(root, scale_type);
            for octave in SAFE_OCTAVES {
                let midi = scale.midi_notes(octave).unwrap();
                assert!(midi.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(midi[7] - midi[0], 12);

                let full = scale.full_scale_sequence(octave).unwrap();
                assert_eq!(full.len(), 15);
                assert_eq!(full[0], full[14]);
            }
        }
    }
}

#[test]
fn test_chord_voicings_ascend_within_two_octaves() {
    for root in Key::ALL {
        for chord_type in ChordType::ALL {
            for octave in SAFE_OCTAVES {
                for chord in Chord::all_inversions(root, chord_type) {
                    let notes = chord.midi_notes(octave).unwrap();
                    assert_eq!(notes.len(), chord_offsets(chord_type).len());
                    assert!(
                        notes.windows(2).all(|w| w[0] < w[1]),
                        "{} at octave {}: {:?}",
                        chord,
                        octave,
                        notes
                    );
                    assert!(notes[notes.len() - 1] - notes[0] <= 24);
                }
            }
        }
    }
}

#[test]
fn test_bass_rises_through_inversions() {
    for root in Key::ALL {
        for chord_type in ChordType::ALL {
            let basses: Vec<u8> = Chord::all_inversions(root, chord_type)
                .iter()
                .map(|c| c.midi_notes(4).unwrap()[0])
                .collect();
            assert!(
                basses.windows(2).all(|w| w[0] <= w[1]),
                "{} {}: {:?}",
                root,
                chord_type,
                basses
            );
        }
    }
}

#[test]
fn test_inversion_arity() {
    for root in Key::ALL {
        for chord_type in ChordType::ALL {
            let third = Chord::new(root, chord_type, ChordInversion::Third);
            match chord_type.arity() {
                ChordArity::Triad => assert_eq!(
                    third,
                    Err(TheoryError::InvalidInversion {
                        chord_type,
                        inversion: ChordInversion::Third
                    })
                ),
                ChordArity::Seventh => assert!(third.is_ok()),
            }
        }
    }
}

#[test]
fn test_circle_of_fifths_cycle() {
    assert_eq!(next_key(Key::C), Key::G);
    assert_eq!(next_key(Key::F), Key::C);

    for start in Key::ALL {
        let mut key = start;
        for _ in 0..12 {
            key = next_key(key);
        }
        assert_eq!(key, start);
        assert_eq!(previous_key(next_key(start)), start);
    }
}

#[test]
fn test_midi_round_trip() {
    for key in Key::ALL {
        for octave in -1..=9 {
            match note_to_midi(key, octave) {
                Ok(midi) => assert_eq!(midi_to_note(midi as i32).unwrap(), (key, octave)),
                Err(TheoryError::InvalidRange { value }) => {
                    assert!(value > 127, "{}{} rejected as {}", key, octave, value)
                }
                Err(other) => panic!("unexpected error {:?}", other),
            }
        }
    }
}

#[test]
fn test_reference_voicings() {
    let c = |inversion| Chord::new(Key::C, ChordType::Major, inversion).unwrap();
    assert_eq!(c(ChordInversion::Root).midi_notes(4).unwrap(), vec![60, 64, 67]);
    assert_eq!(c(ChordInversion::First).midi_notes(4).unwrap(), vec![64, 67, 72]);
    assert_eq!(c(ChordInversion::Second).midi_notes(4).unwrap(), vec![67, 72, 76]);

    let f_second = Chord::new(Key::F, ChordType::Major, ChordInversion::Second).unwrap();
    let notes = f_second.midi_notes(4).unwrap();
    assert_eq!(notes, vec![72, 77, 81]);
    assert!(notes.iter().all(|&n| n > 71));

    let arpeggio = Arpeggio::new(Key::C, ArpeggioType::Major, ArpeggioOctaves::One);
    assert_eq!(
        arpeggio.full_sequence(4).unwrap(),
        vec![60, 64, 67, 72, 67, 64, 60]
    );

    let smooth = Progression::smooth_triads(Key::C, ScaleType::Major).unwrap();
    assert_eq!(smooth.len(), 28);
    let walk: Vec<ChordInversion> = smooth.chords()[..4].iter().map(|c| c.inversion()).collect();
    assert_eq!(
        walk,
        vec![
            ChordInversion::Root,
            ChordInversion::First,
            ChordInversion::Second,
            ChordInversion::First
        ]
    );
}

#[test]
fn test_hand_conventions_differ_by_material() {
    let chord = Chord::root_position(Key::G, ChordType::Major);
    let block = chord.midi_notes_for_hand(4, HandSelection::Both).unwrap();
    assert_eq!(block, vec![55, 59, 62, 67, 71, 74]);

    let arpeggio = Arpeggio::new(Key::G, ArpeggioType::Major, ArpeggioOctaves::One);
    let melodic = arpeggio.hand_sequence(4, HandSelection::Both).unwrap();
    assert_eq!(&melodic[..6], &[55, 67, 59, 71, 62, 74]);
    assert_eq!(melodic.len(), 14);
}

#[test]
fn test_progression_lengths() {
    for root in Key::ALL {
        for scale_type in [ScaleType::Major, ScaleType::NaturalMinor] {
            let lengths: Vec<usize> = [
                (ChordArity::Triad, ProgressionStyle::Simple),
                (ChordArity::Triad, ProgressionStyle::Smooth),
                (ChordArity::Seventh, ProgressionStyle::Simple),
                (ChordArity::Seventh, ProgressionStyle::Smooth),
            ]
            .iter()
            .map(|&(arity, style)| Progression::new(root, scale_type, arity, style).unwrap().len())
            .collect();
            assert_eq!(lengths, vec![21, 28, 28, 42]);
        }
    }
}

#[test]
fn test_smooth_seventh_walk_order() {
    let walk = [
        ChordInversion::Root,
        ChordInversion::First,
        ChordInversion::Second,
        ChordInversion::Third,
        ChordInversion::Second,
        ChordInversion::First,
    ];
    for root in Key::ALL {
        for scale_type in [ScaleType::Major, ScaleType::NaturalMinor] {
            let progression = Progression::smooth_sevenths(root, scale_type).unwrap();
            for (degree, group) in progression.chords().chunks(6).enumerate() {
                let inversions: Vec<ChordInversion> = group.iter().map(|c| c.inversion()).collect();
                assert_eq!(inversions, walk, "{} degree {}", progression, degree + 1);
                assert!(group.iter().all(|c| c.root() == group[0].root()));
            }
        }
    }
}

#[test]
fn test_smooth_progressions_avoid_large_leaps() {
    for root in Key::ALL {
        for scale_type in [ScaleType::Major, ScaleType::NaturalMinor] {
            for arity in [ChordArity::Triad, ChordArity::Seventh] {
                let progression =
                    Progression::new(root, scale_type, arity, ProgressionStyle::Smooth).unwrap();
                for octave in 2..=6 {
                    let voicings = progression.midi_sequence(octave).unwrap();
                    for pair in voicings.windows(2) {
                        assert!(pair[0][0] as i32 - pair[1][0] as i32 <= 12);
                        assert!(voice_leading_distance(&pair[0], &pair[1]) < 48);
                    }
                    assert!(voicings.iter().flatten().all(|&n| n <= 127));
                }
            }
        }
    }
}

#[test]
fn test_exercise_file_end_to_end() {
    let yaml = r#"
settings:
  name: "Theory Check"
  hand: both
exercises:
  - kind: chord
    key: C
    chord: major
    inversion: first
  - kind: scale
    key: Db
    hand: right
"#;

    let file = ExerciseFile::from_yaml(yaml).unwrap();
    let rendered = file.render_all().unwrap();

    assert_eq!(
        rendered[0].output,
        ExerciseOutput::Blocks(vec![vec![52, 55, 60, 64, 67, 72]])
    );
    assert_eq!(rendered[1].title, "D♭ Major Scale");
    assert_eq!(
        rendered[1].output,
        ExerciseOutput::Sequence(vec![61, 63, 65, 66, 68, 70, 72, 73, 72, 70, 68, 66, 65, 63, 61])
    );
}
