// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chord walks through a key.
//!
//! A progression visits all seven degrees in order and plays each degree's
//! chord through a fixed walk of inversions. The simple walk climbs once
//! through every inversion. The smooth walk climbs and comes back down so
//! the next degree's root position follows without a large leap.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chord::{Chord, ChordArity, ChordInversion};
use super::hand::{self, HandSelection};
use super::harmony::diatonic_chords;
use super::note::{Key, MidiNote, MIDI_MAX};
use super::scale::{ScaleType, DEGREES};
use crate::error::{Result, TheoryError};

/// Largest downward bass move allowed between degrees in a smooth rendering
const MAX_BASS_DROP: i32 = 12;

const TRIAD_SIMPLE: [ChordInversion; 3] = [
    ChordInversion::Root,
    ChordInversion::First,
    ChordInversion::Second,
];

const TRIAD_SMOOTH: [ChordInversion; 4] = [
    ChordInversion::Root,
    ChordInversion::First,
    ChordInversion::Second,
    ChordInversion::First,
];

const SEVENTH_SIMPLE: [ChordInversion; 4] = [
    ChordInversion::Root,
    ChordInversion::First,
    ChordInversion::Second,
    ChordInversion::Third,
];

const SEVENTH_SMOOTH: [ChordInversion; 6] = [
    ChordInversion::Root,
    ChordInversion::First,
    ChordInversion::Second,
    ChordInversion::Third,
    ChordInversion::Second,
    ChordInversion::First,
];

/// Inversion walk variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStyle {
    /// Each inversion once, ascending
    Simple,
    /// Up through the inversions and back, minimizing the bass leap between degrees
    Smooth,
}

impl ProgressionStyle {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ProgressionStyle::Simple),
            "smooth" => Ok(ProgressionStyle::Smooth),
            _ => Err(TheoryError::parse("progression style", s)),
        }
    }
}

impl fmt::Display for ProgressionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionStyle::Simple => write!(f, "Simple"),
            ProgressionStyle::Smooth => write!(f, "Smooth"),
        }
    }
}

/// Inversions played on each degree
pub fn inversion_walk(arity: ChordArity, style: ProgressionStyle) -> &'static [ChordInversion] {
    match (arity, style) {
        (ChordArity::Triad, ProgressionStyle::Simple) => &TRIAD_SIMPLE,
        (ChordArity::Triad, ProgressionStyle::Smooth) => &TRIAD_SMOOTH,
        (ChordArity::Seventh, ProgressionStyle::Simple) => &SEVENTH_SIMPLE,
        (ChordArity::Seventh, ProgressionStyle::Smooth) => &SEVENTH_SMOOTH,
    }
}

/// An ordered walk of diatonic chords through a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    root: Key,
    scale_type: ScaleType,
    arity: ChordArity,
    style: ProgressionStyle,
    chords: Vec<Chord>,
}

impl Progression {
    /// Build the progression; only major and natural minor keys are supported
    pub fn new(
        root: Key,
        scale_type: ScaleType,
        arity: ChordArity,
        style: ProgressionStyle,
    ) -> Result<Self> {
        let walk = inversion_walk(arity, style);
        let mut chords = Vec::with_capacity(DEGREES * walk.len());
        for degree_chord in diatonic_chords(root, scale_type, arity)? {
            for &inversion in walk {
                chords.push(Chord::new(
                    degree_chord.root(),
                    degree_chord.chord_type(),
                    inversion,
                )?);
            }
        }

        Ok(Self {
            root,
            scale_type,
            arity,
            style,
            chords,
        })
    }

    /// Root, first, second inversion on every degree (21 chords)
    pub fn simple_triads(root: Key, scale_type: ScaleType) -> Result<Self> {
        Self::new(root, scale_type, ChordArity::Triad, ProgressionStyle::Simple)
    }

    /// Root, first, second, first on every degree (28 chords)
    pub fn smooth_triads(root: Key, scale_type: ScaleType) -> Result<Self> {
        Self::new(root, scale_type, ChordArity::Triad, ProgressionStyle::Smooth)
    }

    /// Root through third and back to first on every degree (42 chords)
    pub fn smooth_sevenths(root: Key, scale_type: ScaleType) -> Result<Self> {
        Self::new(root, scale_type, ChordArity::Seventh, ProgressionStyle::Smooth)
    }

    pub fn root(&self) -> Key {
        self.root
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    pub fn arity(&self) -> ChordArity {
        self.arity
    }

    pub fn style(&self) -> ProgressionStyle {
        self.style
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chords played on each degree
    pub fn steps_per_degree(&self) -> usize {
        inversion_walk(self.arity, self.style).len()
    }

    /// 1-based scale degree of the chord at `index`
    pub fn degree_at(&self, index: usize) -> Option<usize> {
        (index < self.chords.len()).then(|| index / self.steps_per_degree() + 1)
    }

    /// Voicing of every chord with roots anchored in `octave`.
    ///
    /// Smooth progressions lift a degree's chords by whole octaves when its
    /// first bass note would otherwise fall more than an octave below the
    /// previous chord's bass. A lift that would leave the MIDI range is
    /// skipped.
    pub fn midi_sequence(&self, octave: i32) -> Result<Vec<Vec<MidiNote>>> {
        let mut sequence: Vec<Vec<MidiNote>> = Vec::with_capacity(self.chords.len());

        for (index, group) in self.chords.chunks(self.steps_per_degree()).enumerate() {
            let mut voicings = group
                .iter()
                .map(|chord| chord.midi_notes(octave))
                .collect::<Result<Vec<_>>>()?;

            if self.style == ProgressionStyle::Smooth {
                if let Some(previous) = sequence.last() {
                    let lift = octave_lift(previous[0], &voicings);
                    if lift > 0 {
                        debug!(
                            degree = index + 1,
                            lift,
                            "lifting degree to avoid a downward bass leap"
                        );
                        for voicing in &mut voicings {
                            for note in voicing.iter_mut() {
                                *note += lift;
                            }
                        }
                    }
                }
            }

            sequence.extend(voicings);
        }

        Ok(sequence)
    }

    /// Voicings for the requested hand(s), each chord as one block
    pub fn midi_sequence_for_hand(
        &self,
        octave: i32,
        hand: HandSelection,
    ) -> Result<Vec<Vec<MidiNote>>> {
        self.midi_sequence(octave)?
            .iter()
            .map(|voicing| hand::block(voicing, hand))
            .collect()
    }

    pub fn name(&self) -> String {
        let size = match self.arity {
            ChordArity::Triad => "Triad",
            ChordArity::Seventh => "Seventh Chord",
        };
        format!(
            "{} {} {} Progression ({})",
            self.root.display_name(),
            self.scale_type,
            size,
            self.style
        )
    }
}

/// Whole-octave shift for a group of voicings following a chord whose bass
/// is `previous_bass`
fn octave_lift(previous_bass: MidiNote, voicings: &[Vec<MidiNote>]) -> MidiNote {
    let Some(bass) = voicings.first().and_then(|v| v.first()) else {
        return 0;
    };
    let top = voicings
        .iter()
        .flat_map(|v| v.iter().copied())
        .max()
        .unwrap_or(*bass) as i32;

    let mut lift = 0i32;
    while previous_bass as i32 - (*bass as i32 + lift) > MAX_BASS_DROP
        && top + lift + 12 <= MIDI_MAX
    {
        lift += 12;
    }
    lift as MidiNote
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chord::ChordType;

    #[test]
    fn test_simple_triad_progression() {
        let progression = Progression::simple_triads(Key::C, ScaleType::Major).unwrap();
        assert_eq!(progression.len(), 21);
        assert_eq!(progression.chords()[3].root(), Key::D);
        assert_eq!(progression.chords()[3].chord_type(), ChordType::Minor);
        assert_eq!(progression.chords()[20].inversion(), ChordInversion::Second);
        assert_eq!(progression.chords()[20].chord_type(), ChordType::Diminished);
    }

    #[test]
    fn test_smooth_triad_progression() {
        let progression = Progression::smooth_triads(Key::C, ScaleType::Major).unwrap();
        assert_eq!(progression.len(), 28);
        let inversions: Vec<ChordInversion> = progression.chords()[..4]
            .iter()
            .map(|c| c.inversion())
            .collect();
        assert_eq!(
            inversions,
            vec![
                ChordInversion::Root,
                ChordInversion::First,
                ChordInversion::Second,
                ChordInversion::First
            ]
        );
        assert_eq!(progression.degree_at(4), Some(2));
        assert_eq!(progression.degree_at(28), None);
    }

    #[test]
    fn test_seventh_progressions() {
        let smooth = Progression::smooth_sevenths(Key::A, ScaleType::NaturalMinor).unwrap();
        assert_eq!(smooth.len(), 42);
        assert_eq!(smooth.steps_per_degree(), 6);
        let walk: Vec<ChordInversion> = smooth.chords()[..6]
            .iter()
            .map(|c| c.inversion())
            .collect();
        assert_eq!(
            walk,
            vec![
                ChordInversion::Root,
                ChordInversion::First,
                ChordInversion::Second,
                ChordInversion::Third,
                ChordInversion::Second,
                ChordInversion::First
            ]
        );
        assert!(smooth.chords()[..6].iter().all(|c| c.root() == Key::A));
        assert_eq!(smooth.chords()[6].root(), Key::B);
        assert_eq!(smooth.chords()[6].inversion(), ChordInversion::Root);
        assert_eq!(smooth.chords()[6].chord_type(), ChordType::HalfDiminished7);

        let simple = Progression::new(
            Key::A,
            ScaleType::NaturalMinor,
            ChordArity::Seventh,
            ProgressionStyle::Simple,
        )
        .unwrap();
        assert_eq!(simple.len(), 28);
        assert_eq!(simple.chords()[3].inversion(), ChordInversion::Third);
    }

    #[test]
    fn test_unsupported_mode() {
        assert_eq!(
            Progression::smooth_triads(Key::D, ScaleType::Dorian),
            Err(TheoryError::UnsupportedHarmony {
                scale_type: ScaleType::Dorian
            })
        );
    }

    #[test]
    fn test_simple_midi_sequence() {
        let progression = Progression::simple_triads(Key::C, ScaleType::Major).unwrap();
        let sequence = progression.midi_sequence(4).unwrap();
        assert_eq!(sequence.len(), 21);
        assert_eq!(sequence[0], vec![60, 64, 67]);
        assert_eq!(sequence[1], vec![64, 67, 72]);
        assert_eq!(sequence[2], vec![67, 72, 76]);
        assert_eq!(sequence[3], vec![62, 65, 69]);
    }

    #[test]
    fn test_smooth_sequence_lifts_wrapped_degrees() {
        // B major: C#4 sits far below the B4 chords before it
        let progression = Progression::smooth_triads(Key::B, ScaleType::Major).unwrap();
        let sequence = progression.midi_sequence(4).unwrap();
        assert_eq!(sequence[3], vec![75, 78, 83]);
        assert_eq!(sequence[4], vec![73, 76, 80]);
    }

    #[test]
    fn test_smooth_sequence_has_no_large_bass_drop() {
        for root in Key::ALL {
            for scale_type in [ScaleType::Major, ScaleType::NaturalMinor] {
                for arity in [ChordArity::Triad, ChordArity::Seventh] {
                    let progression =
                        Progression::new(root, scale_type, arity, ProgressionStyle::Smooth)
                            .unwrap();
                    let sequence = progression.midi_sequence(4).unwrap();
                    for pair in sequence.windows(2) {
                        assert!(
                            pair[0][0] as i32 - pair[1][0] as i32 <= MAX_BASS_DROP,
                            "{}: {:?} -> {:?}",
                            progression,
                            pair[0],
                            pair[1]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_lift_respects_midi_ceiling() {
        let voicings = vec![vec![120, 124, 127]];
        assert_eq!(octave_lift(127, &voicings), 0);
        assert_eq!(octave_lift(75, &[vec![61, 64, 68]]), 12);
        assert_eq!(octave_lift(100, &[vec![61, 64, 68]]), 36);
        assert_eq!(octave_lift(70, &[vec![61, 64, 68]]), 0);
    }

    #[test]
    fn test_hand_sequence() {
        let progression = Progression::simple_triads(Key::C, ScaleType::Major).unwrap();
        let both = progression
            .midi_sequence_for_hand(4, HandSelection::Both)
            .unwrap();
        assert_eq!(both[0], vec![48, 52, 55, 60, 64, 67]);
    }

    #[test]
    fn test_name() {
        let progression = Progression::smooth_triads(Key::Ds, ScaleType::Major).unwrap();
        assert_eq!(progression.name(), "E♭ Major Triad Progression (Smooth)");
    }
}
