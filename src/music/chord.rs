// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords and inversion voicing.
//!
//! Each chord type has an ascending list of semitone offsets from its root.
//! Inversion `i` rotates that list left by `i` and lifts the rotated-out
//! tones by an octave, so every voicing is strictly ascending and spans at
//! most two octaves. F major second inversion from F4 is therefore
//! C5 F5 A5 (72, 77, 81), never C4.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hand::{self, HandSelection};
use super::note::{checked_midi, note_to_midi, Key, MidiNote};
use crate::error::{Result, TheoryError};

const MAJOR: [u8; 3] = [0, 4, 7];
const MINOR: [u8; 3] = [0, 3, 7];
const DIMINISHED: [u8; 3] = [0, 3, 6];
const AUGMENTED: [u8; 3] = [0, 4, 8];

const MAJOR7: [u8; 4] = [0, 4, 7, 11];
const DOMINANT7: [u8; 4] = [0, 4, 7, 10];
const MINOR7: [u8; 4] = [0, 3, 7, 10];
const HALF_DIMINISHED7: [u8; 4] = [0, 3, 6, 10];
const DIMINISHED7: [u8; 4] = [0, 3, 6, 9];
const MINOR_MAJOR7: [u8; 4] = [0, 3, 7, 11];
const AUGMENTED7: [u8; 4] = [0, 4, 8, 10];

const TRIAD_INVERSIONS: [ChordInversion; 3] = [
    ChordInversion::Root,
    ChordInversion::First,
    ChordInversion::Second,
];

/// Number of chord tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordArity {
    Triad,
    Seventh,
}

impl ChordArity {
    /// Parse chord size from string ("triad", "sevenths", "7th")
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "triad" | "triads" => Ok(ChordArity::Triad),
            "seventh" | "sevenths" | "7th" | "7ths" => Ok(ChordArity::Seventh),
            _ => Err(TheoryError::parse("chord size", s)),
        }
    }

    pub fn tone_count(self) -> usize {
        match self {
            ChordArity::Triad => 3,
            ChordArity::Seventh => 4,
        }
    }

    /// Inversions that exist for chords of this size
    pub fn inversions(self) -> &'static [ChordInversion] {
        match self {
            ChordArity::Triad => &TRIAD_INVERSIONS,
            ChordArity::Seventh => &ChordInversion::ALL,
        }
    }
}

/// Chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Dominant7,
    Minor7,
    HalfDiminished7,
    Diminished7,
    MinorMajor7,
    Augmented7,
}

impl ChordType {
    pub const ALL: [ChordType; 11] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Major7,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::HalfDiminished7,
        ChordType::Diminished7,
        ChordType::MinorMajor7,
        ChordType::Augmented7,
    ];

    pub fn arity(self) -> ChordArity {
        match self {
            ChordType::Major | ChordType::Minor | ChordType::Diminished | ChordType::Augmented => {
                ChordArity::Triad
            }
            _ => ChordArity::Seventh,
        }
    }

    /// Parse chord type from string ("major", "m7", "half_diminished7", ...)
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "maj" => Ok(ChordType::Major),
            "minor" | "min" | "m" => Ok(ChordType::Minor),
            "diminished" | "dim" => Ok(ChordType::Diminished),
            "augmented" | "aug" => Ok(ChordType::Augmented),
            "major7" | "maj7" => Ok(ChordType::Major7),
            "dominant7" | "dom7" | "7" => Ok(ChordType::Dominant7),
            "minor7" | "min7" | "m7" => Ok(ChordType::Minor7),
            "halfdiminished7" | "halfdim7" | "m7b5" => Ok(ChordType::HalfDiminished7),
            "diminished7" | "dim7" => Ok(ChordType::Diminished7),
            "minormajor7" | "minmaj7" | "mmaj7" => Ok(ChordType::MinorMajor7),
            "augmented7" | "aug7" => Ok(ChordType::Augmented7),
            _ => Err(TheoryError::parse("chord type", s)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Major7 => "Major 7th",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Minor7 => "Minor 7th",
            ChordType::HalfDiminished7 => "Half-Diminished 7th",
            ChordType::Diminished7 => "Diminished 7th",
            ChordType::MinorMajor7 => "Minor-Major 7th",
            ChordType::Augmented7 => "Augmented 7th",
        }
    }

    /// Suffix used in chord symbols ("m7" in "Dm7")
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Major7 => "maj7",
            ChordType::Dominant7 => "7",
            ChordType::Minor7 => "m7",
            ChordType::HalfDiminished7 => "m7♭5",
            ChordType::Diminished7 => "dim7",
            ChordType::MinorMajor7 => "m(maj7)",
            ChordType::Augmented7 => "aug7",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ascending semitone offsets from the root for a chord type
pub fn chord_offsets(chord_type: ChordType) -> &'static [u8] {
    match chord_type {
        ChordType::Major => &MAJOR,
        ChordType::Minor => &MINOR,
        ChordType::Diminished => &DIMINISHED,
        ChordType::Augmented => &AUGMENTED,
        ChordType::Major7 => &MAJOR7,
        ChordType::Dominant7 => &DOMINANT7,
        ChordType::Minor7 => &MINOR7,
        ChordType::HalfDiminished7 => &HALF_DIMINISHED7,
        ChordType::Diminished7 => &DIMINISHED7,
        ChordType::MinorMajor7 => &MINOR_MAJOR7,
        ChordType::Augmented7 => &AUGMENTED7,
    }
}

/// Which chord tone sits in the bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordInversion {
    Root,
    First,
    Second,
    Third,
}

impl ChordInversion {
    pub const ALL: [ChordInversion; 4] = [
        ChordInversion::Root,
        ChordInversion::First,
        ChordInversion::Second,
        ChordInversion::Third,
    ];

    /// Rotation index: how many tones move up an octave
    pub fn index(self) -> usize {
        match self {
            ChordInversion::Root => 0,
            ChordInversion::First => 1,
            ChordInversion::Second => 2,
            ChordInversion::Third => 3,
        }
    }

    /// Parse inversion from string ("root", "first", "1st", "2", ...)
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "root" | "0" => Ok(ChordInversion::Root),
            "first" | "1st" | "1" => Ok(ChordInversion::First),
            "second" | "2nd" | "2" => Ok(ChordInversion::Second),
            "third" | "3rd" | "3" => Ok(ChordInversion::Third),
            _ => Err(TheoryError::parse("inversion", s)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordInversion::Root => "Root Position",
            ChordInversion::First => "First Inversion",
            ChordInversion::Second => "Second Inversion",
            ChordInversion::Third => "Third Inversion",
        }
    }
}

impl fmt::Display for ChordInversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn check_inversion(chord_type: ChordType, inversion: ChordInversion) -> Result<()> {
    if inversion.index() >= chord_type.arity().tone_count() {
        return Err(TheoryError::InvalidInversion {
            chord_type,
            inversion,
        });
    }
    Ok(())
}

/// Offsets after rotating left by the inversion index, rotated tones lifted an octave
pub fn rotated_offsets(chord_type: ChordType, inversion: ChordInversion) -> Result<Vec<u8>> {
    check_inversion(chord_type, inversion)?;
    Ok(rotate(chord_offsets(chord_type), inversion.index()))
}

fn rotate(offsets: &[u8], i: usize) -> Vec<u8> {
    offsets[i..]
        .iter()
        .copied()
        .chain(offsets[..i].iter().map(|&o| o + 12))
        .collect()
}

/// A chord with root, quality, and inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    root: Key,
    chord_type: ChordType,
    inversion: ChordInversion,
}

impl Chord {
    /// Create a chord, rejecting inversions the chord type does not have
    pub fn new(root: Key, chord_type: ChordType, inversion: ChordInversion) -> Result<Self> {
        check_inversion(chord_type, inversion)?;
        Ok(Self {
            root,
            chord_type,
            inversion,
        })
    }

    /// Root position chord (always valid)
    pub fn root_position(root: Key, chord_type: ChordType) -> Self {
        Self {
            root,
            chord_type,
            inversion: ChordInversion::Root,
        }
    }

    /// Every valid inversion of a chord, root position first
    pub fn all_inversions(root: Key, chord_type: ChordType) -> Vec<Chord> {
        chord_type
            .arity()
            .inversions()
            .iter()
            .map(|&inversion| Chord {
                root,
                chord_type,
                inversion,
            })
            .collect()
    }

    pub fn root(&self) -> Key {
        self.root
    }

    pub fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    pub fn inversion(&self) -> ChordInversion {
        self.inversion
    }

    /// Offsets of this voicing; the inversion was checked on construction
    fn offsets(&self) -> Vec<u8> {
        rotate(chord_offsets(self.chord_type), self.inversion.index())
    }

    /// Pitch classes in voicing order, bass first
    pub fn notes(&self) -> Vec<Key> {
        self.offsets()
            .iter()
            .map(|&o| Key::from_pitch_class(self.root.pitch_class() + o % 12))
            .collect()
    }

    /// Lowest sounding pitch class
    pub fn bass(&self) -> Key {
        let offset = chord_offsets(self.chord_type)[self.inversion.index()];
        self.root.transpose(offset as i8)
    }

    /// Display name with inversion suffix ("E♭ Major (First Inversion)")
    pub fn name(&self) -> String {
        let base = format!("{} {}", self.root.display_name(), self.chord_type);
        match self.inversion {
            ChordInversion::Root => base,
            inversion => format!("{} ({})", base, inversion),
        }
    }

    /// Chord symbol with slash bass for inversions ("C/E", "Dm7/C")
    pub fn symbol(&self) -> String {
        let base = format!("{}{}", self.root.display_name(), self.chord_type.symbol());
        match self.inversion {
            ChordInversion::Root => base,
            _ => format!("{}/{}", base, self.bass().display_name()),
        }
    }

    /// Voiced MIDI notes with the root anchored in `octave`.
    ///
    /// Strictly ascending; the top note is at most 24 semitones above the bass.
    pub fn midi_notes(&self, octave: i32) -> Result<Vec<MidiNote>> {
        let base = note_to_midi(self.root, octave)? as i32;
        self.offsets()
            .iter()
            .map(|&o| checked_midi(base + o as i32))
            .collect()
    }

    /// Voicing for the requested hand(s); both hands form one block,
    /// left-hand notes first
    pub fn midi_notes_for_hand(&self, octave: i32, hand: HandSelection) -> Result<Vec<MidiNote>> {
        let notes = self.midi_notes(octave)?;
        hand::block(&notes, hand)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Total semitone movement between two voicings, voice by voice
pub fn voice_leading_distance(from: &[MidiNote], to: &[MidiNote]) -> u32 {
    from.iter()
        .zip(to)
        .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
        .sum()
}
