// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Arpeggios for practice exercises.
//!
//! An arpeggio plays the tones of a chord one at a time, up through one or
//! two octaves and back down to the root. Arpeggios are not inverted.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chord::{chord_offsets, ChordType};
use super::hand::{self, HandSelection};
use super::note::{checked_midi, note_to_midi, Key, MidiNote};
use crate::error::{Result, TheoryError};

/// Arpeggio qualities, one per chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArpeggioType {
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

impl ArpeggioType {
    pub const ALL: [ArpeggioType; 11] = [
        ArpeggioType::Major,
        ArpeggioType::Minor,
        ArpeggioType::Diminished,
        ArpeggioType::Augmented,
        ArpeggioType::Major7,
        ArpeggioType::Dominant7,
        ArpeggioType::Minor7,
        ArpeggioType::HalfDiminished7,
        ArpeggioType::Diminished7,
        ArpeggioType::MinorMajor7,
        ArpeggioType::Augmented7,
    ];

    /// The chord quality whose tones this arpeggio outlines
    pub fn chord_type(self) -> ChordType {
        match self {
            ArpeggioType::Major => ChordType::Major,
            ArpeggioType::Minor => ChordType::Minor,
            ArpeggioType::Diminished => ChordType::Diminished,
            ArpeggioType::Augmented => ChordType::Augmented,
            ArpeggioType::Major7 => ChordType::Major7,
            ArpeggioType::Dominant7 => ChordType::Dominant7,
            ArpeggioType::Minor7 => ChordType::Minor7,
            ArpeggioType::HalfDiminished7 => ChordType::HalfDiminished7,
            ArpeggioType::Diminished7 => ChordType::Diminished7,
            ArpeggioType::MinorMajor7 => ChordType::MinorMajor7,
            ArpeggioType::Augmented7 => ChordType::Augmented7,
        }
    }

    /// Parse arpeggio type using the chord quality names
    pub fn parse(s: &str) -> Result<Self> {
        ChordType::parse(s)
            .map(ArpeggioType::from)
            .map_err(|_| TheoryError::parse("arpeggio type", s))
    }
}

impl From<ChordType> for ArpeggioType {
    fn from(chord_type: ChordType) -> Self {
        match chord_type {
            ChordType::Major => ArpeggioType::Major,
            ChordType::Minor => ArpeggioType::Minor,
            ChordType::Diminished => ArpeggioType::Diminished,
            ChordType::Augmented => ArpeggioType::Augmented,
            ChordType::Major7 => ArpeggioType::Major7,
            ChordType::Dominant7 => ArpeggioType::Dominant7,
            ChordType::Minor7 => ArpeggioType::Minor7,
            ChordType::HalfDiminished7 => ArpeggioType::HalfDiminished7,
            ChordType::Diminished7 => ArpeggioType::Diminished7,
            ChordType::MinorMajor7 => ArpeggioType::MinorMajor7,
            ChordType::Augmented7 => ArpeggioType::Augmented7,
        }
    }
}

impl fmt::Display for ArpeggioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chord_type().name())
    }
}

/// How many octaves the arpeggio climbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArpeggioOctaves {
    One,
    Two,
}

impl ArpeggioOctaves {
    pub fn count(self) -> u8 {
        match self {
            ArpeggioOctaves::One => 1,
            ArpeggioOctaves::Two => 2,
        }
    }

    pub fn from_count(count: u8) -> Result<Self> {
        match count {
            1 => Ok(ArpeggioOctaves::One),
            2 => Ok(ArpeggioOctaves::Two),
            _ => Err(TheoryError::parse("arpeggio octave span", &count.to_string())),
        }
    }
}

/// Ascending intervals from the root, closing on the top octave.
///
/// One octave major is `[0, 4, 7, 12]`; two octaves is
/// `[0, 4, 7, 12, 16, 19, 24]`.
pub fn arpeggio_intervals(arpeggio_type: ArpeggioType, octaves: ArpeggioOctaves) -> Vec<u8> {
    let offsets = chord_offsets(arpeggio_type.chord_type());
    let span = octaves.count();
    let mut intervals: Vec<u8> = (0..span)
        .flat_map(|octave| offsets.iter().map(move |&o| o + octave * 12))
        .collect();
    intervals.push(span * 12);
    intervals
}

/// An arpeggio exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arpeggio {
    root: Key,
    arpeggio_type: ArpeggioType,
    octaves: ArpeggioOctaves,
}

impl Arpeggio {
    pub fn new(root: Key, arpeggio_type: ArpeggioType, octaves: ArpeggioOctaves) -> Self {
        Self {
            root,
            arpeggio_type,
            octaves,
        }
    }

    pub fn root(&self) -> Key {
        self.root
    }

    pub fn arpeggio_type(&self) -> ArpeggioType {
        self.arpeggio_type
    }

    pub fn octaves(&self) -> ArpeggioOctaves {
        self.octaves
    }

    pub fn intervals(&self) -> Vec<u8> {
        arpeggio_intervals(self.arpeggio_type, self.octaves)
    }

    /// Ascending MIDI notes from the root in `octave`
    pub fn midi_notes(&self, octave: i32) -> Result<Vec<MidiNote>> {
        let base = note_to_midi(self.root, octave)? as i32;
        self.intervals()
            .iter()
            .map(|&i| checked_midi(base + i as i32))
            .collect()
    }

    /// Up to the top and back down to the root, top note played once
    pub fn full_sequence(&self, octave: i32) -> Result<Vec<MidiNote>> {
        let ascending = self.midi_notes(octave)?;
        let mut sequence = ascending.clone();
        sequence.extend(ascending[..ascending.len() - 1].iter().rev());
        Ok(sequence)
    }

    /// Full sequence for the requested hand(s), hands interleaved when both play
    pub fn hand_sequence(&self, octave: i32, hand: HandSelection) -> Result<Vec<MidiNote>> {
        let sequence = self.full_sequence(octave)?;
        hand::interleaved(&sequence, hand)
    }

    pub fn name(&self) -> String {
        let span = match self.octaves {
            ArpeggioOctaves::One => "1 Octave",
            ArpeggioOctaves::Two => "2 Octaves",
        };
        format!(
            "{} {} Arpeggio ({})",
            self.root.display_name(),
            self.arpeggio_type,
            span
        )
    }
}

impl fmt::Display for Arpeggio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
