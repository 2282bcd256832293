// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale system for practice exercises.
//!
//! Each scale type is a fixed list of seven semitone steps summing to an
//! octave. A [`Scale`] walks those steps from its root to produce eight
//! pitch classes, the last repeating the root an octave up.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hand::{self, HandSelection};
use super::note::{checked_midi, note_to_midi, Key, MidiNote};
use crate::error::{Result, TheoryError};

/// Number of distinct degrees in every supported scale
pub const DEGREES: usize = 7;

const MAJOR_STEPS: [u8; DEGREES] = [2, 2, 1, 2, 2, 2, 1];
const NATURAL_MINOR_STEPS: [u8; DEGREES] = [2, 1, 2, 2, 1, 2, 2];
const HARMONIC_MINOR_STEPS: [u8; DEGREES] = [2, 1, 2, 2, 1, 3, 1];
const MELODIC_MINOR_STEPS: [u8; DEGREES] = [2, 1, 2, 2, 2, 2, 1];
const DORIAN_STEPS: [u8; DEGREES] = [2, 1, 2, 2, 2, 1, 2];
const PHRYGIAN_STEPS: [u8; DEGREES] = [1, 2, 2, 2, 1, 2, 2];
const LYDIAN_STEPS: [u8; DEGREES] = [2, 2, 2, 1, 2, 2, 1];
const MIXOLYDIAN_STEPS: [u8; DEGREES] = [2, 2, 1, 2, 2, 1, 2];

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,        // Ionian
    NaturalMinor, // Aeolian
    HarmonicMinor,
    MelodicMinor, // Ascending form
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
}

impl ScaleType {
    pub const ALL: [ScaleType; 8] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
    ];

    /// Parse scale type from string
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" => Ok(ScaleType::Major),
            "minor" | "naturalminor" | "aeolian" => Ok(ScaleType::NaturalMinor),
            "harmonicminor" => Ok(ScaleType::HarmonicMinor),
            "melodicminor" => Ok(ScaleType::MelodicMinor),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            _ => Err(TheoryError::parse("scale type", s)),
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Semitone steps between consecutive degrees of a scale type
pub fn scale_steps(scale_type: ScaleType) -> &'static [u8; DEGREES] {
    match scale_type {
        ScaleType::Major => &MAJOR_STEPS,
        ScaleType::NaturalMinor => &NATURAL_MINOR_STEPS,
        ScaleType::HarmonicMinor => &HARMONIC_MINOR_STEPS,
        ScaleType::MelodicMinor => &MELODIC_MINOR_STEPS,
        ScaleType::Dorian => &DORIAN_STEPS,
        ScaleType::Phrygian => &PHRYGIAN_STEPS,
        ScaleType::Lydian => &LYDIAN_STEPS,
        ScaleType::Mixolydian => &MIXOLYDIAN_STEPS,
    }
}

/// A complete scale with root and type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: Key,
    scale_type: ScaleType,
    /// Cumulative semitone offsets from the root, 0 through 12
    offsets: Vec<u8>,
    notes: Vec<Key>,
}

impl Scale {
    /// Create a new scale from root and type
    pub fn new(root: Key, scale_type: ScaleType) -> Self {
        let mut offsets = Vec::with_capacity(DEGREES + 1);
        offsets.push(0u8);
        let mut total = 0u8;
        for &step in scale_steps(scale_type) {
            total += step;
            offsets.push(total);
        }

        let notes = offsets
            .iter()
            .map(|&offset| Key::from_pitch_class(root.pitch_class() + offset))
            .collect();

        Self {
            root,
            scale_type,
            offsets,
            notes,
        }
    }

    /// Parse a scale from strings (e.g., "C", "major")
    pub fn parse(root_str: &str, scale_str: &str) -> Result<Self> {
        let root = Key::parse(root_str)?;
        let scale_type = ScaleType::parse(scale_str)?;
        Ok(Scale::new(root, scale_type))
    }

    pub fn root(&self) -> Key {
        self.root
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Cumulative offsets from the root (8 entries, 0 through 12)
    pub fn offsets(&self) -> &[u8] {
        &self.offsets
    }

    /// Pitch classes of the scale, closing note repeating the root (8 entries)
    pub fn notes(&self) -> &[Key] {
        &self.notes
    }

    /// Check if a key is in this scale
    pub fn contains(&self, key: Key) -> bool {
        self.notes.contains(&key)
    }

    /// Check if a MIDI note is in this scale
    pub fn contains_midi(&self, midi_note: MidiNote) -> bool {
        self.contains(Key::from_pitch_class(midi_note % 12))
    }

    /// Get the scale degree (1-based) for a key, if it's in the scale
    pub fn degree_of(&self, key: Key) -> Option<usize> {
        self.notes[..DEGREES]
            .iter()
            .position(|&n| n == key)
            .map(|i| i + 1)
    }

    /// Get the key at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Result<Key> {
        if degree == 0 || degree > DEGREES {
            return Err(TheoryError::InvalidDegree { degree });
        }
        Ok(self.notes[degree - 1])
    }

    /// Ascending MIDI notes starting at the root in `octave` (8 entries)
    pub fn midi_notes(&self, octave: i32) -> Result<Vec<MidiNote>> {
        let base = note_to_midi(self.root, octave)?;
        self.offsets
            .iter()
            .map(|&offset| checked_midi(base as i32 + offset as i32))
            .collect()
    }

    /// Up and back down: ascending notes followed by the descent without
    /// repeating the top note (15 entries, first == last)
    pub fn full_scale_sequence(&self, octave: i32) -> Result<Vec<MidiNote>> {
        let ascending = self.midi_notes(octave)?;
        let mut sequence = ascending.clone();
        sequence.extend(ascending.iter().rev().skip(1));
        Ok(sequence)
    }

    /// Full sequence for the requested hand(s), hands interleaved when both play
    pub fn hand_sequence(&self, octave: i32, hand: HandSelection) -> Result<Vec<MidiNote>> {
        let sequence = self.full_scale_sequence(octave)?;
        hand::interleaved(&sequence, hand)
    }

    /// Get the relative scale (e.g., C major -> A minor)
    pub fn relative(&self) -> Option<Scale> {
        match self.scale_type {
            ScaleType::Major => Some(Scale::new(self.root.transpose(-3), ScaleType::NaturalMinor)),
            ScaleType::NaturalMinor => Some(Scale::new(self.root.transpose(3), ScaleType::Major)),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root.display_name(), self.scale_type)
    }
}
