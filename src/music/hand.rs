// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hand selection for practice sequences.
//!
//! The left hand always plays one octave below the right. How the two hands
//! combine depends on the material: chords are simultaneous blocks, so the
//! hands are concatenated; scales and arpeggios are melodic, so the hands
//! are interleaved note by note.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{checked_midi, MidiNote};
use crate::error::{Result, TheoryError};

/// Which hand(s) play an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandSelection {
    Left,
    Right,
    Both,
}

impl HandSelection {
    pub const ALL: [HandSelection; 3] = [
        HandSelection::Left,
        HandSelection::Right,
        HandSelection::Both,
    ];

    /// Parse hand selection from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "lh" => Ok(HandSelection::Left),
            "right" | "r" | "rh" => Ok(HandSelection::Right),
            "both" | "b" | "hands_together" | "together" => Ok(HandSelection::Both),
            _ => Err(TheoryError::parse("hand", s)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandSelection::Left => "Left Hand",
            HandSelection::Right => "Right Hand",
            HandSelection::Both => "Both Hands",
        }
    }
}

impl fmt::Display for HandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shift every note down one octave, failing if any note leaves the MIDI range
pub fn octave_below(notes: &[MidiNote]) -> Result<Vec<MidiNote>> {
    notes
        .iter()
        .map(|&note| checked_midi(note as i32 - 12))
        .collect()
}

/// Left-hand notes followed by right-hand notes (a simultaneous block)
pub fn block(notes: &[MidiNote], hand: HandSelection) -> Result<Vec<MidiNote>> {
    match hand {
        HandSelection::Left => octave_below(notes),
        HandSelection::Right => Ok(notes.to_vec()),
        HandSelection::Both => {
            let mut combined = octave_below(notes)?;
            combined.extend_from_slice(notes);
            Ok(combined)
        }
    }
}

/// Left and right notes alternating pairwise (a melodic sequence)
pub fn interleaved(notes: &[MidiNote], hand: HandSelection) -> Result<Vec<MidiNote>> {
    match hand {
        HandSelection::Left => octave_below(notes),
        HandSelection::Right => Ok(notes.to_vec()),
        HandSelection::Both => {
            let left = octave_below(notes)?;
            Ok(left
                .iter()
                .zip(notes)
                .flat_map(|(&l, &r)| [l, r])
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand() {
        assert_eq!(HandSelection::parse("left").unwrap(), HandSelection::Left);
        assert_eq!(HandSelection::parse("RH").unwrap(), HandSelection::Right);
        assert_eq!(HandSelection::parse("both").unwrap(), HandSelection::Both);
        assert!(HandSelection::parse("feet").is_err());
    }

    #[test]
    fn test_block_concatenates() {
        let notes = [60, 64, 67];
        assert_eq!(block(&notes, HandSelection::Left).unwrap(), vec![48, 52, 55]);
        assert_eq!(block(&notes, HandSelection::Right).unwrap(), vec![60, 64, 67]);
        assert_eq!(
            block(&notes, HandSelection::Both).unwrap(),
            vec![48, 52, 55, 60, 64, 67]
        );
    }

    #[test]
    fn test_interleaved_alternates() {
        let notes = [60, 64, 67];
        assert_eq!(
            interleaved(&notes, HandSelection::Both).unwrap(),
            vec![48, 60, 52, 64, 55, 67]
        );
    }

    #[test]
    fn test_octave_below_range() {
        assert_eq!(
            octave_below(&[11]),
            Err(TheoryError::InvalidRange { value: -1 })
        );
        assert_eq!(octave_below(&[12]).unwrap(), vec![0]);
    }
}
