// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, notes, and MIDI conversion.
//!
//! A [`Key`] is one of the twelve chromatic pitch classes. A [`Note`] pins a
//! key to an octave using the MIDI convention where middle C is C4 (60):
//! `midi = (octave + 1) * 12 + pitch_class`. The valid MIDI domain 0..=127
//! therefore spans C-1 through G9.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Semitone offset type
pub type Semitones = i8;

/// Highest valid MIDI note number
pub const MIDI_MAX: i32 = 127;

/// Key names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Key {
    /// All keys in chromatic order
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
        Key::A,
        Key::As,
        Key::B,
    ];

    /// Get the pitch class (0-11) for this key
    pub fn pitch_class(self) -> u8 {
        match self {
            Key::C => 0,
            Key::Cs => 1,
            Key::D => 2,
            Key::Ds => 3,
            Key::E => 4,
            Key::F => 5,
            Key::Fs => 6,
            Key::G => 7,
            Key::Gs => 8,
            Key::A => 9,
            Key::As => 10,
            Key::B => 11,
        }
    }

    /// Get key from pitch class (wraps modulo 12)
    pub fn from_pitch_class(pc: u8) -> Self {
        Key::ALL[(pc % 12) as usize]
    }

    /// Parse key from string (e.g., "C", "C#", "Db", "F♯", "B♭").
    ///
    /// Flat spellings resolve to the sharp-named pitch class, so "Db" and
    /// "C#" yield the same key.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('♯', "#").replace('♭', "b").to_uppercase();
        match normalized.as_str() {
            "C" | "B#" => Ok(Key::C),
            "C#" | "CS" | "DB" => Ok(Key::Cs),
            "D" => Ok(Key::D),
            "D#" | "DS" | "EB" => Ok(Key::Ds),
            "E" | "FB" => Ok(Key::E),
            "F" | "E#" | "ES" => Ok(Key::F),
            "F#" | "FS" | "GB" => Ok(Key::Fs),
            "G" => Ok(Key::G),
            "G#" | "GS" | "AB" => Ok(Key::Gs),
            "A" => Ok(Key::A),
            "A#" | "AS" | "BB" => Ok(Key::As),
            "B" | "CB" => Ok(Key::B),
            _ => Err(TheoryError::parse("key", s)),
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i8 + semitones % 12).rem_euclid(12) as u8;
        Key::from_pitch_class(new_pc)
    }

    /// Get interval in semitones to another key (ascending)
    pub fn interval_to(self, other: Key) -> u8 {
        (other.pitch_class() as i16 - self.pitch_class() as i16).rem_euclid(12) as u8
    }

    /// True for the five keys that sit on black piano keys
    pub fn is_black_key(self) -> bool {
        matches!(self, Key::Cs | Key::Ds | Key::Fs | Key::Gs | Key::As)
    }

    /// Raw chromatic name, sharps preferred ("C#")
    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "C#",
            Key::D => "D",
            Key::Ds => "D#",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::G => "G",
            Key::Gs => "G#",
            Key::A => "A",
            Key::As => "A#",
            Key::B => "B",
        }
    }

    /// Key-signature display name, flats preferred for black keys ("D♭")
    pub fn display_name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "D♭",
            Key::D => "D",
            Key::Ds => "E♭",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "G♭",
            Key::G => "G",
            Key::Gs => "A♭",
            Key::A => "A",
            Key::As => "B♭",
            Key::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A key pinned to an octave: an absolute note position on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub key: Key,
    pub octave: i32,
}

impl Note {
    /// Create a note position (not range checked until converted to MIDI)
    pub fn new(key: Key, octave: i32) -> Self {
        Self { key, octave }
    }

    /// MIDI number of this note
    pub fn midi(self) -> Result<MidiNote> {
        note_to_midi(self.key, self.octave)
    }

    /// Note position for a MIDI number
    pub fn from_midi(midi: i32) -> Result<Self> {
        let (key, octave) = midi_to_note(midi)?;
        Ok(Self { key, octave })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key.name(), self.octave)
    }
}

/// Reject values outside 0..=127 and narrow to [`MidiNote`]
pub fn checked_midi(value: i32) -> Result<MidiNote> {
    if !(0..=MIDI_MAX).contains(&value) {
        return Err(TheoryError::InvalidRange { value });
    }
    Ok(value as MidiNote)
}

/// Convert a key and octave to a MIDI note number
pub fn note_to_midi(key: Key, octave: i32) -> Result<MidiNote> {
    let value = octave
        .saturating_add(1)
        .saturating_mul(12)
        .saturating_add(key.pitch_class() as i32);
    checked_midi(value)
}

/// Convert a MIDI note number to its key and octave
pub fn midi_to_note(midi: i32) -> Result<(Key, i32)> {
    let midi = checked_midi(midi)?;
    let key = Key::from_pitch_class(midi % 12);
    let octave = (midi / 12) as i32 - 1;
    Ok((key, octave))
}

/// Convert a note position to a MIDI note number
pub fn note_position_to_midi(position: Note) -> Result<MidiNote> {
    position.midi()
}

/// Convert a MIDI note number to a note position
pub fn midi_to_note_position(midi: i32) -> Result<Note> {
    Note::from_midi(midi)
}

/// Compact note name without octave ("C", "C#")
pub fn compact_name(midi: i32) -> Result<&'static str> {
    let (key, _) = midi_to_note(midi)?;
    Ok(key.name())
}

/// Full note name with octave ("C#4", "C-1")
pub fn full_name(midi: i32) -> Result<String> {
    Note::from_midi(midi).map(|note| note.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pitch_class() {
        assert_eq!(Key::C.pitch_class(), 0);
        assert_eq!(Key::A.pitch_class(), 9);
        assert_eq!(Key::B.pitch_class(), 11);
        assert_eq!(Key::from_pitch_class(13), Key::Cs);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("C").unwrap(), Key::C);
        assert_eq!(Key::parse("C#").unwrap(), Key::Cs);
        assert_eq!(Key::parse("Db").unwrap(), Key::Cs);
        assert_eq!(Key::parse("F♯").unwrap(), Key::Fs);
        assert_eq!(Key::parse("B♭").unwrap(), Key::As);
        assert_eq!(Key::parse(" eb ").unwrap(), Key::Ds);
        assert!(Key::parse("X").is_err());
    }

    #[test]
    fn test_flat_input_normalizes_to_sharp() {
        let key = Key::parse("Db").unwrap();
        let midi = note_to_midi(key, 4).unwrap();
        let (back, octave) = midi_to_note(midi as i32).unwrap();
        assert_eq!(back, Key::Cs);
        assert_eq!(back.name(), "C#");
        assert_eq!(octave, 4);
    }

    #[test]
    fn test_key_transpose() {
        assert_eq!(Key::C.transpose(2), Key::D);
        assert_eq!(Key::C.transpose(12), Key::C);
        assert_eq!(Key::C.transpose(-1), Key::B);
        assert_eq!(Key::G.transpose(5), Key::C);
        assert_eq!(Key::A.transpose(-27), Key::Fs);
    }

    #[test]
    fn test_key_interval() {
        assert_eq!(Key::C.interval_to(Key::G), 7);
        assert_eq!(Key::C.interval_to(Key::C), 0);
        assert_eq!(Key::G.interval_to(Key::C), 5);
    }

    #[test]
    fn test_display_conventions() {
        let raw: Vec<&str> = Key::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            raw,
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );

        let display: Vec<&str> = Key::ALL.iter().map(|k| k.display_name()).collect();
        assert_eq!(
            display,
            vec!["C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B"]
        );
    }

    #[test]
    fn test_black_keys() {
        let black: Vec<Key> = Key::ALL.iter().copied().filter(|k| k.is_black_key()).collect();
        assert_eq!(black, vec![Key::Cs, Key::Ds, Key::Fs, Key::Gs, Key::As]);
    }

    #[test]
    fn test_note_to_midi() {
        assert_eq!(note_to_midi(Key::C, 4).unwrap(), 60);
        assert_eq!(note_to_midi(Key::A, 4).unwrap(), 69);
        assert_eq!(note_to_midi(Key::C, -1).unwrap(), 0);
        assert_eq!(note_to_midi(Key::G, 9).unwrap(), 127);
    }

    #[test]
    fn test_note_to_midi_out_of_range() {
        assert_eq!(
            note_to_midi(Key::Gs, 9),
            Err(TheoryError::InvalidRange { value: 128 })
        );
        assert!(note_to_midi(Key::B, -2).is_err());
        assert!(note_to_midi(Key::C, i32::MAX).is_err());
    }

    #[test]
    fn test_midi_to_note() {
        assert_eq!(midi_to_note(60).unwrap(), (Key::C, 4));
        assert_eq!(midi_to_note(0).unwrap(), (Key::C, -1));
        assert_eq!(midi_to_note(127).unwrap(), (Key::G, 9));
        assert_eq!(midi_to_note(-1), Err(TheoryError::InvalidRange { value: -1 }));
        assert_eq!(midi_to_note(128), Err(TheoryError::InvalidRange { value: 128 }));
    }

    #[test]
    fn test_round_trip_all_midi() {
        for midi in 0..=127 {
            let position = midi_to_note_position(midi).unwrap();
            assert_eq!(note_position_to_midi(position).unwrap() as i32, midi);

            let (key, octave) = midi_to_note(midi).unwrap();
            assert_eq!(note_to_midi(key, octave).unwrap() as i32, midi);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(compact_name(61).unwrap(), "C#");
        assert_eq!(compact_name(60).unwrap(), "C");
        assert_eq!(full_name(61).unwrap(), "C#4");
        assert_eq!(full_name(0).unwrap(), "C-1");
        assert_eq!(full_name(127).unwrap(), "G9");
        assert!(full_name(200).is_err());
    }
}
