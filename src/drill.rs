// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random practice drills.
//!
//! A drill draws an endless stream of scale, chord, and arpeggio exercises
//! in random keys. Drills built from the same seed produce the same stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::music::{
    Arpeggio, ArpeggioOctaves, ArpeggioType, Chord, ChordType, HandSelection, Key, MidiNote,
    Scale, ScaleType,
};

/// One randomly chosen exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillItem {
    Scale(Scale),
    Chord(Chord),
    Arpeggio(Arpeggio),
}

impl DrillItem {
    pub fn title(&self) -> String {
        match self {
            DrillItem::Scale(scale) => format!("{} Scale", scale),
            DrillItem::Chord(chord) => chord.name(),
            DrillItem::Arpeggio(arpeggio) => arpeggio.name(),
        }
    }

    /// Notes to play; a chord drill is a single block
    pub fn midi_notes(&self, octave: i32, hand: HandSelection) -> Result<Vec<MidiNote>> {
        match self {
            DrillItem::Scale(scale) => scale.hand_sequence(octave, hand),
            DrillItem::Chord(chord) => chord.midi_notes_for_hand(octave, hand),
            DrillItem::Arpeggio(arpeggio) => arpeggio.hand_sequence(octave, hand),
        }
    }
}

/// Random exercise picker
pub struct Drill {
    rng: StdRng,
}

impl Drill {
    /// Reproducible drill for a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Drill seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.rng.gen_range(0..choices.len())]
    }

    /// Draw the next exercise
    pub fn next_item(&mut self) -> DrillItem {
        let key = self.pick(&Key::ALL);
        match self.rng.gen_range(0..3) {
            0 => DrillItem::Scale(Scale::new(key, self.pick(&ScaleType::ALL))),
            1 => {
                let chord_type = self.pick(&ChordType::ALL);
                DrillItem::Chord(self.pick(&Chord::all_inversions(key, chord_type)))
            }
            _ => {
                let octaves = self.pick(&[ArpeggioOctaves::One, ArpeggioOctaves::Two]);
                DrillItem::Arpeggio(Arpeggio::new(key, self.pick(&ArpeggioType::ALL), octaves))
            }
        }
    }
}

impl Iterator for Drill {
    type Item = DrillItem;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_item())
    }
}
