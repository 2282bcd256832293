// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives: notes, scales, chords, arpeggios, and
//! diatonic progressions.

pub mod arpeggio;
pub mod chord;
pub mod circle;
pub mod hand;
pub mod harmony;
pub mod note;
pub mod progression;
pub mod scale;

pub use arpeggio::{Arpeggio, ArpeggioOctaves, ArpeggioType};
pub use chord::{Chord, ChordArity, ChordInversion, ChordType};
pub use hand::HandSelection;
pub use note::{Key, MidiNote, Note};
pub use progression::{Progression, ProgressionStyle};
pub use scale::{Scale, ScaleType};
