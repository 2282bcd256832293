// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Circle of fifths navigation.

use super::note::Key;

/// Keys ordered by ascending perfect fifths, starting from C
pub const CIRCLE_OF_FIFTHS: [Key; 12] = [
    Key::C,
    Key::G,
    Key::D,
    Key::A,
    Key::E,
    Key::B,
    Key::Fs,
    Key::Cs,
    Key::Gs,
    Key::Ds,
    Key::As,
    Key::F,
];

/// Position of a key on the circle (C = 0, G = 1, ..., F = 11)
pub fn position(key: Key) -> usize {
    // Each step clockwise adds 7 semitones, and 7 * 7 = 49 = 1 (mod 12)
    (key.pitch_class() as usize * 7) % 12
}

/// Next key clockwise (up a fifth)
pub fn next_key(key: Key) -> Key {
    CIRCLE_OF_FIFTHS[(position(key) + 1) % 12]
}

/// Previous key counter-clockwise (down a fifth)
pub fn previous_key(key: Key) -> Key {
    CIRCLE_OF_FIFTHS[(position(key) + 11) % 12]
}

/// Circle display label: sharps shown with the ♯ sign ("F♯")
pub fn label(key: Key) -> String {
    key.name().replace('#', "♯")
}
