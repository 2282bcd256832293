// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chord qualities for each scale degree.
//!
//! Only major and natural minor have quality tables. Other modes report
//! [`TheoryError::UnsupportedHarmony`] instead of guessing.

use super::chord::{Chord, ChordArity, ChordType};
use super::note::Key;
use super::scale::{Scale, ScaleType, DEGREES};
use crate::error::{Result, TheoryError};

const MAJOR_TRIADS: [ChordType; DEGREES] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Minor,
    ChordType::Major,
    ChordType::Major,
    ChordType::Minor,
    ChordType::Diminished,
];

const MINOR_TRIADS: [ChordType; DEGREES] = [
    ChordType::Minor,
    ChordType::Diminished,
    ChordType::Major,
    ChordType::Minor,
    ChordType::Minor,
    ChordType::Major,
    ChordType::Major,
];

const MAJOR_SEVENTHS: [ChordType; DEGREES] = [
    ChordType::Major7,
    ChordType::Minor7,
    ChordType::Minor7,
    ChordType::Major7,
    ChordType::Dominant7,
    ChordType::Minor7,
    ChordType::HalfDiminished7,
];

const MINOR_SEVENTHS: [ChordType; DEGREES] = [
    ChordType::Minor7,
    ChordType::HalfDiminished7,
    ChordType::Major7,
    ChordType::Minor7,
    ChordType::Minor7,
    ChordType::Major7,
    ChordType::Dominant7,
];

const NUMERALS: [&str; DEGREES] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Chord quality on every degree of a scale type
pub fn degree_qualities(
    scale_type: ScaleType,
    arity: ChordArity,
) -> Result<&'static [ChordType; DEGREES]> {
    match (scale_type, arity) {
        (ScaleType::Major, ChordArity::Triad) => Ok(&MAJOR_TRIADS),
        (ScaleType::Major, ChordArity::Seventh) => Ok(&MAJOR_SEVENTHS),
        (ScaleType::NaturalMinor, ChordArity::Triad) => Ok(&MINOR_TRIADS),
        (ScaleType::NaturalMinor, ChordArity::Seventh) => Ok(&MINOR_SEVENTHS),
        _ => Err(TheoryError::UnsupportedHarmony { scale_type }),
    }
}

/// Chord quality on a 1-based scale degree
pub fn chord_quality(scale_type: ScaleType, degree: usize, arity: ChordArity) -> Result<ChordType> {
    if degree == 0 || degree > DEGREES {
        return Err(TheoryError::InvalidDegree { degree });
    }
    Ok(degree_qualities(scale_type, arity)?[degree - 1])
}

/// Root-position diatonic chords built on each degree of a key
pub fn diatonic_chords(root: Key, scale_type: ScaleType, arity: ChordArity) -> Result<Vec<Chord>> {
    let qualities = degree_qualities(scale_type, arity)?;
    let scale = Scale::new(root, scale_type);
    Ok(scale.notes()[..DEGREES]
        .iter()
        .zip(qualities)
        .map(|(&degree_root, &quality)| Chord::root_position(degree_root, quality))
        .collect())
}

/// Roman numeral analysis label ("I", "ii", "vii°", "V7", "viiø7")
pub fn roman_numeral(scale_type: ScaleType, degree: usize, arity: ChordArity) -> Result<String> {
    let quality = chord_quality(scale_type, degree, arity)?;
    let numeral = NUMERALS[degree - 1];
    let label = match quality {
        ChordType::Major => numeral.to_string(),
        ChordType::Minor => numeral.to_lowercase(),
        ChordType::Diminished => format!("{}°", numeral.to_lowercase()),
        ChordType::Augmented => format!("{}+", numeral),
        ChordType::Major7 => format!("{}maj7", numeral),
        ChordType::Dominant7 => format!("{}7", numeral),
        ChordType::Minor7 => format!("{}7", numeral.to_lowercase()),
        ChordType::HalfDiminished7 => format!("{}ø7", numeral.to_lowercase()),
        ChordType::Diminished7 => format!("{}°7", numeral.to_lowercase()),
        ChordType::MinorMajor7 => format!("{}(maj7)", numeral.to_lowercase()),
        ChordType::Augmented7 => format!("{}+7", numeral),
    };
    Ok(label)
}
