// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.
//!
//! Every fallible engine operation returns [`Result`]. Range violations are
//! reported, never clamped.

use thiserror::Error;

use crate::music::chord::{ChordInversion, ChordType};
use crate::music::scale::ScaleType;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, TheoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A MIDI note number or note position fell outside 0..=127.
    #[error("MIDI value {value} is outside the valid range 0..=127")]
    InvalidRange { value: i32 },

    /// The inversion does not exist for this chord type (e.g. third inversion of a triad).
    #[error("{chord_type} has no {inversion}")]
    InvalidInversion {
        chord_type: ChordType,
        inversion: ChordInversion,
    },

    /// Diatonic chord qualities are only defined for major and natural minor.
    #[error("no diatonic harmony table for {scale_type}")]
    UnsupportedHarmony { scale_type: ScaleType },

    /// Scale degrees are 1-based and a heptatonic scale has seven of them.
    #[error("scale degree {degree} is outside 1..=7")]
    InvalidDegree { degree: usize },

    /// Text could not be parsed into a musical value.
    #[error("unknown {kind}: {input:?}")]
    Parse { kind: &'static str, input: String },
}

impl TheoryError {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        TheoryError::Parse {
            kind,
            input: input.to_string(),
        }
    }
}
