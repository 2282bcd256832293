// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! # keywork
//!
//! Deterministic music-theory engine for piano practice. Given a key, a
//! scale, chord, or arpeggio quality, an inversion, an octave, and a hand
//! selection, it produces canonical note sequences and their MIDI numbers.
//!
//! Everything in [`music`] is a pure function of its inputs and safe to call
//! from any thread. [`config`] loads YAML exercise files and renders them;
//! [`drill`] picks random exercises.

pub mod config;
pub mod drill;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
