// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Exercise file configuration.
//!
//! An exercise file is a YAML document listing practice exercises by name
//! (key, scale, chord quality, ...) plus shared settings. Each entry renders
//! to the MIDI sequence a practice session plays and grades against.

pub mod validate;

pub use validate::{validate_exercises, validate_file};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TheoryError;
use crate::music::{
    Arpeggio, ArpeggioOctaves, ArpeggioType, Chord, ChordArity, ChordInversion, ChordType,
    HandSelection, Key, MidiNote, Progression, ProgressionStyle, Scale, ScaleType,
};

/// Root configuration for a set of exercises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExerciseFile {
    /// Settings shared by every exercise
    #[serde(default)]
    pub settings: PracticeSettings,
    /// Exercise definitions, rendered in order
    #[serde(default)]
    pub exercises: Vec<ExerciseConfig>,
}

impl ExerciseFile {
    /// Load an exercise file from YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read exercise file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse an exercise file from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse exercise YAML")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize exercises to YAML")
    }

    /// Save exercises to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write exercise file: {:?}", path.as_ref()))
    }

    /// Render every exercise, stopping at the first one that fails
    pub fn render_all(&self) -> Result<Vec<RenderedExercise>> {
        self.exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                exercise
                    .render(&self.settings)
                    .with_context(|| format!("Failed to render exercise #{}", i + 1))
            })
            .collect()
    }
}

/// Settings shared by all exercises in a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeSettings {
    /// Session name
    #[serde(default = "default_name")]
    pub name: String,
    /// Tempo in BPM, passed through to the playback scheduler
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    /// Octave used when an exercise does not set one
    #[serde(default = "default_octave")]
    pub octave: i32,
    /// Hand used when an exercise does not set one
    #[serde(default = "default_hand")]
    pub hand: String,
}

fn default_name() -> String {
    "Practice".to_string()
}
fn default_tempo() -> f64 {
    80.0
}
fn default_octave() -> i32 {
    4
}
fn default_hand() -> String {
    "right".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}
fn default_quality() -> String {
    "major".to_string()
}
fn default_inversion() -> String {
    "root".to_string()
}
fn default_span() -> u8 {
    1
}
fn default_chord_size() -> String {
    "triad".to_string()
}
fn default_style() -> String {
    "smooth".to_string()
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            tempo: default_tempo(),
            octave: default_octave(),
            hand: default_hand(),
        }
    }
}

/// A single exercise definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseConfig {
    Scale {
        key: String,
        #[serde(default = "default_scale")]
        scale: String,
        #[serde(default)]
        octave: Option<i32>,
        #[serde(default)]
        hand: Option<String>,
    },
    Chord {
        key: String,
        #[serde(default = "default_quality")]
        chord: String,
        #[serde(default = "default_inversion")]
        inversion: String,
        #[serde(default)]
        octave: Option<i32>,
        #[serde(default)]
        hand: Option<String>,
    },
    Arpeggio {
        key: String,
        #[serde(default = "default_quality")]
        arpeggio: String,
        #[serde(default = "default_span")]
        octaves: u8,
        #[serde(default)]
        octave: Option<i32>,
        #[serde(default)]
        hand: Option<String>,
    },
    Progression {
        key: String,
        #[serde(default = "default_scale")]
        scale: String,
        #[serde(default = "default_chord_size")]
        chords: String,
        #[serde(default = "default_style")]
        style: String,
        #[serde(default)]
        octave: Option<i32>,
        #[serde(default)]
        hand: Option<String>,
    },
}

/// MIDI output of a rendered exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseOutput {
    /// Notes played one after another
    Sequence(Vec<MidiNote>),
    /// Chords, each block played at once
    Blocks(Vec<Vec<MidiNote>>),
}

impl ExerciseOutput {
    /// Total number of note-ons
    pub fn note_count(&self) -> usize {
        match self {
            ExerciseOutput::Sequence(notes) => notes.len(),
            ExerciseOutput::Blocks(blocks) => blocks.iter().map(Vec::len).sum(),
        }
    }
}

/// An exercise resolved to concrete MIDI
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedExercise {
    pub title: String,
    pub hand: HandSelection,
    pub tempo: f64,
    pub output: ExerciseOutput,
}

impl ExerciseConfig {
    /// Exercise kind as written in YAML
    pub fn kind(&self) -> &'static str {
        match self {
            ExerciseConfig::Scale { .. } => "scale",
            ExerciseConfig::Chord { .. } => "chord",
            ExerciseConfig::Arpeggio { .. } => "arpeggio",
            ExerciseConfig::Progression { .. } => "progression",
        }
    }

    fn overrides(&self) -> (Option<i32>, Option<&str>) {
        match self {
            ExerciseConfig::Scale { octave, hand, .. }
            | ExerciseConfig::Chord { octave, hand, .. }
            | ExerciseConfig::Arpeggio { octave, hand, .. }
            | ExerciseConfig::Progression { octave, hand, .. } => (*octave, hand.as_deref()),
        }
    }

    /// Octave after applying the file default
    pub fn octave(&self, settings: &PracticeSettings) -> i32 {
        self.overrides().0.unwrap_or(settings.octave)
    }

    /// Hand after applying the file default
    pub fn hand(&self, settings: &PracticeSettings) -> Result<HandSelection> {
        let name = self.overrides().1.unwrap_or(settings.hand.as_str());
        Ok(HandSelection::parse(name)?)
    }

    /// Every name field that fails to parse, checked independently
    pub fn name_errors(&self, settings: &PracticeSettings) -> Vec<TheoryError> {
        let hand = self.overrides().1.unwrap_or(settings.hand.as_str());
        let mut errors = vec![HandSelection::parse(hand).err()];
        match self {
            ExerciseConfig::Scale { key, scale, .. } => {
                errors.push(Key::parse(key).err());
                errors.push(ScaleType::parse(scale).err());
            }
            ExerciseConfig::Chord {
                key,
                chord,
                inversion,
                ..
            } => {
                errors.push(Key::parse(key).err());
                errors.push(ChordType::parse(chord).err());
                errors.push(ChordInversion::parse(inversion).err());
            }
            ExerciseConfig::Arpeggio {
                key,
                arpeggio,
                octaves,
                ..
            } => {
                errors.push(Key::parse(key).err());
                errors.push(ArpeggioType::parse(arpeggio).err());
                errors.push(ArpeggioOctaves::from_count(*octaves).err());
            }
            ExerciseConfig::Progression {
                key,
                scale,
                chords,
                style,
                ..
            } => {
                errors.push(Key::parse(key).err());
                errors.push(ScaleType::parse(scale).err());
                errors.push(ChordArity::parse(chords).err());
                errors.push(ProgressionStyle::parse(style).err());
            }
        }
        errors.into_iter().flatten().collect()
    }

    /// Resolve names and generate the MIDI for this exercise
    pub fn render(&self, settings: &PracticeSettings) -> Result<RenderedExercise> {
        let octave = self.octave(settings);
        let hand = self.hand(settings)?;

        let (title, output) = match self {
            ExerciseConfig::Scale { key, scale, .. } => {
                let scale = Scale::new(Key::parse(key)?, ScaleType::parse(scale)?);
                let notes = scale.hand_sequence(octave, hand)?;
                (format!("{} Scale", scale), ExerciseOutput::Sequence(notes))
            }
            ExerciseConfig::Chord {
                key,
                chord,
                inversion,
                ..
            } => {
                let chord = Chord::new(
                    Key::parse(key)?,
                    ChordType::parse(chord)?,
                    ChordInversion::parse(inversion)?,
                )?;
                let notes = chord.midi_notes_for_hand(octave, hand)?;
                (chord.name(), ExerciseOutput::Blocks(vec![notes]))
            }
            ExerciseConfig::Arpeggio {
                key,
                arpeggio,
                octaves,
                ..
            } => {
                let arpeggio = Arpeggio::new(
                    Key::parse(key)?,
                    ArpeggioType::parse(arpeggio)?,
                    ArpeggioOctaves::from_count(*octaves)?,
                );
                let notes = arpeggio.hand_sequence(octave, hand)?;
                (arpeggio.name(), ExerciseOutput::Sequence(notes))
            }
            ExerciseConfig::Progression {
                key,
                scale,
                chords,
                style,
                ..
            } => {
                let progression = Progression::new(
                    Key::parse(key)?,
                    ScaleType::parse(scale)?,
                    ChordArity::parse(chords)?,
                    ProgressionStyle::parse(style)?,
                )?;
                let blocks = progression.midi_sequence_for_hand(octave, hand)?;
                (progression.name(), ExerciseOutput::Blocks(blocks))
            }
        };

        debug!(kind = self.kind(), %title, octave, "rendered exercise");

        Ok(RenderedExercise {
            title,
            hand,
            tempo: settings.tempo,
            output,
        })
    }
}
