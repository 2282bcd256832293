// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Exercise file validation.
//!
//! Validation reports every problem in a file at once instead of stopping
//! at the first, so an editor can show them together. Each name field of an
//! exercise is checked on its own; an exercise whose names all parse is then
//! rendered to catch combinations that cannot be played.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use super::ExerciseFile;

/// Practical keyboard octave range for exercises
const OCTAVE_RANGE: std::ops::RangeInclusive<i32> = 0..=8;

/// Check every exercise, returning one message per problem
pub fn validate_exercises(file: &ExerciseFile) -> Vec<String> {
    let mut problems = Vec::new();

    if file.settings.tempo.is_nan() || file.settings.tempo <= 0.0 {
        problems.push(format!("settings: tempo must be positive, got {}", file.settings.tempo));
    }
    if !OCTAVE_RANGE.contains(&file.settings.octave) {
        problems.push(format!(
            "settings: octave {} is outside 0..=8",
            file.settings.octave
        ));
    }

    for (i, exercise) in file.exercises.iter().enumerate() {
        let label = format!("exercise #{} ({})", i + 1, exercise.kind());
        let octave = exercise.octave(&file.settings);
        if !OCTAVE_RANGE.contains(&octave) {
            problems.push(format!("{}: octave {} is outside 0..=8", label, octave));
            continue;
        }
        let name_errors = exercise.name_errors(&file.settings);
        if !name_errors.is_empty() {
            problems.extend(name_errors.iter().map(|e| format!("{}: {}", label, e)));
            continue;
        }
        if let Err(e) = exercise.render(&file.settings) {
            problems.push(format!("{}: {:#}", label, e));
        }
    }

    for problem in &problems {
        warn!("{}", problem);
    }

    problems
}

/// Load a file and fail if it has any problems
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ExerciseFile> {
    let file = ExerciseFile::load(path)?;
    let problems = validate_exercises(&file);
    if !problems.is_empty() {
        anyhow::bail!("{} problem(s): {}", problems.len(), problems.join("; "));
    }
    Ok(file)
}
