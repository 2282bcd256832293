// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{Context, Result};
use keywork::config::{validate_file, ExerciseOutput};
use keywork::drill::Drill;
use keywork::music::note::full_name;
use keywork::music::{
    circle, Arpeggio, ArpeggioOctaves, ArpeggioType, Chord, ChordArity, ChordInversion, ChordType,
    HandSelection, Key, MidiNote, Progression, ProgressionStyle, Scale, ScaleType,
};
use tracing::Level;

fn print_usage() {
    println!("KEYWORK - Piano Practice Theory Engine");
    println!();
    println!("Usage: keywork [-v] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --scale <KEY> [TYPE] [OCTAVE] [HAND]                   Scale up and down");
    println!("  --chord <KEY> [TYPE] [INVERSION] [OCTAVE] [HAND]       Chord voicing");
    println!("  --arpeggio <KEY> [TYPE] [1|2] [OCTAVE] [HAND]          Arpeggio up and down");
    println!("  --progression <KEY> [SCALE] [triad|seventh] [simple|smooth] [OCTAVE]");
    println!("                                                         Diatonic chord walk");
    println!("  --circle [KEY]                                         Circle of fifths");
    println!("  --exercises <FILE>                                     Render exercise file");
    println!("  --drill [COUNT] [SEED]                                 Random practice drill");
    println!("  --help                                                 Show this help message");
    println!();
    println!("Defaults: TYPE major, OCTAVE 4, HAND right, INVERSION root");
}

/// Positional argument or a default
fn arg<'a>(args: &'a [String], index: usize, default: &'a str) -> &'a str {
    args.get(index).map(String::as_str).unwrap_or(default)
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing {}; run with --help for usage", what))
}

fn parse_octave(s: &str) -> Result<i32> {
    s.parse()
        .with_context(|| format!("Invalid octave: {}", s))
}

fn format_notes(notes: &[MidiNote]) -> String {
    notes
        .iter()
        .map(|&n| full_name(n as i32).unwrap_or_else(|_| n.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_sequence(title: &str, notes: &[MidiNote]) {
    println!("{}", title);
    println!("  MIDI:  {:?}", notes);
    println!("  Notes: {}", format_notes(notes));
}

fn show_scale(args: &[String]) -> Result<()> {
    let scale = Scale::new(
        Key::parse(required(args, 0, "key")?)?,
        ScaleType::parse(arg(args, 1, "major"))?,
    );
    let octave = parse_octave(arg(args, 2, "4"))?;
    let hand = HandSelection::parse(arg(args, 3, "right"))?;

    let notes = scale.hand_sequence(octave, hand)?;
    print_sequence(&format!("{} Scale ({})", scale, hand), &notes);
    Ok(())
}

fn show_chord(args: &[String]) -> Result<()> {
    let chord = Chord::new(
        Key::parse(required(args, 0, "key")?)?,
        ChordType::parse(arg(args, 1, "major"))?,
        ChordInversion::parse(arg(args, 2, "root"))?,
    )?;
    let octave = parse_octave(arg(args, 3, "4"))?;
    let hand = HandSelection::parse(arg(args, 4, "right"))?;

    let notes = chord.midi_notes_for_hand(octave, hand)?;
    print_sequence(&format!("{} [{}] ({})", chord, chord.symbol(), hand), &notes);
    Ok(())
}

fn show_arpeggio(args: &[String]) -> Result<()> {
    let span: u8 = arg(args, 2, "1")
        .parse()
        .with_context(|| format!("Invalid octave span: {}", arg(args, 2, "1")))?;
    let arpeggio = Arpeggio::new(
        Key::parse(required(args, 0, "key")?)?,
        ArpeggioType::parse(arg(args, 1, "major"))?,
        ArpeggioOctaves::from_count(span)?,
    );
    let octave = parse_octave(arg(args, 3, "4"))?;
    let hand = HandSelection::parse(arg(args, 4, "right"))?;

    let notes = arpeggio.hand_sequence(octave, hand)?;
    print_sequence(&format!("{} ({})", arpeggio, hand), &notes);
    Ok(())
}

fn show_progression(args: &[String]) -> Result<()> {
    let progression = Progression::new(
        Key::parse(required(args, 0, "key")?)?,
        ScaleType::parse(arg(args, 1, "major"))?,
        ChordArity::parse(arg(args, 2, "triad"))?,
        ProgressionStyle::parse(arg(args, 3, "smooth"))?,
    )?;
    let octave = parse_octave(arg(args, 4, "4"))?;

    println!("{}", progression);
    let voicings = progression.midi_sequence(octave)?;
    for (i, (chord, notes)) in progression.chords().iter().zip(&voicings).enumerate() {
        println!(
            "  {:>2}. {:<10} {:?}  {}",
            i + 1,
            chord.symbol(),
            notes,
            format_notes(notes)
        );
    }
    Ok(())
}

fn show_circle(args: &[String]) -> Result<()> {
    match args.first() {
        Some(name) => {
            let key = Key::parse(name)?;
            println!(
                "{} <- {} -> {}",
                circle::label(circle::previous_key(key)),
                circle::label(key),
                circle::label(circle::next_key(key))
            );
        }
        None => {
            let labels: Vec<String> = circle::CIRCLE_OF_FIFTHS
                .iter()
                .map(|&k| circle::label(k))
                .collect();
            println!("{}", labels.join(" -> "));
        }
    }
    Ok(())
}

fn render_exercises(args: &[String]) -> Result<()> {
    let path = required(args, 0, "exercise file")?;
    let file = validate_file(path)?;
    println!("{} ({} BPM)", file.settings.name, file.settings.tempo);

    for exercise in file.render_all()? {
        match &exercise.output {
            ExerciseOutput::Sequence(notes) => {
                print_sequence(&format!("{} ({})", exercise.title, exercise.hand), notes);
            }
            ExerciseOutput::Blocks(blocks) => {
                println!("{} ({})", exercise.title, exercise.hand);
                for block in blocks {
                    println!("  {:?}  {}", block, format_notes(block));
                }
            }
        }
    }
    Ok(())
}

fn run_drill(args: &[String]) -> Result<()> {
    let count: usize = arg(args, 0, "5")
        .parse()
        .with_context(|| format!("Invalid count: {}", arg(args, 0, "5")))?;
    let drill = match args.get(1) {
        Some(seed) => Drill::new(
            seed.parse()
                .with_context(|| format!("Invalid seed: {}", seed))?,
        ),
        None => Drill::from_entropy(),
    };

    for (i, item) in drill.take(count).enumerate() {
        let notes = item.midi_notes(4, HandSelection::Right)?;
        print_sequence(&format!("{}. {}", i + 1, item.title()), &notes);
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if args.is_empty() {
        println!("KEYWORK - Piano Practice Theory Engine");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let rest = &args[1..];
    match args[0].as_str() {
        "--scale" => show_scale(rest)?,
        "--chord" => show_chord(rest)?,
        "--arpeggio" => show_arpeggio(rest)?,
        "--progression" => show_progression(rest)?,
        "--circle" => show_circle(rest)?,
        "--exercises" => render_exercises(rest)?,
        "--drill" => run_drill(rest)?,
        "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
