//! Renders a handful of notes to WAV files and prints their details.
//!
//! Usage:
//!
//! ```text
//! cargo run --example render_notes -- a4 c4 e4 --wave-type triangle --out-dir renders
//! cargo run --example render_notes -- --text wave.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see every stage of the pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wavesmith::{WaveBuffer, WaveFactory, WaveType, WaveformConfig, read_wave_from_txt};

#[derive(Debug, Parser)]
#[command(about = "Render notes to WAV files, then normalize and inspect them")]
struct Args {
    /// Notes to render (e.g. a4, c#3, 0 for silence)
    #[arg(default_values = ["a4", "c4", "e4"])]
    notes: Vec<String>,

    /// Wave shape: sin, square or triangle
    #[arg(long, default_value = "sin")]
    wave_type: String,

    /// Directory the WAV files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with sample_rate, duration_seconds and max_amplitude
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text file with one sample per line to include in normalization
    #[arg(long)]
    text: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let wave_type: WaveType = args.wave_type.parse()?;
    let config = match &args.config {
        Some(path) => WaveformConfig::from_json_file(path)?,
        None => WaveformConfig::default(),
    };
    let factory = WaveFactory::new(config)?.with_output_dir(&args.out_dir);

    let notes: Vec<&str> = args.notes.iter().map(String::as_str).collect();
    let mut waves: Vec<WaveBuffer<i16>> = factory
        .create_waves(&notes, wave_type)
        .context("failed to render notes")?;
    for (note, wave) in notes.iter().zip(&waves) {
        println!("{} -> {}", note, factory.output_path(note, None).display());
        println!("{}", wavesmith::describe(wave)?);
    }

    if let Some(path) = &args.text {
        let wave = read_wave_from_txt(path)?;
        println!("{}", path.display());
        println!("{}", wavesmith::describe(&wave)?);
        waves.push(wave);
    }

    println!("Normalized to {}:", factory.config().max_amplitude);
    for wave in factory.normalize_sound_waves(&waves)? {
        println!("{}", wavesmith::report(&wave)?);
    }

    Ok(())
}
