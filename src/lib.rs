//! Wavesmith - note waveform synthesis for Rust
//!
//! This library turns note names into sampled waves, stores them as WAV
//! files and provides peak normalization and inspection of sample buffers.
//!
//! The pipeline runs note table → frequency → synthesizer (over a
//! [`Timeline`]) → 16-bit quantizer → container encoder. Buffers from
//! synthesis or from text files can independently be normalized or
//! inspected.
//!
//! # Examples
//!
//! ```
//! use wavesmith::{normalize, synthesize, Timeline, WaveType};
//!
//! let frequency = wavesmith::music::lookup("a4").unwrap();
//! let timeline = Timeline::new(8000, 1);
//! let wave = synthesize(frequency, WaveType::Triangle, &timeline, 1000.0).unwrap();
//! let normalized = normalize(&[wave], 8192.0).unwrap();
//! assert_eq!(normalized[0].len(), 8000);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod factory;
pub mod io;
pub mod music;
pub mod oscillators;
pub mod signals;
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use analysis::{WaveDetails, describe, normalize, report};
pub use config::WaveformConfig;
pub use error::{Error, Result, TextError};
pub use factory::WaveFactory;
pub use io::{ContainerEncoder, WavEncoder, read_wav, read_wave_from_txt, write_wave_to_txt};
pub use oscillators::WaveType;
pub use signals::{Sample, Timeline, WaveBuffer};
pub use synthesis::{quantize, synthesize};
