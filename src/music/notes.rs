//! Fixed table of note names and their fundamental frequencies.
//!
//! Names are a lowercase pitch letter, an optional `#` and an octave digit
//! from 0 to 7 (`"a4"`, `"c#3"`). The literal `"0"` is the rest note and
//! maps to 0 Hz. Octave numbers in this table advance at E rather than at
//! C, so `"c4"` is 523.2511 Hz and `"a4"` is 440 Hz.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Name of the rest note.
pub const REST: &str = "0";

/// A note name paired with its frequency in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteFrequency {
    pub name: &'static str,
    pub hz: f64,
}

impl NoteFrequency {
    const fn new(name: &'static str, hz: f64) -> Self {
        Self { name, hz }
    }

    /// Returns `true` for the rest note.
    pub fn is_rest(&self) -> bool {
        self.hz == 0.0
    }
}

/// Every known note, in table order.
#[rustfmt::skip]
pub const NOTES: &[NoteFrequency] = &[
    NoteFrequency::new("0", 0.0),
    NoteFrequency::new("e0", 20.60172), NoteFrequency::new("f0", 21.82676), NoteFrequency::new("f#0", 23.12465),
    NoteFrequency::new("g0", 24.49971), NoteFrequency::new("g#0", 25.95654), NoteFrequency::new("a0", 27.50000),
    NoteFrequency::new("a#0", 29.13524), NoteFrequency::new("b0", 30.86771), NoteFrequency::new("c0", 32.70320),
    NoteFrequency::new("c#0", 34.64783), NoteFrequency::new("d0", 36.70810), NoteFrequency::new("d#0", 38.89087),
    NoteFrequency::new("e1", 41.20344), NoteFrequency::new("f1", 43.65353), NoteFrequency::new("f#1", 46.24930),
    NoteFrequency::new("g1", 48.99943), NoteFrequency::new("g#1", 51.91309), NoteFrequency::new("a1", 55.00000),
    NoteFrequency::new("a#1", 58.27047), NoteFrequency::new("b1", 61.73541), NoteFrequency::new("c1", 65.40639),
    NoteFrequency::new("c#1", 69.29566), NoteFrequency::new("d1", 73.41619), NoteFrequency::new("d#1", 77.78175),
    NoteFrequency::new("e2", 82.40689), NoteFrequency::new("f2", 87.30706), NoteFrequency::new("f#2", 92.49861),
    NoteFrequency::new("g2", 97.99886), NoteFrequency::new("g#2", 103.8262), NoteFrequency::new("a2", 110.0000),
    NoteFrequency::new("a#2", 116.5409), NoteFrequency::new("b2", 123.4708), NoteFrequency::new("c2", 130.8128),
    NoteFrequency::new("c#2", 138.5913), NoteFrequency::new("d2", 146.8324), NoteFrequency::new("d#2", 155.5635),
    NoteFrequency::new("e3", 164.8138), NoteFrequency::new("f3", 174.6141), NoteFrequency::new("f#3", 184.9972),
    NoteFrequency::new("g3", 195.9977), NoteFrequency::new("g#3", 207.6523), NoteFrequency::new("a3", 220.0000),
    NoteFrequency::new("a#3", 233.0819), NoteFrequency::new("b3", 246.9417), NoteFrequency::new("c3", 261.6256),
    NoteFrequency::new("c#3", 277.1826), NoteFrequency::new("d3", 293.6648), NoteFrequency::new("d#3", 311.1270),
    NoteFrequency::new("e4", 329.6276), NoteFrequency::new("f4", 349.2282), NoteFrequency::new("f#4", 369.9944),
    NoteFrequency::new("g4", 391.9954), NoteFrequency::new("g#4", 415.3047), NoteFrequency::new("a4", 440.0000),
    NoteFrequency::new("a#4", 466.1638), NoteFrequency::new("b4", 493.8833), NoteFrequency::new("c4", 523.2511),
    NoteFrequency::new("c#4", 554.3653), NoteFrequency::new("d4", 587.3295), NoteFrequency::new("d#4", 622.2540),
    NoteFrequency::new("e5", 659.2551), NoteFrequency::new("f5", 698.4565), NoteFrequency::new("f#5", 739.9888),
    NoteFrequency::new("g5", 783.9909), NoteFrequency::new("g#5", 830.6094), NoteFrequency::new("a5", 880.0000),
    NoteFrequency::new("a#5", 932.3275), NoteFrequency::new("b5", 987.7666), NoteFrequency::new("c5", 1046.502),
    NoteFrequency::new("c#5", 1108.731), NoteFrequency::new("d5", 1174.659), NoteFrequency::new("d#5", 1244.508),
    NoteFrequency::new("e6", 1318.510), NoteFrequency::new("f6", 1396.913), NoteFrequency::new("f#6", 1479.978),
    NoteFrequency::new("g6", 1567.982), NoteFrequency::new("g#6", 1661.219), NoteFrequency::new("a6", 1760.000),
    NoteFrequency::new("a#6", 1864.655), NoteFrequency::new("b6", 1975.533), NoteFrequency::new("c6", 2093.005),
    NoteFrequency::new("c#6", 2217.461), NoteFrequency::new("d6", 2349.318), NoteFrequency::new("d#6", 2489.016),
    NoteFrequency::new("e7", 2637.020), NoteFrequency::new("f7", 2793.826), NoteFrequency::new("f#7", 2959.955),
    NoteFrequency::new("g7", 3135.963), NoteFrequency::new("g#7", 3322.438), NoteFrequency::new("a7", 3520.000),
    NoteFrequency::new("a#7", 3729.310), NoteFrequency::new("b7", 3951.066), NoteFrequency::new("c7", 4186.009),
    NoteFrequency::new("c#7", 4434.922), NoteFrequency::new("d7", 4698.636), NoteFrequency::new("d#7", 4978.032),
];

static BY_NAME: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| NOTES.iter().map(|note| (note.name, note.hz)).collect());

/// Looks up the frequency of a note by name.
///
/// # Errors
///
/// Returns [`Error::UnknownNote`] if the name is not in the table.
///
/// # Examples
///
/// ```
/// use wavesmith::music::notes::lookup;
///
/// assert_eq!(lookup("a4").unwrap(), 440.0);
/// assert_eq!(lookup("0").unwrap(), 0.0);
/// assert!(lookup("z9").is_err());
/// ```
pub fn lookup(note: &str) -> Result<f64> {
    BY_NAME.get(note).copied().ok_or_else(|| Error::UnknownNote {
        note: note.to_string(),
    })
}
