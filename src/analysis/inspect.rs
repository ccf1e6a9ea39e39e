//! Summary statistics of a wave.

use std::fmt;

use crate::error::{Error, Result};
use crate::signals::Sample;

/// Length and extreme values of a wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDetails<S> {
    pub length: usize,
    pub max: S,
    pub min: S,
}

impl<S: Sample> fmt::Display for WaveDetails<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wave Details:")?;
        writeln!(f, "- Length: {}", self.length)?;
        writeln!(f, "- Max Amplitude: {}", self.max)?;
        write!(f, "- Min Amplitude: {}", self.min)
    }
}

/// Computes the length, maximum and minimum of a wave.
///
/// # Errors
///
/// Returns [`Error::TypeValidation`] for an empty wave.
///
/// # Examples
///
/// ```
/// use wavesmith::describe;
///
/// let details = describe(&[3i16, -8, 5]).unwrap();
/// assert_eq!((details.length, details.max, details.min), (3, 5, -8));
/// ```
pub fn describe<S: Sample>(wave: &[S]) -> Result<WaveDetails<S>> {
    let (&first, rest) = wave.split_first().ok_or_else(|| Error::TypeValidation {
        index: 0,
        reason: "expected a non-empty sample buffer".to_string(),
    })?;

    let (max, min) = rest.iter().fold((first, first), |(max, min), &s| {
        (if s > max { s } else { max }, if s < min { s } else { min })
    });
    Ok(WaveDetails {
        length: wave.len(),
        max,
        min,
    })
}

/// Describes a wave and logs the result at info level.
pub fn report<S: Sample>(wave: &[S]) -> Result<WaveDetails<S>> {
    let details = describe(wave)?;
    log::info!("{}", details);
    Ok(details)
}
