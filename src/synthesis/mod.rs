//! Waveform synthesis.
//!
//! `synthesize` evaluates a wave shape at every point of a timeline and
//! `quantize` narrows the result to 16-bit samples.

mod quantize;

pub use quantize::{narrow_to_i16, quantize};

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::oscillators::WaveType;
use crate::signals::WaveBuffer;

/// Samples a periodic wave of `frequency` Hz over `timeline`.
///
/// Each output sample is `wave_type` evaluated at `2 * pi * frequency * t`
/// and scaled to `max_amplitude`. The output has exactly one sample per
/// time point. A frequency of 0 yields silence for every shape.
///
/// # Errors
///
/// Returns [`Error::Synthesis`] if the frequency or amplitude is not finite,
/// or if any computed sample is not finite.
///
/// # Examples
///
/// ```
/// use wavesmith::{synthesize, Timeline, WaveType};
///
/// let timeline = Timeline::new(5, 1);
/// let wave = synthesize(440.0, WaveType::Sine, &timeline, 8192.0).unwrap();
/// assert_eq!(wave.len(), 5);
/// assert_eq!(wave[0], 0.0);
/// ```
pub fn synthesize(
    frequency: f64,
    wave_type: WaveType,
    timeline: &[f64],
    max_amplitude: f64,
) -> Result<WaveBuffer<f64>> {
    if !frequency.is_finite() {
        return Err(Error::Synthesis {
            reason: format!("frequency {} is not finite", frequency),
        });
    }
    if !max_amplitude.is_finite() {
        return Err(Error::Synthesis {
            reason: format!("amplitude {} is not finite", max_amplitude),
        });
    }

    let angular = 2.0 * PI * frequency;
    let samples: Vec<f64> = timeline
        .iter()
        .map(|&t| wave_type.sample(max_amplitude, angular * t))
        .collect();

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(Error::Synthesis {
            reason: format!(
                "non-finite {} sample at t = {} for {} Hz",
                wave_type, timeline[index], frequency
            ),
        });
    }

    debug_assert_eq!(samples.len(), timeline.len());
    log::debug!(
        "synthesized {} samples of a {} Hz {} wave",
        samples.len(),
        frequency,
        wave_type
    );
    Ok(WaveBuffer::new(samples))
}
