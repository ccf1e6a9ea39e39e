//! Peak normalization of one or more waves.

use crate::error::{Error, Result};
use crate::signals::{Sample, WaveBuffer};

/// Largest absolute sample value, widened to `f64`.
///
/// Returns `None` for an empty wave and NaN if any sample is NaN.
pub fn peak<S: Sample>(wave: &[S]) -> Option<f64> {
    let mut samples = wave.iter().map(|s| s.to_f64().abs());
    let first = samples.next()?;
    Some(samples.fold(first, |peak, s| if s > peak || s.is_nan() { s } else { peak }))
}

/// Rescales every wave so its peak magnitude equals `max_amplitude`.
///
/// Each wave is scaled independently by `max_amplitude / peak`. The inputs
/// are left untouched and new buffers are returned in the same order.
///
/// # Errors
///
/// - [`Error::TypeValidation`] if any wave is empty. All waves are checked
///   before any is processed.
/// - [`Error::Normalization`] if a wave is entirely silent (its peak is
///   zero) or contains a NaN.
///
/// # Examples
///
/// ```
/// use wavesmith::normalize;
///
/// let waves = [vec![1i16, -4, 2], vec![100, 50, -25]];
/// let normalized = normalize(&waves, 8.0).unwrap();
/// assert_eq!(normalized[0].as_slice(), &[2.0, -8.0, 4.0]);
/// assert_eq!(normalized[1].as_slice(), &[8.0, 4.0, -2.0]);
/// ```
pub fn normalize<B, S>(waves: &[B], max_amplitude: f64) -> Result<Vec<WaveBuffer<f64>>>
where
    B: AsRef<[S]>,
    S: Sample,
{
    if let Some(index) = waves.iter().position(|wave| wave.as_ref().is_empty()) {
        return Err(Error::TypeValidation {
            index,
            reason: "expected a non-empty sample buffer".to_string(),
        });
    }

    waves
        .iter()
        .enumerate()
        .map(|(index, wave)| normalize_one(index, wave.as_ref(), max_amplitude))
        .collect()
}

fn normalize_one<S: Sample>(
    index: usize,
    wave: &[S],
    max_amplitude: f64,
) -> Result<WaveBuffer<f64>> {
    let peak = peak(wave).unwrap_or(0.0);
    if peak == 0.0 {
        return Err(Error::Normalization {
            index,
            reason: "peak amplitude is zero, cannot divide by it".to_string(),
        });
    }
    if !peak.is_finite() {
        return Err(Error::Normalization {
            index,
            reason: format!("peak amplitude is {}", peak),
        });
    }

    log::debug!("normalizing wave {} with peak {} to {}", index, peak, max_amplitude);
    Ok(wave
        .iter()
        .map(|s| s.to_f64() / peak * max_amplitude)
        .collect())
}
