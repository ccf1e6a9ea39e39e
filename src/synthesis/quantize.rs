//! Narrowing of continuous samples to 16-bit integers.

use crate::signals::WaveBuffer;

/// Narrows one sample to `i16`.
///
/// The fractional part is truncated toward zero, then the integer wraps
/// modulo 2^16 into the `i16` range. Neither step rounds or saturates, so
/// `32768.5` becomes `-32768` and `-1.9` becomes `-1`.
///
/// # Examples
///
/// ```
/// use wavesmith::synthesis::narrow_to_i16;
///
/// assert_eq!(narrow_to_i16(8191.99), 8191);
/// assert_eq!(narrow_to_i16(-0.7), 0);
/// assert_eq!(narrow_to_i16(40000.0), -25536);
/// ```
pub fn narrow_to_i16(sample: f64) -> i16 {
    (sample as i64) as i16
}

/// Quantizes a continuous wave sample by sample with [`narrow_to_i16`].
pub fn quantize(samples: &[f64]) -> WaveBuffer<i16> {
    samples.iter().map(|&sample| narrow_to_i16(sample)).collect()
}
