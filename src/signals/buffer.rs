//! Owned sample buffers.

use std::ops::Deref;

/// An ordered sequence of samples.
///
/// Continuous waves use `WaveBuffer<f64>`; quantized waves and waves read
/// from storage use `WaveBuffer<i16>`. The buffer has no identity beyond
/// its contents.
///
/// # Examples
///
/// ```
/// use wavesmith::WaveBuffer;
///
/// let wave = WaveBuffer::from(vec![0i16, 100, -100]);
/// assert_eq!(wave.len(), 3);
/// assert_eq!(wave[1], 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveBuffer<T> {
    samples: Vec<T>,
}

impl<T> WaveBuffer<T> {
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_vec(self) -> Vec<T> {
        self.samples
    }
}

impl<T> From<Vec<T>> for WaveBuffer<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::new(samples)
    }
}

impl<T> FromIterator<T> for WaveBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Deref for WaveBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> AsRef<[T]> for WaveBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> IntoIterator for WaveBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a WaveBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
