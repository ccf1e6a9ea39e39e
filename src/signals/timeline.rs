//! Sampling instants for a fixed-length wave.

use std::ops::Deref;

/// Evenly spaced time points covering `[0, duration_seconds]`.
///
/// A timeline holds `sample_rate * duration_seconds` points. Both endpoints
/// are included, so the spacing is `duration / (len - 1)` rather than the
/// sample period `1 / sample_rate`.
///
/// # Examples
///
/// ```
/// use wavesmith::Timeline;
///
/// let timeline = Timeline::new(5, 1);
/// assert_eq!(timeline.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    sample_rate: u32,
    duration_seconds: u32,
    points: Vec<f64>,
}

impl Timeline {
    /// Builds the timeline for a sample rate and duration.
    ///
    /// A zero sample rate or duration yields an empty timeline.
    pub fn new(sample_rate: u32, duration_seconds: u32) -> Self {
        let len = sample_rate as usize * duration_seconds as usize;
        let stop = duration_seconds as f64;

        let points = match len {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let step = stop / (len - 1) as f64;
                let mut points: Vec<f64> = (0..len).map(|i| i as f64 * step).collect();
                // Pin the endpoint so it does not drift with the step.
                points[len - 1] = stop;
                points
            }
        };

        Self {
            sample_rate,
            duration_seconds,
            points,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// The time points in seconds.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns `true` if this timeline was built for the given rate and duration.
    pub fn matches(&self, sample_rate: u32, duration_seconds: u32) -> bool {
        self.sample_rate == sample_rate && self.duration_seconds == duration_seconds
    }
}

impl Deref for Timeline {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.points
    }
}
