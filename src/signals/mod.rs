//! Sample containers and time bases.
//!
//! This module provides the data that flows through the pipeline:
//! - `Timeline` for the instants at which a wave is sampled
//! - `WaveBuffer` for owned runs of samples
//! - `Sample` for the numeric types the analysis stages accept

mod buffer;
mod sample;
mod timeline;

pub use buffer::WaveBuffer;
pub use sample::Sample;
pub use timeline::Timeline;
