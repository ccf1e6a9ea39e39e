//! Whole-buffer analysis: peak normalization and summary statistics.

mod inspect;
mod normalize;

pub use inspect::{WaveDetails, describe, report};
pub use normalize::{normalize, peak};
