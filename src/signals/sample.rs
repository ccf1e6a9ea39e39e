//! Numeric sample types accepted by the analysis stages.

use std::fmt::{Debug, Display};

/// A numeric sample that can be widened to `f64`.
///
/// Implemented for the integer formats read from storage and the float
/// formats produced by synthesis.
pub trait Sample: Copy + PartialOrd + Debug + Display + Send + Sync {
    /// Converts the sample to `f64` without loss for every implementor.
    fn to_f64(self) -> f64;
}

impl Sample for i16 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for i32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_extremes_widen_exactly() {
        assert_eq!(i16::MIN.to_f64(), -32768.0);
        assert_eq!(i16::MAX.to_f64(), 32767.0);
        assert_eq!(i32::MIN.to_f64(), -2147483648.0);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(0.5f32.to_f64(), 0.5);
        assert_eq!((-1.25f64).to_f64(), -1.25);
    }
}
