//! Triangle wave shape.

use std::f64::consts::PI;

/// Evaluates `amplitude * (2 / pi) * asin(sin(angle))`.
///
/// The waveform rises linearly from 0 to `amplitude` over the first quarter
/// period, falls to `-amplitude` at three quarters and climbs back to 0.
pub fn sample(amplitude: f64, angle: f64) -> f64 {
    amplitude * (2.0 / PI) * angle.sin().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_phase() {
        assert_eq!(sample(8192.0, 0.0), 0.0);
    }

    #[test]
    fn test_peaks() {
        assert!((sample(1000.0, PI / 2.0) - 1000.0).abs() < 1e-6);
        assert!((sample(1000.0, 3.0 * PI / 2.0) + 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_range() {
        for i in 0..10000 {
            let value = sample(1.0, i as f64 * 0.0119);
            assert!(value >= -1.0 - 1e-12 && value <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_linearity() {
        let s1 = sample(1.0, 0.1);
        let s2 = sample(1.0, 0.2);
        let s3 = sample(1.0, 0.3);

        // Equal steps on the rising edge
        assert!(((s2 - s1) - (s3 - s2)).abs() < 1e-9);
    }

    #[test]
    fn test_falling_edge() {
        let rising = sample(1.0, PI / 4.0);
        let falling = sample(1.0, 3.0 * PI / 4.0);
        assert!((rising - 0.5).abs() < 1e-9);
        assert!((falling - 0.5).abs() < 1e-9);
        assert!(sample(1.0, PI - 0.1) < sample(1.0, PI - 0.2));
    }
}
