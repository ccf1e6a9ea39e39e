//! Sine wave shape.

/// Evaluates `amplitude * sin(angle)`.
pub fn sample(amplitude: f64, angle: f64) -> f64 {
    amplitude * angle.sin()
}
