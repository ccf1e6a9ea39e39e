//! Square wave shape.

/// Sign of `x`, mapping both zeros to zero and NaN to NaN.
///
/// `f64::signum` returns `1.0` for `+0.0`, which would turn the zero
/// crossings of a square wave into full-scale samples.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Evaluates `amplitude * sign(sin(angle))`.
pub fn sample(amplitude: f64, angle: f64) -> f64 {
    amplitude * sign(angle.sin())
}
