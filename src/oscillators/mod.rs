//! Periodic wave shapes.
//!
//! This module contains the closed set of supported shapes, `WaveType`, and
//! one file per shape evaluating it at a phase angle.

pub mod sine;
pub mod square;
pub mod triangle;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The shape of a synthesized wave.
///
/// Parsing accepts `"sin"`, `"sine"`, `"square"` and `"triangle"` in any
/// case; anything else is [`Error::InvalidWaveType`].
///
/// # Examples
///
/// ```
/// use wavesmith::WaveType;
///
/// let wave_type: WaveType = "square".parse().unwrap();
/// assert_eq!(wave_type, WaveType::Square);
/// assert!("sawtooth".parse::<WaveType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveType {
    #[default]
    #[serde(rename = "sin", alias = "sine")]
    Sine,
    Square,
    Triangle,
}

impl WaveType {
    /// All supported shapes.
    pub const ALL: [WaveType; 3] = [WaveType::Sine, WaveType::Square, WaveType::Triangle];

    /// Evaluates this shape at `angle` radians, scaled to `amplitude`.
    pub fn sample(self, amplitude: f64, angle: f64) -> f64 {
        match self {
            WaveType::Sine => sine::sample(amplitude, angle),
            WaveType::Square => square::sample(amplitude, angle),
            WaveType::Triangle => triangle::sample(amplitude, angle),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveType::Sine => "sin",
            WaveType::Square => "square",
            WaveType::Triangle => "triangle",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sin" | "sine" => Ok(WaveType::Sine),
            "square" => Ok(WaveType::Square),
            "triangle" => Ok(WaveType::Triangle),
            _ => Err(Error::InvalidWaveType {
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_parse() {
        assert_eq!("sin".parse::<WaveType>().unwrap(), WaveType::Sine);
        assert_eq!("Sine".parse::<WaveType>().unwrap(), WaveType::Sine);
        assert_eq!("SQUARE".parse::<WaveType>().unwrap(), WaveType::Square);
        assert_eq!("triangle".parse::<WaveType>().unwrap(), WaveType::Triangle);
    }

    #[test]
    fn test_parse_invalid() {
        match "sawtooth".parse::<WaveType>() {
            Err(Error::InvalidWaveType { found }) => assert_eq!(found, "sawtooth"),
            other => panic!("expected InvalidWaveType, got {:?}", other),
        }
    }

    #[test]
    fn test_display_parses_back() {
        for wave_type in WaveType::ALL {
            assert_eq!(wave_type.to_string().parse::<WaveType>().unwrap(), wave_type);
        }
    }

    #[test]
    fn test_default_is_sine() {
        assert_eq!(WaveType::default(), WaveType::Sine);
    }

    #[test]
    fn test_dispatch() {
        let angle = PI / 6.0;
        assert_eq!(WaveType::Sine.sample(2.0, angle), sine::sample(2.0, angle));
        assert_eq!(WaveType::Square.sample(2.0, angle), 2.0);
        assert!((WaveType::Triangle.sample(3.0, angle) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&WaveType::Sine).unwrap(), "\"sin\"");
        assert_eq!(
            serde_json::from_str::<WaveType>("\"sine\"").unwrap(),
            WaveType::Sine
        );
        assert_eq!(
            serde_json::from_str::<WaveType>("\"triangle\"").unwrap(),
            WaveType::Triangle
        );
    }
}
