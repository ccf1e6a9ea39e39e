//! Waveform configuration.
//!
//! A [`WaveformConfig`] fixes the sample rate, duration and peak amplitude
//! shared by every wave a [`WaveFactory`](crate::WaveFactory) produces. It
//! can be built in code or loaded from JSON; missing fields fall back to
//! the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default sampling rate in Hz (44.1 kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Default duration of a generated wave in seconds.
pub const DURATION_SECONDS: u32 = 5;

/// Default peak amplitude of a generated wave (2^13).
pub const MAX_AMPLITUDE: u32 = 1 << 13;

/// Sample rate, duration and peak amplitude of generated waves.
///
/// # Examples
///
/// ```
/// use wavesmith::WaveformConfig;
///
/// let config = WaveformConfig::default().with_duration_seconds(2);
/// assert_eq!(config.sample_count(), 88200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Number of samples per second.
    pub sample_rate: u32,
    /// Length of every wave in seconds.
    pub duration_seconds: u32,
    /// Peak of the continuous signal and ceiling of the quantized one.
    pub max_amplitude: u32,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration_seconds: DURATION_SECONDS,
            max_amplitude: MAX_AMPLITUDE,
        }
    }
}

impl WaveformConfig {
    /// Creates a configuration from explicit values.
    pub fn new(sample_rate: u32, duration_seconds: u32, max_amplitude: u32) -> Self {
        Self {
            sample_rate,
            duration_seconds,
            max_amplitude,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    pub fn with_max_amplitude(mut self, max_amplitude: u32) -> Self {
        self.max_amplitude = max_amplitude;
        self
    }

    /// Number of samples in every wave: `sample_rate * duration_seconds`.
    pub fn sample_count(&self) -> usize {
        self.sample_rate as usize * self.duration_seconds as usize
    }

    /// Checks that every field is positive.
    ///
    /// An amplitude beyond the 16-bit range is allowed but logged, since
    /// quantized samples above it wrap around.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::Config {
                reason: "sample rate must be positive".to_string(),
            });
        }
        if self.duration_seconds == 0 {
            return Err(Error::Config {
                reason: "duration must be positive".to_string(),
            });
        }
        if self.max_amplitude == 0 {
            return Err(Error::Config {
                reason: "max amplitude must be positive".to_string(),
            });
        }
        if self.max_amplitude > i16::MAX as u32 {
            log::warn!(
                "max amplitude {} exceeds the 16-bit sample range, quantized samples will wrap",
                self.max_amplitude
            );
        }
        Ok(())
    }

    /// Parses a configuration from a JSON document and validates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavesmith::WaveformConfig;
    ///
    /// let config = WaveformConfig::from_json_str(r#"{ "sample_rate": 8000 }"#).unwrap();
    /// assert_eq!(config.sample_rate, 8000);
    /// assert_eq!(config.duration_seconds, 5);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration stored as JSON.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WaveformConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_seconds, 5);
        assert_eq!(config.max_amplitude, 8192);
        assert_eq!(config.sample_count(), 220500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = WaveformConfig::default()
            .with_sample_rate(8000)
            .with_duration_seconds(1)
            .with_max_amplitude(1000);
        assert_eq!(config, WaveformConfig::new(8000, 1, 1000));
    }

    #[test]
    fn test_zero_fields_rejected() {
        for config in [
            WaveformConfig::new(0, 5, 8192),
            WaveformConfig::new(44100, 0, 8192),
            WaveformConfig::new(44100, 5, 0),
        ] {
            assert!(matches!(config.validate(), Err(Error::Config { .. })));
        }
    }

    #[test]
    fn test_large_amplitude_is_accepted() {
        let config = WaveformConfig::default().with_max_amplitude(40000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = WaveformConfig::from_json_str(r#"{ "max_amplitude": 1000 }"#).unwrap();
        assert_eq!(config.sample_rate, SAMPLE_RATE);
        assert_eq!(config.max_amplitude, 1000);
    }

    #[test]
    fn test_invalid_json() {
        let result = WaveformConfig::from_json_str(r#"{ "sample_rate": "fast" }"#);
        assert!(matches!(result, Err(Error::Config { .. })));

        let result = WaveformConfig::from_json_str(r#"{ "duration_seconds": 0 }"#);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sample_rate": 22050, "duration_seconds": 2 }}"#).unwrap();
        let config = WaveformConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, WaveformConfig::new(22050, 2, MAX_AMPLITUDE));
    }

    #[test]
    fn test_missing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WaveformConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::ConfigFile { .. })));
    }
}
