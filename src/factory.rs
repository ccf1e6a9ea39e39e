//! Note-to-file wave generation.
//!
//! A [`WaveFactory`] ties the pipeline together: it resolves a note name to
//! a frequency, synthesizes the wave on its timeline, quantizes it to 16-bit
//! samples and hands the result to a [`ContainerEncoder`].
//!
//! # Examples
//!
//! ```no_run
//! use wavesmith::{WaveFactory, WaveType, WaveformConfig};
//!
//! let factory = WaveFactory::new(WaveformConfig::default())?;
//! // Writes a4_wave.wav to the current directory
//! let wave = factory.create_wave("a4", WaveType::Sine, None)?;
//! assert_eq!(wave.len(), 220500);
//! # Ok::<(), wavesmith::Error>(())
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis;
use crate::config::WaveformConfig;
use crate::error::{Error, Result};
use crate::io::{ContainerEncoder, WavEncoder};
use crate::music::notes;
use crate::oscillators::WaveType;
use crate::signals::{Sample, Timeline, WaveBuffer};
use crate::synthesis::{quantize, synthesize};

/// Generates note waves with a fixed configuration and writes them to disk.
///
/// The configuration and timeline are read-only between calls, so one
/// factory can render many notes, including in parallel.
pub struct WaveFactory<E = WavEncoder> {
    config: WaveformConfig,
    timeline: Timeline,
    output_dir: PathBuf,
    encoder: E,
}

impl WaveFactory<WavEncoder> {
    /// Creates a factory that writes WAV files to the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration has a zero field.
    pub fn new(config: WaveformConfig) -> Result<Self> {
        Self::with_encoder(config, WavEncoder)
    }
}

impl<E: ContainerEncoder> WaveFactory<E> {
    /// Creates a factory that writes through a custom encoder.
    pub fn with_encoder(config: WaveformConfig, encoder: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            timeline: Timeline::new(config.sample_rate, config.duration_seconds),
            config,
            output_dir: PathBuf::from("."),
            encoder,
        })
    }

    /// Sets the directory files are written to.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn config(&self) -> &WaveformConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Replaces the configuration.
    ///
    /// The timeline is rebuilt only if the sample rate or duration changed.
    pub fn reconfigure(&mut self, config: WaveformConfig) -> Result<()> {
        config.validate()?;
        if !self
            .timeline
            .matches(config.sample_rate, config.duration_seconds)
        {
            self.timeline = Timeline::new(config.sample_rate, config.duration_seconds);
        }
        self.config = config;
        Ok(())
    }

    /// Synthesizes a continuous wave on this factory's timeline.
    pub fn normed_wave(&self, frequency: f64, wave_type: WaveType) -> Result<WaveBuffer<f64>> {
        synthesize(
            frequency,
            wave_type,
            &self.timeline,
            f64::from(self.config.max_amplitude),
        )
    }

    /// The file a note's wave is written to: `<name>.wav` if a name is
    /// given, otherwise `<note>_wave.wav`, inside the output directory.
    pub fn output_path(&self, note: &str, name: Option<&str>) -> PathBuf {
        let file_name = match name {
            Some(name) => format!("{}.wav", name),
            None => format!("{}_wave.wav", note),
        };
        self.output_dir.join(file_name)
    }

    /// Synthesizes a note, quantizes it to 16-bit samples and writes it out.
    ///
    /// Returns the quantized samples that were written.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownNote`] if the note is not in the table; nothing is
    ///   synthesized or written.
    /// - [`Error::Creation`] naming the note if synthesis or encoding fails.
    pub fn create_wave(
        &self,
        note: &str,
        wave_type: WaveType,
        name: Option<&str>,
    ) -> Result<WaveBuffer<i16>> {
        let frequency = notes::lookup(note)?;
        let path = self.output_path(note, name);
        log::debug!("creating {} wave for {} ({} Hz)", wave_type, note, frequency);

        self.render(frequency, wave_type, &path)
            .map_err(|source| Error::Creation {
                note: note.to_string(),
                source: Box::new(source),
            })
    }

    fn render(
        &self,
        frequency: f64,
        wave_type: WaveType,
        path: &Path,
    ) -> Result<WaveBuffer<i16>> {
        let wave = quantize(&self.normed_wave(frequency, wave_type)?);
        self.encoder.write(path, self.config.sample_rate, &wave)?;
        Ok(wave)
    }

    /// Creates one wave per note, each written to `<note>_wave.wav`.
    ///
    /// Results are returned in input order. With the `parallel` feature the
    /// notes are rendered concurrently.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownNote`] for the first note missing from the table,
    ///   or [`Error::DuplicateOutput`] if a note repeats. Both are checked
    ///   before anything is rendered.
    /// - Otherwise the first error from [`create_wave`](Self::create_wave).
    pub fn create_waves(
        &self,
        note_names: &[&str],
        wave_type: WaveType,
    ) -> Result<Vec<WaveBuffer<i16>>> {
        let mut seen = HashSet::new();
        for &note in note_names {
            notes::lookup(note)?;
            if !seen.insert(note) {
                return Err(Error::DuplicateOutput {
                    path: self.output_path(note, None),
                });
            }
        }

        #[cfg(feature = "parallel")]
        let iter = note_names.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = note_names.iter();

        iter.map(|note| self.create_wave(note, wave_type, None))
            .collect()
    }

    /// Peak-normalizes waves to this factory's amplitude.
    pub fn normalize_sound_waves<B, S>(&self, waves: &[B]) -> Result<Vec<WaveBuffer<f64>>>
    where
        B: AsRef<[S]>,
        S: Sample,
    {
        analysis::normalize(waves, f64::from(self.config.max_amplitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> WaveformConfig {
        WaveformConfig::new(8000, 1, 8192)
    }

    #[test]
    fn test_timeline_follows_config() {
        let factory = WaveFactory::new(small_config()).unwrap();
        assert_eq!(factory.timeline().len(), 8000);
        assert_eq!(factory.config().max_amplitude, 8192);
    }

    #[test]
    fn test_invalid_config() {
        let result = WaveFactory::new(WaveformConfig::new(0, 1, 8192));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_normed_wave_valid() {
        let factory = WaveFactory::new(small_config()).unwrap();
        for wave_type in WaveType::ALL {
            let wave = factory.normed_wave(440.0, wave_type).unwrap();
            assert_eq!(wave.len(), factory.timeline().len());
        }
    }

    #[test]
    fn test_output_path() {
        let factory = WaveFactory::new(small_config())
            .unwrap()
            .with_output_dir("out");
        assert_eq!(factory.output_dir(), Path::new("out"));
        assert_eq!(factory.output_path("c#4", None), Path::new("out/c#4_wave.wav"));
        assert_eq!(factory.output_path("c#4", Some("lead")), Path::new("out/lead.wav"));
    }

    #[test]
    fn test_reconfigure_rebuilds_timeline() {
        let mut factory = WaveFactory::new(small_config()).unwrap();
        factory
            .reconfigure(small_config().with_max_amplitude(100))
            .unwrap();
        assert_eq!(factory.timeline().len(), 8000);
        assert_eq!(factory.config().max_amplitude, 100);

        factory
            .reconfigure(small_config().with_duration_seconds(2))
            .unwrap();
        assert_eq!(factory.timeline().len(), 16000);
        assert_eq!(factory.timeline()[15999], 2.0);
    }

    #[test]
    fn test_reconfigure_rejects_invalid() {
        let mut factory = WaveFactory::new(small_config()).unwrap();
        assert!(factory.reconfigure(WaveformConfig::new(8000, 0, 1)).is_err());
        assert_eq!(factory.config(), &small_config());
    }

    #[test]
    fn test_normalize_uses_config_amplitude() {
        let factory = WaveFactory::new(small_config().with_max_amplitude(1000)).unwrap();
        let normalized = factory
            .normalize_sound_waves(&[vec![1i16, -2, 4]])
            .unwrap();
        assert_eq!(normalized[0].as_slice(), &[250.0, -500.0, 1000.0]);
    }
}
