//! WAV container encoding through `hound`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::signals::WaveBuffer;

/// Serializes 16-bit sample buffers to an audio container on disk.
///
/// Implementations must be shareable across threads, since batch creation
/// may write several files at once.
pub trait ContainerEncoder: Sync {
    /// Writes `samples` as a single-channel file at `sample_rate` Hz.
    fn write(&self, path: &Path, sample_rate: u32, samples: &[i16]) -> Result<()>;
}

/// Uncompressed mono 16-bit PCM WAV encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

/// The WAV format produced by [`WavEncoder`].
pub fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn encode_error(path: &Path, source: hound::Error) -> Error {
    Error::Encode {
        path: path.to_path_buf(),
        source,
    }
}

impl ContainerEncoder for WavEncoder {
    fn write(&self, path: &Path, sample_rate: u32, samples: &[i16]) -> Result<()> {
        let mut writer = hound::WavWriter::create(path, wav_spec(sample_rate))
            .map_err(|e| encode_error(path, e))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| encode_error(path, e))?;
        }
        writer.finalize().map_err(|e| encode_error(path, e))?;

        log::debug!(
            "wrote {} samples at {} Hz to {}",
            samples.len(),
            sample_rate,
            path.display()
        );
        Ok(())
    }
}

/// Reads a mono 16-bit WAV file, returning its sample rate and samples.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be opened or parsed, or if
/// it is not single-channel 16-bit integer PCM.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(u32, WaveBuffer<i16>)> {
    let path = path.as_ref();
    let decode_error = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(decode_error)?;
    let spec = reader.spec();
    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(decode_error(hound::Error::Unsupported));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(decode_error)?;
    Ok((spec.sample_rate, WaveBuffer::new(samples)))
}
