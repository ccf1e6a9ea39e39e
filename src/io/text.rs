//! Plain-text sample arrays, one value per line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result, TextError};
use crate::signals::{Sample, WaveBuffer};
use crate::synthesis::narrow_to_i16;

/// Reads a wave stored as text, one number per line.
///
/// Blank lines and anything after a `#` are ignored. Each value is parsed
/// as a float and narrowed with [`narrow_to_i16`], so `"12.7"` reads as 12.
///
/// # Errors
///
/// Returns [`Error::Read`] naming the file if it cannot be opened, holds a
/// value that is not a finite number, or holds no values at all.
pub fn read_wave_from_txt<P: AsRef<Path>>(path: P) -> Result<WaveBuffer<i16>> {
    let path = path.as_ref();
    parse_samples(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_samples(path: &Path) -> std::result::Result<WaveBuffer<i16>, TextError> {
    let text = fs::read_to_string(path)?;

    let mut samples = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let value = match line.split('#').next() {
            Some(value) => value.trim(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        let parsed = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TextError::Parse {
                line: index + 1,
                text: value.to_string(),
            })?;
        samples.push(narrow_to_i16(parsed));
    }

    if samples.is_empty() {
        return Err(TextError::Empty);
    }
    Ok(WaveBuffer::new(samples))
}

/// Writes a wave as text, one value per line in scientific notation.
pub fn write_wave_to_txt<P, S>(path: P, samples: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: Sample,
{
    let path = path.as_ref();
    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for &sample in samples {
            writeln!(out, "{:.18e}", sample.to_f64())?;
        }
        out.flush()
    };
    write().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn write_text(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_valid() {
        let file = write_text("1\n-2\n300\n");
        let wave = read_wave_from_txt(file.path()).unwrap();
        assert_eq!(wave.as_slice(), &[1, -2, 300]);
    }

    #[test]
    fn test_read_truncates_floats() {
        let file = write_text("12.7\n-3.9\n1.234000000000000000e+03\n");
        let wave = read_wave_from_txt(file.path()).unwrap();
        assert_eq!(wave.as_slice(), &[12, -3, 1234]);
    }

    #[test]
    fn test_read_skips_blanks_and_comments() {
        let file = write_text("# header\n\n5\n  6  # trailing\n\n");
        let wave = read_wave_from_txt(file.path()).unwrap();
        assert_eq!(wave.as_slice(), &[5, 6]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("non_existent_file.txt");
        match read_wave_from_txt(&path) {
            Err(Error::Read { path: p, source: TextError::Io(_) }) => assert_eq!(p, path),
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_malformed() {
        let file = write_text("1\nabc\n3\n");
        match read_wave_from_txt(file.path()) {
            Err(Error::Read { source: TextError::Parse { line, text }, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "abc");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_non_finite() {
        let file = write_text("nan\n");
        assert!(matches!(
            read_wave_from_txt(file.path()),
            Err(Error::Read { source: TextError::Parse { .. }, .. })
        ));
    }

    #[test]
    fn test_read_empty_file() {
        let file = write_text("\n# nothing\n");
        assert!(matches!(
            read_wave_from_txt(file.path()),
            Err(Error::Read { source: TextError::Empty, .. })
        ));
    }

    #[test]
    fn test_random_wave_survives_text() {
        let mut rng = rand::thread_rng();
        let samples: Vec<i16> = (0..1000).map(|_| rng.gen_range(i16::MIN..=i16::MAX)).collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_wave.txt");

        write_wave_to_txt(&path, &samples).unwrap();
        let wave = read_wave_from_txt(&path).unwrap();
        assert_eq!(wave.as_slice(), samples.as_slice());
    }

    #[test]
    fn test_write_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wave.txt");
        let result = write_wave_to_txt(&path, &[1.0f64]);
        assert!(matches!(result, Err(Error::Write { .. })));
    }
}
