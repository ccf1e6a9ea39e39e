//! Error types shared by every stage of the pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for wave generation and processing.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while generating, processing or storing waves.
#[derive(Debug, Error)]
pub enum Error {
    /// The note name is not present in the note table.
    #[error("note '{note}' is not defined in the note table")]
    UnknownNote {
        /// The requested note name.
        note: String,
    },

    /// The wave type is outside the supported set.
    #[error("invalid wave type '{found}', supported types: 'sin', 'square', 'triangle'")]
    InvalidWaveType {
        /// The rejected wave type name.
        found: String,
    },

    /// Numeric failure while computing a waveform.
    #[error("error generating waveform: {reason}")]
    Synthesis {
        /// What went wrong.
        reason: String,
    },

    /// Failure while synthesizing or encoding a note to disk.
    #[error("error creating wave for note '{note}': {source}")]
    Creation {
        /// The note being created.
        note: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// An element handed to the normalizer or inspector is not a usable buffer.
    #[error("wave {index} is not a valid buffer: {reason}")]
    TypeValidation {
        /// Position of the offending element.
        index: usize,
        /// Why it was rejected.
        reason: String,
    },

    /// A buffer cannot be peak-normalized.
    #[error("error normalizing wave {index}: {reason}")]
    Normalization {
        /// Position of the offending buffer.
        index: usize,
        /// Why normalization failed.
        reason: String,
    },

    /// A text array could not be read.
    #[error("error reading wave from text file '{}': {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: TextError,
    },

    /// A text array could not be written.
    #[error("error writing wave to text file '{}': {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// The container encoder failed to write a file.
    #[error("error encoding wave to '{}': {source}", path.display())]
    Encode {
        /// The destination file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: hound::Error,
    },

    /// A container file could not be decoded.
    #[error("error decoding wave from '{}': {source}", path.display())]
    Decode {
        /// The source file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: hound::Error,
    },

    /// The waveform configuration is unusable.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What is wrong with it.
        reason: String,
    },

    /// A configuration file could not be loaded.
    #[error("error loading configuration from '{}': {source}", path.display())]
    ConfigFile {
        /// The configuration file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Two waves in one batch would be written to the same file.
    #[error("more than one wave in the batch targets '{}'", path.display())]
    DuplicateOutput {
        /// The contested output file.
        path: PathBuf,
    },
}

/// Failures specific to reading plain-text sample arrays.
#[derive(Debug, Error)]
pub enum TextError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line did not hold a finite number.
    #[error("line {line}: cannot convert '{text}' to a sample")]
    Parse { line: usize, text: String },

    #[error("file contains no samples")]
    Empty,
}
