//! Storage of waves: audio containers and plain-text arrays.

pub mod text;
pub mod wav;

pub use text::{read_wave_from_txt, write_wave_to_txt};
pub use wav::{ContainerEncoder, WavEncoder, read_wav};
