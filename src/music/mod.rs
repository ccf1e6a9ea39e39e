//! Musical pitch data.

pub mod notes;

pub use notes::{NOTES, NoteFrequency, lookup};
