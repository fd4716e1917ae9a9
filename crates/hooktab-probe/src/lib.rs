//! Text-to-structured-data extraction for TheoryTab song pages.
//!
//! Everything here is pure and synchronous: the input is the visible
//! text of one scraped page, the output is a [`SongMetadata`] record or
//! a sequence of [`ChordEvent`]s. Fetching the page and persisting the
//! results are the callers' concern.

pub mod extract;
pub mod fields;
pub mod flatten;
pub mod theory;

pub use extract::extract_song_metadata;
pub use flatten::flatten_progression;

pub use hooktab_core::{ChordEvent, Inversion, Mode, SectionType, SongMetadata};
