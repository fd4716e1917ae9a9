//! One independent pattern matcher per page field.
//!
//! Contract shared by every extractor: given well-formed text it either
//! returns a typed value or "not found" (`None` / empty collection).
//! Absence is a normal, silent outcome; none of these functions panic
//! or error on text that simply lacks the field.

pub mod chords;
pub mod genre;
pub mod key_mode;
pub mod measures;
pub mod progression;
pub mod scores;
pub mod section;
pub mod tempo;
pub mod title_artist;

pub use chords::{extract_absolute_roots, extract_inversions, extract_roman_numerals};
pub use genre::extract_genre;
pub use key_mode::extract_key_mode;
pub use measures::{extract_end_measure, extract_start_measure};
pub use progression::extract_chord_progression;
pub use scores::{
    extract_chord_bass_melody, extract_chord_complexity, extract_chord_melody_tension,
    extract_chord_progression_novelty, extract_melodic_complexity, extract_trend_probability,
};
pub use section::extract_section_type;
pub use tempo::extract_bpm;
pub use title_artist::extract_title_artist;
