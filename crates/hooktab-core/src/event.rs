use serde::{Deserialize, Serialize};

use crate::SongId;
use crate::section::SectionType;

/// One chord occurrence inside one section of one song.
///
/// Events are created once during flattening and never updated in
/// place; a re-run that produces a different progression produces a new
/// set of events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordEvent {
    /// Deterministic id shared by every event of the same
    /// `(song_id, section_type)` pair, see [`section_id`].
    pub section_id: String,
    pub song_id: SongId,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// The chord token exactly as written in the progression.
    pub roman_numeral: String,
    /// Resolved pitch class 0-11. `None` means the token could not be
    /// resolved against the key; it is never a stand-in for pitch class 0.
    pub absolute_root: Option<u8>,
    /// Bass part of a slash chord ("3" in "I/3"), when present.
    pub inversion: Option<String>,
    /// Heuristic harmonic-tension score, always finite and >= 0.
    pub tension_strain: f32,
}

/// Derives the grouping id for `(song_id, section_type)`. Identical
/// pairs always collide onto the same id so later de-duplication can
/// group events by section.
pub fn section_id(song_id: SongId, section_type: SectionType) -> String {
    format!("{}_{}", song_id, section_type)
        .replace(char::is_whitespace, "_")
        .to_lowercase()
}
