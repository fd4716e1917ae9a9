use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::section::SectionType;

/// A chord token paired with the bass note it is played over, as written
/// on the page ("I/3", "IV/B").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inversion {
    pub chord: String,
    pub bass: String,
}

/// Everything the extractors can pull out of one scraped page.
///
/// Every field is independently optional: `None` means the page did not
/// carry that datum. Absence is never collapsed into 0 or an empty
/// string, because downstream consumers distinguish "no data" from a
/// measured zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SongMetadata {
    pub bpm: Option<u32>,
    /// Tonic letter A-G with ASCII accidental ("F#", "Bb").
    pub key_tonic: Option<String>,
    pub mode: Option<Mode>,
    pub genre: Option<String>,

    pub chord_complexity: Option<u32>,
    pub melodic_complexity: Option<u32>,
    pub trend_probability: Option<f64>,
    pub chord_melody_tension: Option<u32>,
    pub chord_progression_novelty: Option<u32>,
    pub chord_bass_melody: Option<u32>,

    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub start_measure: Option<u32>,
    pub end_measure: Option<u32>,

    /// Distinct chord-like tokens in first-appearance order.
    #[serde(rename = "roman_numeral")]
    pub roman_numerals: Vec<String>,
    /// Distinct note-letter tokens with ASCII accidentals, first-appearance order.
    #[serde(rename = "absolute_root")]
    pub absolute_roots: Vec<String>,
    #[serde(rename = "inversion")]
    pub inversions: Vec<Inversion>,
    /// Space-normalized progression string ("I V vi IV").
    pub chord_progression: Option<String>,

    pub song_title: Option<String>,
    pub artist: Option<String>,
}

impl SongMetadata {
    /// True when the page yielded a usable tonal center, i.e. the
    /// key/mode pair was found as one unit.
    pub fn has_key(&self) -> bool {
        self.key_tonic.is_some() && self.mode.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_unknown() {
        let meta = SongMetadata::default();
        assert_eq!(meta.bpm, None);
        assert_eq!(meta.key_tonic, None);
        assert_eq!(meta.section_type, SectionType::Unknown);
        assert!(meta.roman_numerals.is_empty());
        assert!(!meta.has_key());
    }

    #[test]
    fn serializes_with_boundary_field_names() {
        let meta = SongMetadata {
            bpm: Some(120),
            section_type: SectionType::Chorus,
            roman_numerals: vec!["I".to_string(), "V".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["type"], "Chorus");
        assert_eq!(json["roman_numeral"][1], "V");
        // Absent fields serialize to null, never 0.
        assert!(json["key_tonic"].is_null());
    }
}
