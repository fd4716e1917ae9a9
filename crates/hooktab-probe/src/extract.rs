use hooktab_core::SongMetadata;

use crate::fields;

/// Runs every field extractor over one page's text and merges the
/// results into a single record.
///
/// Fields whose extractor finds nothing stay at their `None` sentinel;
/// a found value never gets replaced by a miss. The key/mode pair is
/// atomic: both are set together or neither is.
pub fn extract_song_metadata(text: &str) -> SongMetadata {
    let mut meta = SongMetadata::default();

    meta.bpm = fields::extract_bpm(text);
    meta.genre = fields::extract_genre(text);

    meta.chord_complexity = fields::extract_chord_complexity(text);
    meta.melodic_complexity = fields::extract_melodic_complexity(text);
    meta.trend_probability = fields::extract_trend_probability(text);
    meta.chord_melody_tension = fields::extract_chord_melody_tension(text);
    meta.chord_progression_novelty = fields::extract_chord_progression_novelty(text);
    meta.chord_bass_melody = fields::extract_chord_bass_melody(text);

    meta.section_type = fields::extract_section_type(text);
    meta.start_measure = fields::extract_start_measure(text);
    meta.end_measure = fields::extract_end_measure(text);

    meta.roman_numerals = fields::extract_roman_numerals(text);
    meta.absolute_roots = fields::extract_absolute_roots(text);
    meta.inversions = fields::extract_inversions(text);
    meta.chord_progression = fields::extract_chord_progression(text);

    if let Some((tonic, mode)) = fields::extract_key_mode(text) {
        meta.key_tonic = Some(tonic);
        meta.mode = Some(mode);
    }

    if let Some((title, artist)) = fields::extract_title_artist(text) {
        meta.song_title = Some(title);
        meta.artist = Some(artist);
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooktab_core::{Mode, SectionType};

    const PAGE: &str = "\
        Wonderwall by Oasis Chords. The Verse is written in the key of \
        F\u{266f} Minor and plays at 87 bpm. Genre: Rock. \
        Chord Complexity 72 Melodic Complexity 35 Chord-Melody Tension 18 \
        Chord Progression Novelty 64 Chord Bass Melody 41 \
        trend probability: 0.62 covering measures 5-12. \
        Progression: I, V, vi, IV";

    #[test]
    fn full_page_extraction() {
        let meta = extract_song_metadata(PAGE);

        assert_eq!(meta.song_title.as_deref(), Some("Wonderwall"));
        assert_eq!(meta.artist.as_deref(), Some("Oasis"));
        assert_eq!(meta.key_tonic.as_deref(), Some("F#"));
        assert_eq!(meta.mode, Some(Mode::Minor));
        assert_eq!(meta.bpm, Some(87));
        assert_eq!(meta.genre.as_deref(), Some("Rock"));
        assert_eq!(meta.chord_complexity, Some(72));
        assert_eq!(meta.melodic_complexity, Some(35));
        assert_eq!(meta.chord_melody_tension, Some(18));
        assert_eq!(meta.chord_progression_novelty, Some(64));
        assert_eq!(meta.chord_bass_melody, Some(41));
        assert_eq!(meta.trend_probability, Some(0.62));
        assert_eq!(meta.section_type, SectionType::Verse);
        assert_eq!(meta.start_measure, Some(5));
        assert_eq!(meta.end_measure, Some(12));
        assert_eq!(meta.chord_progression.as_deref(), Some("I V vi IV"));
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(extract_song_metadata(PAGE), extract_song_metadata(PAGE));
    }

    #[test]
    fn key_and_mode_are_atomic() {
        let meta = extract_song_metadata("written in the key of G pentatonic, 120 bpm");
        assert_eq!(meta.key_tonic, None);
        assert_eq!(meta.mode, None);
        assert_eq!(meta.bpm, Some(120));

        let meta = extract_song_metadata(PAGE);
        assert_eq!(meta.key_tonic.is_some(), meta.mode.is_some());
    }

    #[test]
    fn key_phrase_and_score_on_one_line() {
        let meta =
            extract_song_metadata("written in the key of A Minor and Chord Complexity 72");
        assert_eq!(meta.key_tonic.as_deref(), Some("A"));
        assert_eq!(meta.mode, Some(Mode::Minor));
        assert_eq!(meta.chord_complexity, Some(72));
    }

    #[test]
    fn missing_fields_stay_unknown() {
        let meta = extract_song_metadata("an empty-ish page");
        assert_eq!(meta.bpm, None);
        assert_eq!(meta.key_tonic, None);
        assert_eq!(meta.song_title, None);
        assert_eq!(meta.chord_progression, None);
        assert_eq!(meta.section_type, SectionType::Unknown);
    }
}
