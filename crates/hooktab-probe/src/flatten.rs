use hooktab_core::{ChordEvent, SongId, SongMetadata, event::section_id};

use crate::theory::{digit_to_roman, resolve_root, tension_strain};

/// Explodes one progression string into per-chord events.
///
/// Tokens split on commas and runs of whitespace, in progression order,
/// one event per chord. Empty tokens are skipped, so "I,,V" and
/// "I, V" flatten the same way. Without a key on the metadata every
/// event carries `absolute_root: None`; a missing key never turns into
/// pitch class 0.
pub fn flatten_progression(
    song_id: SongId,
    meta: &SongMetadata,
    progression: &str,
) -> Vec<ChordEvent> {
    let section = meta.section_type;
    let sid = section_id(song_id, section);

    progression
        .split([',', ' ', '\t', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            // Slash chords keep the written token intact and carry the
            // bass separately.
            let (chord, bass) = match token.split_once('/') {
                Some((chord, bass)) => (chord, Some(bass.to_string())),
                None => (token, None),
            };

            // Bare digits score like their diatonic roman spelling.
            let symbol = digit_to_roman(chord).unwrap_or(chord);

            let absolute_root = meta
                .key_tonic
                .as_deref()
                .and_then(|tonic| resolve_root(chord, tonic));

            ChordEvent {
                section_id: sid.clone(),
                song_id,
                section_type: section,
                roman_numeral: token.to_string(),
                absolute_root,
                inversion: bass,
                tension_strain: tension_strain(symbol),
            }
        })
        .collect()
}
