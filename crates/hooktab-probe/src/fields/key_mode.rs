use hooktab_core::Mode;
use hooktab_core::note::normalize_accidentals;
use once_cell::sync::Lazy;
use regex::Regex;

static KEY_MODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)written in the key of\s+([A-G][\u{266d}\u{266f}#b]?)\s+(Major|Minor|Ionian|Aeolian|Dorian|Phrygian|Lydian|Mixolydian|Locrian)",
    )
    .unwrap()
});

/// Finds the "written in the key of <tonic> <mode>" phrase.
///
/// The pair is atomic: a tonic without a recognizable mode (or the
/// other way round) is not a match, partial key information is
/// discarded rather than guessed. The returned tonic uses ASCII
/// accidentals and an uppercase letter.
pub fn extract_key_mode(text: &str) -> Option<(String, Mode)> {
    let caps = KEY_MODE_REGEX.captures(text)?;

    let mut tonic = normalize_accidentals(caps.get(1)?.as_str());
    // The match is case-insensitive, so "key of a minor" yields "a".
    tonic = {
        let mut chars = tonic.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let accidental: String = chars.as_str().to_ascii_lowercase();
        format!("{}{}", letter, accidental)
    };

    let mode = caps.get(2)?.as_str().parse::<Mode>().ok()?;
    Some((tonic, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_phrase() {
        let (tonic, mode) = extract_key_mode("This song is written in the key of A Minor.").unwrap();
        assert_eq!(tonic, "A");
        assert_eq!(mode, Mode::Minor);
    }

    #[test]
    fn unicode_accidentals_become_ascii() {
        let (tonic, mode) = extract_key_mode("written in the key of F\u{266f} Major").unwrap();
        assert_eq!(tonic, "F#");
        assert_eq!(mode, Mode::Major);

        let (tonic, _) = extract_key_mode("written in the key of B\u{266d} Mixolydian").unwrap();
        assert_eq!(tonic, "Bb");
    }

    #[test]
    fn case_insensitive_match_normalized_output() {
        let (tonic, mode) = extract_key_mode("WRITTEN IN THE KEY OF eb dorian").unwrap();
        assert_eq!(tonic, "Eb");
        assert_eq!(mode, Mode::Dorian);
    }

    #[test]
    fn tonic_without_mode_is_not_a_match() {
        assert_eq!(extract_key_mode("written in the key of C, probably"), None);
        assert_eq!(extract_key_mode("written in the key of G pentatonic"), None);
    }

    #[test]
    fn absent_phrase() {
        assert_eq!(extract_key_mode("key of E Minor mentioned differently"), None);
    }
}
