use hooktab_core::note::{normalize_accidentals, pitch_class};

/// Diatonic default spelling for bare digit tokens: a "5" in a
/// progression means the major-context dominant, so the casing encodes
/// the usual quality of each degree.
pub fn digit_to_roman(token: &str) -> Option<&'static str> {
    match token.trim() {
        "1" => Some("I"),
        "2" => Some("ii"),
        "3" => Some("iii"),
        "4" => Some("IV"),
        "5" => Some("V"),
        "6" => Some("vi"),
        "7" => Some("vii"),
        _ => None,
    }
}

// Major-scale semitone offsets by degree.
fn degree_offset(core: &str) -> Option<i32> {
    match core.to_ascii_uppercase().as_str() {
        "I" => Some(0),
        "II" => Some(2),
        "III" => Some(4),
        "IV" => Some(5),
        "V" => Some(7),
        "VI" => Some(9),
        "VII" => Some(11),
        _ => None,
    }
}

/// Resolves a scale-degree token (digit 1-7 or roman numeral, with an
/// optional leading accidental and trailing quality noise) to an
/// absolute pitch class 0-11 in the given key.
///
/// Returns `None` when the token or the tonic cannot be resolved.
/// The `None` is a true "unresolved" sentinel; it must never be read as
/// pitch class 0.
pub fn resolve_root(token: &str, key_tonic: &str) -> Option<u8> {
    let tonic = pitch_class(key_tonic)?;

    let normalized = normalize_accidentals(token.trim());
    let token: &str = match digit_to_roman(&normalized) {
        Some(roman) => roman,
        None => normalized.as_str(),
    };

    let (shift, rest): (i32, &str) = match token.chars().next()? {
        '#' => (1, &token[1..]),
        // 'b' is only an accidental here, note letters are a different
        // extractor's business.
        'b' => (-1, &token[1..]),
        _ => (0, token),
    };

    let core: String = rest.chars().take_while(|c| matches!(c, 'I' | 'i' | 'V' | 'v')).collect();
    if core.is_empty() {
        return None;
    }

    let offset = degree_offset(&core)?;
    Some((tonic as i32 + offset + shift).rem_euclid(12) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_table() {
        assert_eq!(digit_to_roman("1"), Some("I"));
        assert_eq!(digit_to_roman("2"), Some("ii"));
        assert_eq!(digit_to_roman("7"), Some("vii"));
        assert_eq!(digit_to_roman("8"), None);
        assert_eq!(digit_to_roman("V"), None);
    }

    #[test]
    fn diatonic_degrees_in_c() {
        assert_eq!(resolve_root("I", "C"), Some(0));
        assert_eq!(resolve_root("ii", "C"), Some(2));
        assert_eq!(resolve_root("IV", "C"), Some(5));
        assert_eq!(resolve_root("V", "C"), Some(7));
        assert_eq!(resolve_root("vi", "C"), Some(9));
        assert_eq!(resolve_root("vii", "C"), Some(11));
    }

    #[test]
    fn digits_resolve_through_the_table() {
        assert_eq!(resolve_root("1", "C"), Some(0));
        assert_eq!(resolve_root("5", "C"), Some(7));
        assert_eq!(resolve_root("6", "C"), Some(9));
    }

    #[test]
    fn transposed_keys() {
        // In A, the dominant is E (pitch class 4).
        assert_eq!(resolve_root("V", "A"), Some(4));
        // In F#, the tonic is 6.
        assert_eq!(resolve_root("I", "F#"), Some(6));
        assert_eq!(resolve_root("I", "F\u{266f}"), Some(6));
    }

    #[test]
    fn accidentals_shift_the_degree() {
        // bVII in C is Bb (10).
        assert_eq!(resolve_root("bVII", "C"), Some(10));
        // #IV in C is F# (6).
        assert_eq!(resolve_root("#IV", "C"), Some(6));
    }

    #[test]
    fn quality_suffixes_are_ignored_for_the_root() {
        assert_eq!(resolve_root("V7", "C"), Some(7));
        assert_eq!(resolve_root("viidim7", "C"), Some(11));
        assert_eq!(resolve_root("IVmaj7", "C"), Some(5));
    }

    #[test]
    fn malformed_tokens_are_unresolved() {
        assert_eq!(resolve_root("X", "C"), None);
        assert_eq!(resolve_root("", "C"), None);
        assert_eq!(resolve_root("9", "C"), None);
        assert_eq!(resolve_root("IIII", "C"), None);
    }

    #[test]
    fn unresolvable_key_is_unresolved() {
        assert_eq!(resolve_root("I", "H"), None);
        assert_eq!(resolve_root("I", ""), None);
    }
}
