//! Note-name helpers shared by the extractors and the degree resolver.

/// Rewrites the unicode accidental glyphs to their ASCII spellings
/// (`♯` to `#`, `♭` to `b`). Other characters pass through untouched.
pub fn normalize_accidentals(s: &str) -> String {
    s.replace('\u{266f}', "#").replace('\u{266d}', "b")
}

/// Maps a note name (letter A-G plus optional accidental, ASCII or
/// unicode) to its pitch class, 0-11 with C = 0. Returns `None` for
/// anything that is not a note name.
pub fn pitch_class(note: &str) -> Option<u8> {
    let normalized = normalize_accidentals(note.trim());
    let mut chars = normalized.chars();

    let letter = chars.next()?;
    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let shift: i32 = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return None,
    };

    if chars.next().is_some() {
        return None;
    }

    Some((base + shift).rem_euclid(12) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naturals() {
        assert_eq!(pitch_class("C"), Some(0));
        assert_eq!(pitch_class("A"), Some(9));
        assert_eq!(pitch_class("g"), Some(7));
    }

    #[test]
    fn accidentals_ascii_and_unicode() {
        assert_eq!(pitch_class("C#"), Some(1));
        assert_eq!(pitch_class("Bb"), Some(10));
        assert_eq!(pitch_class("F♯"), Some(6));
        assert_eq!(pitch_class("E♭"), Some(3));
    }

    #[test]
    fn wraps_around_the_octave() {
        assert_eq!(pitch_class("Cb"), Some(11));
        assert_eq!(pitch_class("B#"), Some(0));
    }

    #[test]
    fn rejects_non_notes() {
        assert_eq!(pitch_class("H"), None);
        assert_eq!(pitch_class("Cx"), None);
        assert_eq!(pitch_class(""), None);
        assert_eq!(pitch_class("C##"), None);
    }

    #[test]
    fn normalizes_glyphs() {
        assert_eq!(normalize_accidentals("G♯ and D♭"), "G# and Db");
    }
}
