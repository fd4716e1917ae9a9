use hooktab_core::Inversion;
use hooktab_core::note::normalize_accidentals;
use once_cell::sync::Lazy;
use regex::Regex;

/// One chord-like token: optional accidental, roman core (case carries
/// quality), optional quality/extension suffix, optional trailing
/// digits. Longer cores come first so "IV" is not read as "I" + noise.
pub(crate) const ROMAN_TOKEN: &str = r"[\u{266d}\u{266f}#b]?(?:VII|VI|IV|V|III|II|I|vii|vi|iv|v|iii|ii|i)(?:maj|min|dim|aug|add|sus)?[0-9]*";

static ROMAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{token}(?:/(?:[0-9]+|[A-G][\u{{266d}}\u{{266f}}#b]?))?",
        token = ROMAN_TOKEN
    ))
    .unwrap()
});

static NOTE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-G](?:[#\u{266f}\u{266d}]|b\b|\b)").unwrap());

static INVERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"({token})/([0-9]+|[A-G][\u{{266d}}\u{{266f}}#b]?)",
        token = ROMAN_TOKEN
    ))
    .unwrap()
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// The token pattern has no anchors of its own (a leading `\b` cannot
// sit in front of an optional `#`), so standalone-ness is checked here:
// the match must not continue a word on either side.
fn standalone(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

fn dedup_first_seen(tokens: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for t in tokens {
        if seen.insert(t.clone()) {
            out.push(t);
        }
    }
    out
}

/// Distinct chord-like tokens (roman numerals with optional quality and
/// inversion suffixes), in order of first appearance.
pub fn extract_roman_numerals(text: &str) -> Vec<String> {
    dedup_first_seen(
        ROMAN_REGEX
            .find_iter(text)
            .filter(|m| standalone(text, m.start(), m.end()))
            .map(|m| m.as_str().to_string()),
    )
}

/// Distinct note-letter tokens (A-G plus optional accidental), unicode
/// accidentals normalized to ASCII, in order of first appearance.
pub fn extract_absolute_roots(text: &str) -> Vec<String> {
    dedup_first_seen(
        NOTE_REGEX
            .find_iter(text)
            .map(|m| normalize_accidentals(m.as_str())),
    )
}

/// Chord/bass pairs joined by a slash ("I/3", "V/5", "IV/B").
pub fn extract_inversions(text: &str) -> Vec<Inversion> {
    INVERSION_REGEX
        .captures_iter(text)
        .filter(|caps| {
            let m = caps.get(0).unwrap();
            standalone(text, m.start(), m.end())
        })
        .map(|caps| Inversion {
            chord: caps[1].to_string(),
            bass: caps[2].to_string(),
        })
        .collect()
}
