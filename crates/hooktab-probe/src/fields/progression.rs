use once_cell::sync::Lazy;
use regex::Regex;

use super::chords::ROMAN_TOKEN;

// Tokens inside a progression may carry an inversion suffix ("I/3").
fn prog_token() -> String {
    format!(
        r"{token}(?:/(?:[0-9]+|[A-G][\u{{266d}}\u{{266f}}#b]?))?",
        token = ROMAN_TOKEN
    )
}

// Separators pages use between chords: commas, dashes, arrows, or plain
// whitespace.
const SEPARATOR: &str = r"(?:\s*(?:,|->|\u{2192}|\u{2014}|\u{2013}|-)\s*|\s+)";

static LABELED_REGEX: Lazy<Regex> = Lazy::new(|| {
    let t = prog_token();
    Regex::new(&format!(
        r"(?i:progression|chords)[:\s]+({t}(?:{s}{t})*)",
        t = t,
        s = SEPARATOR
    ))
    .unwrap()
});

// Fallback tier: any unlabeled run of three or more consecutive tokens.
static RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let t = prog_token();
    Regex::new(&format!(r"({t}(?:{s}{t}){{2,}})", t = t, s = SEPARATOR)).unwrap()
});

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(SEPARATOR).unwrap());

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn standalone(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

fn normalize_separators(run: &str) -> String {
    SEPARATOR_REGEX
        .split(run)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-tier progression lookup: a labeled "Progression:"/"Chords:" run
/// wins; otherwise the first unlabeled run of three or more consecutive
/// chord tokens anywhere in the text. Separators are normalized to
/// single spaces either way.
pub fn extract_chord_progression(text: &str) -> Option<String> {
    if let Some(caps) = LABELED_REGEX.captures(text) {
        let m = caps.get(1)?;
        if standalone(text, m.start(), m.end()) {
            return Some(normalize_separators(m.as_str()));
        }
    }

    RUN_REGEX
        .find_iter(text)
        .find(|m| standalone(text, m.start(), m.end()))
        .map(|m| normalize_separators(m.as_str()))
}
