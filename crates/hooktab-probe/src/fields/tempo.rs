use once_cell::sync::Lazy;
use regex::Regex;

// Either a digit cluster directly followed by the "bpm" unit, or a
// "tempo" label followed by digits. Bare numbers never match.
static BPM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:(\d+)\s*bpm|tempo[:\s]+(\d+))").unwrap());

/// First tempo found in the text, in beats per minute.
pub fn extract_bpm(text: &str) -> Option<u32> {
    let caps = BPM_REGEX.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(2))?
        .as_str()
        .parse()
        .ok()
}
