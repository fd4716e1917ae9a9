use once_cell::sync::Lazy;
use regex::Regex;

/// Page headings read "<Title> by <Artist> Chords". The lazy `.+?` on
/// the title keeps a " by " inside the artist name from splitting in
/// the wrong place.
static TITLE_ARTIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)\s+by\s+(.+?)\s+Chords").unwrap());

pub fn extract_title_artist(text: &str) -> Option<(String, String)> {
    let caps = TITLE_ARTIST_REGEX.captures(text)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}
