use once_cell::sync::Lazy;
use regex::Regex;

static GENRE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:genre|style)[:\s]+([A-Za-z][A-Za-z\s\-]*)").unwrap());

/// Free-text genre label following a "Genre"/"Style" marker.
pub fn extract_genre(text: &str) -> Option<String> {
    let caps = GENRE_REGEX.captures(text)?;
    let genre = caps.get(1)?.as_str().trim();
    if genre.is_empty() {
        return None;
    }
    Some(genre.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_genre() {
        assert_eq!(extract_genre("Genre: Pop"), Some("Pop".to_string()));
        assert_eq!(extract_genre("style: synth-pop"), Some("synth-pop".to_string()));
    }

    #[test]
    fn multi_word_and_trimmed() {
        assert_eq!(
            extract_genre("Genre:  Progressive Rock  "),
            Some("Progressive Rock".to_string())
        );
    }

    #[test]
    fn absent() {
        assert_eq!(extract_genre("a page with no label"), None);
    }
}
