use once_cell::sync::Lazy;
use regex::Regex;

// The five theory scores are matched case-sensitively on the exact
// label casing the pages use; anything looser starts picking up
// unrelated numbers from the surrounding text.
static CHORD_COMPLEXITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chord Complexity\s*(\d+)").unwrap());
static MELODIC_COMPLEXITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Melodic Complexity\s*(\d+)").unwrap());
static CHORD_MELODY_TENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chord-Melody Tension\s*(\d+)").unwrap());
static CHORD_PROGRESSION_NOVELTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chord Progression Novelty\s*(\d+)").unwrap());
static CHORD_BASS_MELODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chord Bass Melody\s*(\d+)").unwrap());

static TREND_PROBABILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)trend[_\s]?probability[:\s]+(\d+(?:\.\d+)?)").unwrap());

fn first_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

pub fn extract_chord_complexity(text: &str) -> Option<u32> {
    first_u32(&CHORD_COMPLEXITY, text)
}

pub fn extract_melodic_complexity(text: &str) -> Option<u32> {
    first_u32(&MELODIC_COMPLEXITY, text)
}

pub fn extract_chord_melody_tension(text: &str) -> Option<u32> {
    first_u32(&CHORD_MELODY_TENSION, text)
}

pub fn extract_chord_progression_novelty(text: &str) -> Option<u32> {
    first_u32(&CHORD_PROGRESSION_NOVELTY, text)
}

pub fn extract_chord_bass_melody(text: &str) -> Option<u32> {
    first_u32(&CHORD_BASS_MELODY, text)
}

/// Trend probability, a decimal in whatever range the page reports.
/// The label is matched loosely ("trend probability" or
/// "trend_probability", any casing).
pub fn extract_trend_probability(text: &str) -> Option<f64> {
    TREND_PROBABILITY.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_labels() {
        assert_eq!(extract_chord_complexity("Chord Complexity 72"), Some(72));
        assert_eq!(extract_melodic_complexity("Melodic Complexity  35"), Some(35));
        assert_eq!(extract_chord_melody_tension("Chord-Melody Tension 18"), Some(18));
        assert_eq!(
            extract_chord_progression_novelty("Chord Progression Novelty 90"),
            Some(90)
        );
        assert_eq!(extract_chord_bass_melody("Chord Bass Melody 41"), Some(41));
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(extract_chord_complexity("chord complexity 72"), None);
        assert_eq!(extract_melodic_complexity("MELODIC COMPLEXITY 10"), None);
    }

    #[test]
    fn trend_probability_variants() {
        assert_eq!(extract_trend_probability("trend probability: 0.82"), Some(0.82));
        assert_eq!(extract_trend_probability("Trend_Probability 7"), Some(7.0));
    }

    #[test]
    fn absence_stays_none() {
        assert_eq!(extract_chord_complexity("Chord Complexity unknown"), None);
        assert_eq!(extract_trend_probability(""), None);
    }
}
