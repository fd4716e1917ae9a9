use once_cell::sync::Lazy;
use regex::Regex;

// Pages phrase measure bounds half a dozen ways. Each list is tried in
// order and the first pattern that matches wins; later patterns are not
// consulted, there is no merging.
static START_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)Start Measure[:\s]+(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)measures\s+(\d+)\s*-\s*(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)m\.\s*(\d+)\s*-\s*(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)from measure\s+(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)begins at measure\s+(\d+)").unwrap(), 1),
    ]
});

static END_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)End Measure[:\s]+(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)measures\s+(\d+)\s*-\s*(\d+)").unwrap(), 2),
        (Regex::new(r"(?i)m\.\s*(\d+)\s*-\s*(\d+)").unwrap(), 2),
        (Regex::new(r"(?i)to measure\s+(\d+)").unwrap(), 1),
        (Regex::new(r"(?i)ends at measure\s+(\d+)").unwrap(), 1),
    ]
});

fn first_match(patterns: &[(Regex, usize)], text: &str) -> Option<u32> {
    patterns.iter().find_map(|(re, group)| {
        re.captures(text)
            .and_then(|caps| caps.get(*group))
            .and_then(|m| m.as_str().parse().ok())
    })
}

pub fn extract_start_measure(text: &str) -> Option<u32> {
    first_match(&START_PATTERNS, text)
}

pub fn extract_end_measure(text: &str) -> Option<u32> {
    first_match(&END_PATTERNS, text)
}
