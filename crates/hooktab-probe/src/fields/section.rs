use hooktab_core::SectionType;

// Priority matters: "pre-chorus" text also contains "chorus", so the
// more specific keyword has to be tried first.
const SECTION_KEYWORDS: &[(&str, SectionType)] = &[
    ("pre-chorus", SectionType::PreChorus),
    ("chorus", SectionType::Chorus),
    ("verse", SectionType::Verse),
    ("intro", SectionType::Intro),
    ("outro", SectionType::Outro),
    ("bridge", SectionType::Bridge),
    ("hook", SectionType::Hook),
    ("interlude", SectionType::Interlude),
];

/// Case-insensitive keyword scan over the fixed section vocabulary.
/// Returns [`SectionType::Unknown`] when no keyword appears.
pub fn extract_section_type(text: &str) -> SectionType {
    let lower = text.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, ty)| *ty)
        .unwrap_or(SectionType::Unknown)
}
