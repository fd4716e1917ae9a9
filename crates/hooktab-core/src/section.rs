use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SectionTypeError {
    #[error("unknown section type: {0:?}")]
    Unknown(String),
}

/// Structural segments of a song as labelled on TheoryTab pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SectionType {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Bridge,
    Hook,
    Interlude,
    Outro,
    #[default]
    Unknown,
}

impl SectionType {
    /// The canonical label as it appears on pages ("Pre-Chorus", not
    /// "PreChorus").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Verse => "Verse",
            Self::PreChorus => "Pre-Chorus",
            Self::Chorus => "Chorus",
            Self::Bridge => "Bridge",
            Self::Hook => "Hook",
            Self::Interlude => "Interlude",
            Self::Outro => "Outro",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for SectionType {
    type Err = SectionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        let ty = match normalized.as_str() {
            "intro" => Self::Intro,
            "verse" => Self::Verse,
            "prechorus" => Self::PreChorus,
            "chorus" => Self::Chorus,
            "bridge" => Self::Bridge,
            "hook" => Self::Hook,
            "interlude" => Self::Interlude,
            "outro" => Self::Outro,
            "unknown" => Self::Unknown,
            _ => return Err(SectionTypeError::Unknown(s.to_string())),
        };

        Ok(ty)
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_variants() {
        assert_eq!("Pre-Chorus".parse::<SectionType>().unwrap(), SectionType::PreChorus);
        assert_eq!("pre chorus".parse::<SectionType>().unwrap(), SectionType::PreChorus);
        assert_eq!("CHORUS".parse::<SectionType>().unwrap(), SectionType::Chorus);
    }

    #[test]
    fn display_uses_page_label() {
        assert_eq!(SectionType::PreChorus.to_string(), "Pre-Chorus");
        assert_eq!(SectionType::Verse.to_string(), "Verse");
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(SectionType::default(), SectionType::Unknown);
    }
}
