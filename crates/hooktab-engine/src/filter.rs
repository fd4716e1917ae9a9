use std::str::FromStr;

use hooktab_core::SongMetadata;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("unknown complexity tier '{0}', expected low, medium, high or medium-high")]
pub struct TierError(String);

/// Fuzzy score bands for the five 0-100 complexity metrics. The bands
/// deliberately overlap so a score near a boundary matches both
/// neighboring tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
    MediumHigh,
}

impl ComplexityTier {
    pub fn matches(self, score: u32) -> bool {
        match self {
            ComplexityTier::Low => score <= 40,
            ComplexityTier::Medium => (25..=75).contains(&score),
            ComplexityTier::High => score >= 60,
            ComplexityTier::MediumHigh => score >= 25,
        }
    }
}

impl FromStr for ComplexityTier {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ComplexityTier::Low),
            "medium" => Ok(ComplexityTier::Medium),
            "high" => Ok(ComplexityTier::High),
            "medium-high" | "medium high" => Ok(ComplexityTier::MediumHigh),
            other => Err(TierError(other.to_string())),
        }
    }
}

/// The full search form. `None` means "don't filter on this".
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub artist: Option<String>,
    pub song: Option<String>,
    pub genre: Option<String>,
    pub key: Option<String>,
    pub scale: Option<String>,
    pub progression: Option<String>,
    pub chord_complexity: Option<ComplexityTier>,
    pub melodic_complexity: Option<ComplexityTier>,
    pub chord_melody_tension: Option<ComplexityTier>,
    pub chord_progression_novelty: Option<ComplexityTier>,
    pub chord_bass_melody: Option<ComplexityTier>,
    pub trend: bool,
}

impl SearchParams {
    /// True when at least one candidate-gathering term is present.
    pub fn has_search_terms(&self) -> bool {
        self.artist.is_some()
            || self.song.is_some()
            || self.genre.is_some()
            || self.progression.is_some()
    }

    /// True when only filters were given, so candidates have to come
    /// from the charts page.
    pub fn is_discovery_only(&self) -> bool {
        !self.has_search_terms()
            && !self.trend
            && (self.key.is_some()
                || self.scale.is_some()
                || self.chord_complexity.is_some()
                || self.melodic_complexity.is_some()
                || self.chord_melody_tension.is_some()
                || self.chord_progression_novelty.is_some()
                || self.chord_bass_melody.is_some())
    }

    /// Applies the key, scale and complexity filters to one extracted
    /// record. Key and scale are case-insensitive substring matches, so
    /// `--key C` also accepts "C#". A missing complexity score is
    /// treated as 0 for filtering only; the record itself keeps `None`.
    pub fn matches_metadata(&self, meta: &SongMetadata) -> bool {
        if let Some(key) = &self.key {
            let current = meta.key_tonic.clone().unwrap_or_default().to_lowercase();
            if !current.contains(&key.trim().to_lowercase()) {
                return false;
            }
        }

        if let Some(scale) = &self.scale {
            let current = meta
                .mode
                .map(|m| m.to_string().to_lowercase())
                .unwrap_or_default();
            if !current.contains(&scale.trim().to_lowercase()) {
                return false;
            }
        }

        let checks = [
            (self.chord_complexity, meta.chord_complexity),
            (self.melodic_complexity, meta.melodic_complexity),
            (self.chord_melody_tension, meta.chord_melody_tension),
            (self.chord_progression_novelty, meta.chord_progression_novelty),
            (self.chord_bass_melody, meta.chord_bass_melody),
        ];
        for (tier, score) in checks {
            if let Some(tier) = tier {
                if !tier.matches(score.unwrap_or(0)) {
                    return false;
                }
            }
        }

        true
    }
}
