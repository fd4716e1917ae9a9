use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hooktab_engine::{ComplexityTier, EngineConfig, SearchEngine, SearchParams};
use tracing_subscriber::EnvFilter;

/// Search TheoryTab pages by metadata, theory filters or progression
/// and persist matching songs and their chord events as CSV.
#[derive(Parser, Debug)]
#[command(name = "hooktab-search", version)]
struct Cli {
    /// Filter by artist
    #[arg(long)]
    artist: Option<String>,

    /// Filter by song title
    #[arg(long)]
    song: Option<String>,

    /// Filter by genre
    #[arg(long)]
    genre: Option<String>,

    /// Filter by key tonic (e.g. C)
    #[arg(long)]
    key: Option<String>,

    /// Filter by scale (e.g. Major)
    #[arg(long)]
    scale: Option<String>,

    /// Search by chord progression (e.g. 1,5,6,4); needs API credentials
    #[arg(long)]
    progression: Option<String>,

    /// Chord complexity tier: low, medium, high or medium-high
    #[arg(long)]
    complexity_chord: Option<ComplexityTier>,

    /// Melodic complexity tier
    #[arg(long)]
    complexity_melodic: Option<ComplexityTier>,

    /// Chord-melody tension tier
    #[arg(long)]
    complexity_tension: Option<ComplexityTier>,

    /// Chord progression novelty tier
    #[arg(long)]
    complexity_novelty: Option<ComplexityTier>,

    /// Chord bass melody tier
    #[arg(long)]
    complexity_bass: Option<ComplexityTier>,

    /// Include the trending charts page as a candidate source
    #[arg(long)]
    trend: bool,

    /// TOML config file with credentials and output paths
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_params(self) -> SearchParams {
        SearchParams {
            artist: self.artist,
            song: self.song,
            genre: self.genre,
            key: self.key,
            scale: self.scale,
            progression: self.progression,
            chord_complexity: self.complexity_chord,
            melodic_complexity: self.complexity_melodic,
            chord_melody_tension: self.complexity_tension,
            chord_progression_novelty: self.complexity_novelty,
            chord_bass_melody: self.complexity_bass,
            trend: self.trend,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let params = cli.into_params();
    let mut engine = SearchEngine::new(config);
    let summary = engine.run_search(&params).await?;

    println!(
        "Processed {} of {} candidates, matched {}.",
        summary.processed, summary.candidates, summary.matched
    );
    Ok(())
}
