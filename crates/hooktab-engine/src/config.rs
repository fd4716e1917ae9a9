use std::path::PathBuf;

use config::{Config, File, FileFormat};
use derive_builder::Builder;
use hooktab_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
#[serde(default)]
pub struct EngineConfig {
    pub client: ClientConfig,
    /// Output table with one row per matched song.
    pub songs_csv: PathBuf,
    /// Output table with one row per chord event of a matched song.
    pub events_csv: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            client: ClientConfig::default(),
            songs_csv: PathBuf::from("hooktheory_songs.csv"),
            events_csv: PathBuf::from("hooktheory_chords.csv"),
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()?;
        let ec = cfg.try_deserialize::<EngineConfig>()?;
        Ok(ec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_output_paths() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.songs_csv, PathBuf::from("hooktheory_songs.csv"));
        assert_eq!(cfg.events_csv, PathBuf::from("hooktheory_chords.csv"));
    }

    #[test]
    fn builder_overrides_one_field() {
        let cfg = EngineConfigBuilder::default()
            .songs_csv("out/songs.csv")
            .build()
            .unwrap();
        assert_eq!(cfg.songs_csv, PathBuf::from("out/songs.csv"));
        assert_eq!(cfg.events_csv, PathBuf::from("hooktheory_chords.csv"));
    }

    #[test]
    fn loads_partial_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "songs_csv = \"songs.csv\"\n\n[client]\nusername = \"alice\""
        )
        .unwrap();

        let cfg = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.songs_csv, PathBuf::from("songs.csv"));
        assert_eq!(cfg.client.username, "alice");
        assert_eq!(cfg.events_csv, PathBuf::from("hooktheory_chords.csv"));
    }
}
