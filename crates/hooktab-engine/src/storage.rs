use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use hooktab_core::{ChordEvent, SongId, SongMetadata};
use tracing::info;

const SONGS_HEADER: &str = "song_id,song_title,artist,bpm,key_tonic,mode,genre,\
chord_complexity,melodic_complexity,chord_melody_tension,chord_progression_novelty,\
chord_bass_melody,trend_probability,type,start_measure,end_measure,chord_progression";

const EVENTS_HEADER: &str =
    "section_id,song_id,type,roman_numeral,absolute_root,inversion,tension_strain";

/// Append-only CSV writer for the songs and chord-events tables. The
/// header row is written once, the first time each file gains content;
/// later runs keep appending rows.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    songs_csv: PathBuf,
    events_csv: PathBuf,
}

impl CsvStorage {
    pub fn new(songs_csv: impl Into<PathBuf>, events_csv: impl Into<PathBuf>) -> Self {
        Self {
            songs_csv: songs_csv.into(),
            events_csv: events_csv.into(),
        }
    }

    pub fn append_song(&self, song_id: SongId, meta: &SongMetadata) -> Result<()> {
        let row = vec![
            song_id.to_string(),
            opt_str(meta.song_title.as_deref()),
            opt_str(meta.artist.as_deref()),
            opt_num(meta.bpm),
            opt_str(meta.key_tonic.as_deref()),
            meta.mode.map(|m| m.to_string()).unwrap_or_default(),
            opt_str(meta.genre.as_deref()),
            opt_num(meta.chord_complexity),
            opt_num(meta.melodic_complexity),
            opt_num(meta.chord_melody_tension),
            opt_num(meta.chord_progression_novelty),
            opt_num(meta.chord_bass_melody),
            opt_num(meta.trend_probability),
            meta.section_type.to_string(),
            opt_num(meta.start_measure),
            opt_num(meta.end_measure),
            opt_str(meta.chord_progression.as_deref()),
        ];
        append_row(&self.songs_csv, SONGS_HEADER, &row)?;
        info!(song_id, path = %self.songs_csv.display(), "appended song row");
        Ok(())
    }

    pub fn append_events(&self, events: &[ChordEvent]) -> Result<()> {
        for event in events {
            let row = vec![
                event.section_id.clone(),
                event.song_id.to_string(),
                event.section_type.to_string(),
                event.roman_numeral.clone(),
                opt_num(event.absolute_root),
                opt_str(event.inversion.as_deref()),
                event.tension_strain.to_string(),
            ];
            append_row(&self.events_csv, EVENTS_HEADER, &row)?;
        }
        if !events.is_empty() {
            info!(
                count = events.len(),
                path = %self.events_csv.display(),
                "appended chord event rows"
            );
        }
        Ok(())
    }
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn opt_num<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// RFC 4180 quoting, only when the field needs it.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn append_row(path: &Path, header: &str, fields: &[String]) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{header}")?;
    }
    let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(file, "{}", row.join(","))?;
    Ok(())
}
