use std::collections::HashMap;

use anyhow::Result;
use hooktab_client::{HookTheoryClient, pseudo_song_id};
use hooktab_core::SongId;
use hooktab_probe::{extract_song_metadata, flatten_progression};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::filter::SearchParams;
use crate::storage::CsvStorage;
use crate::urls;

/// Cap on how many chart entries discovery-style searches walk through.
const CHARTS_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub candidates: usize,
    pub processed: usize,
    pub matched: usize,
}

pub struct SearchEngine {
    client: HookTheoryClient,
    storage: CsvStorage,
    www_base: String,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        let www_base = config.client.www_base_url.clone();
        let storage = CsvStorage::new(config.songs_csv.clone(), config.events_csv.clone());
        let client = HookTheoryClient::new(config.client);
        SearchEngine {
            client,
            storage,
            www_base,
        }
    }

    /// Runs the full pipeline: gather candidate song pages, extract
    /// each one, filter, persist matches. A failure on one song is
    /// logged and skipped, it never aborts the rest of the run.
    pub async fn run_search(&mut self, params: &SearchParams) -> Result<SearchSummary> {
        info!(?params, "starting search");

        // Known API ids by page url, so matched pages reuse the real
        // catalog id instead of a pseudo one.
        let mut known_ids: HashMap<String, SongId> = HashMap::new();
        let mut candidates: Vec<String> = Vec::new();

        if let Some(progression) = &params.progression {
            self.gather_progression_candidates(progression, &mut candidates, &mut known_ids)
                .await;
        }

        if params.artist.is_some() || params.song.is_some() || params.genre.is_some() {
            self.gather_metadata_candidates(params, &mut candidates).await;
        }

        if params.trend || (candidates.is_empty() && params.is_discovery_only()) {
            self.gather_chart_candidates(&mut candidates).await;
        }

        candidates.sort();
        candidates.dedup();
        info!(count = candidates.len(), "candidate songs to process");

        let mut summary = SearchSummary {
            candidates: candidates.len(),
            ..SearchSummary::default()
        };

        for url in &candidates {
            match self.process_song(url, params, known_ids.get(url).copied()).await {
                Ok(matched) => {
                    summary.processed += 1;
                    if matched {
                        summary.matched += 1;
                    }
                }
                Err(e) => warn!(url, error = %e, "failed to process song"),
            }
        }

        info!(
            processed = summary.processed,
            matched = summary.matched,
            "search complete"
        );
        Ok(summary)
    }

    /// Progression search goes through the authenticated API; every
    /// returned row with a url becomes a candidate.
    async fn gather_progression_candidates(
        &mut self,
        progression: &str,
        candidates: &mut Vec<String>,
        known_ids: &mut HashMap<String, SongId>,
    ) {
        if !self.client.is_authenticated() {
            if let Err(e) = self.client.authenticate().await {
                warn!(error = %e, "authentication failed, progression search skipped");
                return;
            }
        }

        match self.client.fetch_songs_by_progression(progression).await {
            Ok(songs) => {
                info!(progression, count = songs.len(), "progression results");
                for song in songs {
                    let Some(url) = song.url else { continue };
                    let url = if url.starts_with("http") {
                        url
                    } else {
                        format!("{}{}", self.www_base, url)
                    };
                    let id = song
                        .id
                        .unwrap_or_else(|| pseudo_song_id(&song.artist, &song.song));
                    known_ids.insert(url.clone(), id);
                    candidates.push(url);
                }
            }
            Err(e) => warn!(progression, error = %e, "progression search failed"),
        }
    }

    /// Artist/song/genre searches walk the public browse pages. The
    /// direct view-url guess is tried first and the browse pages only
    /// when it does not resolve.
    async fn gather_metadata_candidates(&self, params: &SearchParams, candidates: &mut Vec<String>) {
        let mut found = Vec::new();

        if let (Some(artist), Some(song)) = (&params.artist, &params.song) {
            let url = urls::direct_song_url(&self.www_base, artist, song);
            match self.client.fetch_page_text(&url).await {
                Ok(_) => {
                    info!(url, "direct song url resolved");
                    candidates.push(url);
                    return;
                }
                Err(e) => warn!(url, error = %e, "direct song url failed, trying browse pages"),
            }
        }

        if let Some(artist) = &params.artist {
            let url = urls::artist_browse_url(&self.www_base, artist);
            self.harvest_list_page(&url, &mut found).await;
        }

        if found.is_empty() {
            if let Some(genre) = &params.genre {
                let url = urls::genre_browse_url(&self.www_base, genre);
                self.harvest_list_page(&url, &mut found).await;
            }
        }

        candidates.extend(found);
    }

    async fn gather_chart_candidates(&self, candidates: &mut Vec<String>) {
        let url = urls::charts_url(&self.www_base);
        let mut found = Vec::new();
        self.harvest_list_page(&url, &mut found).await;
        found.truncate(CHARTS_LIMIT);
        candidates.extend(found);
    }

    async fn harvest_list_page(&self, url: &str, candidates: &mut Vec<String>) {
        match self.client.fetch_page_text(url).await {
            Ok(page) => {
                let links = urls::extract_song_links(&self.www_base, &page);
                info!(url, count = links.len(), "harvested song links");
                candidates.extend(links);
            }
            Err(e) => warn!(url, error = %e, "failed to fetch list page"),
        }
    }

    /// Fetches one song page, extracts its record, applies the filters
    /// and persists both tables on a match. Returns whether it matched.
    async fn process_song(
        &self,
        url: &str,
        params: &SearchParams,
        known_id: Option<SongId>,
    ) -> Result<bool> {
        let text = self.client.fetch_page_text(url).await?;
        let meta = extract_song_metadata(&text);

        if !params.matches_metadata(&meta) {
            info!(url, "filtered out");
            return Ok(false);
        }

        let song_id = known_id.unwrap_or_else(|| {
            pseudo_song_id(
                meta.artist.as_deref().unwrap_or(url),
                meta.song_title.as_deref().unwrap_or_default(),
            )
        });

        self.storage.append_song(song_id, &meta)?;
        if let Some(progression) = &meta.chord_progression {
            let events = flatten_progression(song_id, &meta, progression);
            self.storage.append_events(&events)?;
        }

        info!(url, song_id, "match saved");
        Ok(true)
    }
}
