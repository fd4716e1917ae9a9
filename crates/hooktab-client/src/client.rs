use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// One row of the `/trends/songs` response. The API omits `id` for
/// some catalog entries, callers fall back to
/// [`pseudo_song_id`](crate::pseudo_song_id) in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendSong {
    pub id: Option<u64>,
    pub artist: String,
    pub song: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    activkey: Option<String>,
}

/// Authenticated HookTheory API client plus plain fetcher for the
/// public www pages.
#[derive(Debug, Clone)]
pub struct HookTheoryClient {
    config: ClientConfig,
    token: Option<String>,
    client: reqwest::Client,
}

impl HookTheoryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exchanges the configured credentials for a bearer token.
    pub async fn authenticate(&mut self) -> Result<(), ClientError> {
        let url = format!("{}/users/auth", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "username": self.config.username,
                "password": self.config.password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Auth(format!("{status}: {body}")));
        }

        let auth = response.json::<AuthResponse>().await?;
        match auth.activkey {
            Some(token) => {
                info!("authenticated with hooktheory api");
                self.token = Some(token);
                Ok(())
            }
            None => Err(ClientError::Auth("response carried no activkey".into())),
        }
    }

    fn token(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::Unauthenticated)
    }

    /// Lists songs whose catalog entry contains the given progression,
    /// e.g. `"1,5,6,4"`.
    pub async fn fetch_songs_by_progression(
        &self,
        progression: &str,
    ) -> Result<Vec<TrendSong>, ClientError> {
        let url = format!("{}/trends/songs", self.config.api_base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token()?)
            .query(&[("cp", progression)])
            .send()
            .await?
            .error_for_status()?;

        let songs = response.json::<Vec<TrendSong>>().await?;
        debug!(progression, count = songs.len(), "fetched trend songs");
        Ok(songs)
    }

    /// Fetches the raw body of a public song page. Relative paths are
    /// resolved against the configured www host. No token needed.
    pub async fn fetch_page_text(&self, url: &str) -> Result<String, ClientError> {
        let url = if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.config.www_base_url, url)
        };

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
