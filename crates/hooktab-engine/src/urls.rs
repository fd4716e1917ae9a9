use once_cell::sync::Lazy;
use regex::Regex;

static HREF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="([^"]+)""#).unwrap());

/// Lowercase, spaces to dashes, apostrophes dropped. Matches how the
/// site builds its own view paths.
pub fn slugify(text: &str) -> String {
    text.to_lowercase().replace(' ', "-").replace('\'', "")
}

/// Best-guess view page for a known artist and song.
pub fn direct_song_url(www_base: &str, artist: &str, song: &str) -> String {
    format!(
        "{}/theorytab/view/{}/{}",
        www_base,
        slugify(artist),
        slugify(song)
    )
}

/// Artist browse page, bucketed by the slug's first character. Numeric
/// artists all land in the "1" bucket.
pub fn artist_browse_url(www_base: &str, artist: &str) -> String {
    let slug = slugify(artist);
    let bucket = match slug.chars().next() {
        Some(c) if c.is_ascii_digit() => '1',
        Some(c) => c,
        None => 'a',
    };
    format!("{www_base}/theorytab/artists/{bucket}/{slug}")
}

pub fn genre_browse_url(www_base: &str, genre: &str) -> String {
    format!("{}/theorytab/genres/{}", www_base, slugify(genre))
}

pub fn charts_url(www_base: &str) -> String {
    format!("{www_base}/theorytab/charts")
}

/// Harvests song view links from a browse or charts page. Only
/// `/theorytab/view/` hrefs count; the common-chord-progressions
/// listings link there too but are not songs. Output is absolute,
/// de-duplicated and sorted.
pub fn extract_song_links(www_base: &str, page: &str) -> Vec<String> {
    let mut urls: Vec<String> = HREF_REGEX
        .captures_iter(page)
        .map(|caps| caps[1].to_string())
        .filter(|href| {
            href.starts_with("/theorytab/view/") && !href.contains("common-chord-progressions")
        })
        .map(|href| format!("{www_base}{href}"))
        .collect();
    urls.sort();
    urls.dedup();
    urls
}
