use std::collections::BTreeSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::ArtistRef;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the lowercased `"name - artist"` key both sides of the
/// description join are matched on. No normalization beyond lowercasing.
pub fn match_key(name: &str, artist: &str) -> String {
    format!("{} - {}", name.to_lowercase(), artist.to_lowercase())
}

pub fn join_artist_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Unions per-artist genre lists into the sorted, comma-joined form the
/// catalog stores.
pub fn join_genres(genre_lists: &[Vec<String>]) -> String {
    let unioned: BTreeSet<&String> = genre_lists.iter().flatten().collect();
    unioned
        .into_iter()
        .cloned()
        .collect::<Vec<String>>()
        .join(", ")
}

/// Formats a track duration in milliseconds as `m:ss` for table output.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Truncates a genre list for display, keeping at most `max` entries.
pub fn shorten_genres(genres: &str, max: usize) -> String {
    genres
        .split(',')
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .take(max)
        .collect::<Vec<&str>>()
        .join(", ")
}
