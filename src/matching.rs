//! Description flatfile parsing and fuzzy joining.
//!
//! The description source is a hand-curated text file of numbered header
//! lines paired with free-text description lines:
//!
//! ```text
//! 1. Maand – Bayaan, Hasan Raheem, Rovalio
//! A floaty late-night duet that drifts between longing and calm.
//! ```
//!
//! Headers are parsed into lowercased `"title - artists"` keys and matched
//! against catalog keys by a token-sort ratio. Misses below the threshold
//! leave the description absent; they are never errors.

use crate::{
    types::{DescribedTrack, TrackRecord},
    utils,
};

/// Minimum token-sort ratio (0-100) for a description to be attached.
pub const MATCH_THRESHOLD: f64 = 80.0;

/// A parsed description entry: the lowercased match key and the description
/// line that followed the header.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionEntry {
    pub key: String,
    pub description: String,
}

/// Parses the description flatfile contents into match-key entries.
///
/// Non-empty lines are consumed pairwise: a numbered `N. Title – Artists`
/// header followed by its description line. Both the en dash and a plain
/// hyphen separate title from artists. Malformed headers skip the pair, and
/// on duplicate keys the first entry wins.
pub fn parse_descriptions(contents: &str) -> Vec<DescriptionEntry> {
    let lines: Vec<&str> = contents
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries: Vec<DescriptionEntry> = Vec::new();
    let mut i = 0;
    while i + 1 < lines.len() {
        let header = lines[i];
        let description = lines[i + 1];

        if let Some((title, artists)) = split_header(header) {
            let key = utils::match_key(&title, &artists);
            if !entries.iter().any(|e| e.key == key) {
                entries.push(DescriptionEntry {
                    key,
                    description: description.to_string(),
                });
            }
        }

        i += 2;
    }

    entries
}

/// Splits a numbered header line into `(title, artists)`.
///
/// Expects a leading `N.` ordinal followed by `Title – Artists`; returns
/// `None` when the ordinal or the dash separator is missing.
fn split_header(header: &str) -> Option<(String, String)> {
    let rest = strip_ordinal(header)?;

    let (title, artists) = match rest.split_once('–') {
        Some(pair) => pair,
        None => rest.split_once(" - ")?,
    };

    let title = title.trim();
    let artists = artists.trim();
    if title.is_empty() || artists.is_empty() {
        return None;
    }

    Some((title.to_string(), artists.to_string()))
}

fn strip_ordinal(header: &str) -> Option<&str> {
    let dot = header.find('.')?;
    let (number, rest) = header.split_at(dot);
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(rest[1..].trim_start())
}

/// Scores two strings with a token-sort ratio in the 0-100 range.
///
/// Both sides are tokenized on whitespace, the tokens sorted and rejoined,
/// and the rejoined strings compared by normalized Levenshtein similarity.
/// This makes the score insensitive to word order, which is what the
/// `"title - artists"` keys need when artist lists are ordered differently
/// on the two sides of the join.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&sort_tokens(a), &sort_tokens(b)) * 100.0
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Finds the best-scoring description for a catalog key.
///
/// Returns the description of the highest token-sort ratio entry when that
/// ratio reaches [`MATCH_THRESHOLD`], otherwise `None`.
pub fn find_best_description<'a>(
    key: &str,
    entries: &'a [DescriptionEntry],
) -> Option<&'a DescriptionEntry> {
    let mut best: Option<(&DescriptionEntry, f64)> = None;

    for entry in entries {
        let score = token_sort_ratio(key, &entry.key);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((entry, score));
        }
    }

    best.and_then(|(entry, score)| (score >= MATCH_THRESHOLD).then_some(entry))
}

/// Joins parsed descriptions onto catalog rows.
///
/// Every row gets a key built from its name and artist list; rows without a
/// good enough match keep an absent description.
pub fn attach_descriptions(
    tracks: Vec<TrackRecord>,
    entries: &[DescriptionEntry],
) -> Vec<DescribedTrack> {
    tracks
        .into_iter()
        .map(|track| {
            let key = utils::match_key(&track.name, &track.artist);
            let description =
                find_best_description(&key, entries).map(|e| e.description.clone());
            DescribedTrack::from_record(track, description)
        })
        .collect()
}
