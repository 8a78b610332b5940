use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    config, error,
    management::{CatalogManager, GenreCacheManager, TokenManager},
    spotify, success,
    types::{TrackRecord, TrackObject, TrackTableRow},
    utils, warning,
};

const SAVED_TRACKS_PAGE_SIZE: u32 = 50;
const PLAYLIST_PAGE_SIZE: u32 = 100;
const PAGE_DELAY_MS: u64 = 100;
const ARTIST_DELAY_MS: u64 = 50;

/// Harvests the user's saved tracks and configured playlists into the CSV
/// catalog.
///
/// Pages through `GET /me/tracks` and every playlist in
/// `SPOTIFY_PLAYLIST_IDS`, deduplicating by track id (last write wins, the
/// output keeps first-seen order), then derives per-track genre sets from
/// artist lookups and writes the nine-column catalog CSV. A failed page
/// stops that source; a failed playlist skips to the next one.
///
/// # Arguments
///
/// * `force` - bypass the persisted artist-genre cache and re-fetch every
///   artist
pub async fn update_tracks(force: bool) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run vibecli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching saved tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut catalog = CatalogManager::new();
    // track id -> contributing artist ids, only needed until genres resolve
    let mut track_artists: HashMap<String, Vec<String>> = HashMap::new();

    // saved tracks
    let mut offset = 0;
    loop {
        let token = token_mgr.get_valid_token().await;
        match spotify::tracks::saved_tracks_page(&token, SAVED_TRACKS_PAGE_SIZE, offset).await {
            Ok(page) => {
                for item in page.items {
                    if let Some(track) = item.track {
                        if let Some((record, artist_ids)) = extract_track_info(&track) {
                            track_artists.insert(record.id.clone(), artist_ids);
                            catalog.upsert(record);
                        }
                    }
                }
                pb.set_message(format!("Fetched {} tracks...", catalog.count()));

                offset += SAVED_TRACKS_PAGE_SIZE;
                if page.next.is_none() {
                    break;
                }
                sleep(Duration::from_millis(PAGE_DELAY_MS)).await;
            }
            Err(e) => {
                warning!("Failed to fetch saved tracks page: {}", e);
                break;
            }
        }
    }

    // playlist tracks
    for playlist_id in config::playlist_ids() {
        let mut offset = 0;
        loop {
            let token = token_mgr.get_valid_token().await;
            match spotify::tracks::playlist_tracks_page(
                &playlist_id,
                &token,
                PLAYLIST_PAGE_SIZE,
                offset,
            )
            .await
            {
                Ok(page) => {
                    for item in page.items {
                        if let Some(track) = item.track {
                            if let Some((record, artist_ids)) = extract_track_info(&track) {
                                track_artists.insert(record.id.clone(), artist_ids);
                                catalog.upsert(record);
                            }
                        }
                    }
                    pb.set_message(format!(
                        "Fetched {} tracks (playlist {})...",
                        catalog.count(),
                        playlist_id
                    ));

                    offset += PLAYLIST_PAGE_SIZE;
                    if page.next.is_none() {
                        break;
                    }
                    sleep(Duration::from_millis(PAGE_DELAY_MS)).await;
                }
                Err(e) => {
                    warning!("Failed to fetch playlist {}: {}", playlist_id, e);
                    break;
                }
            }
        }
    }

    // genre derivation via cached artist lookups
    let mut genre_cache = if force {
        GenreCacheManager::new()
    } else {
        GenreCacheManager::load()
            .await
            .unwrap_or_else(|_| GenreCacheManager::new())
    };

    let tracks = catalog.all();
    let tracks_total = tracks.len();
    let mut resolved = CatalogManager::new();

    for (tracks_count, mut track) in tracks.into_iter().enumerate() {
        pb.set_message(format!(
            "Resolving genres for {name} ({tracks_count}/{tracks_total})",
            name = track.name,
            tracks_count = tracks_count,
            tracks_total = tracks_total
        ));

        let artist_ids = track_artists.remove(&track.id).unwrap_or_default();
        let mut genre_lists: Vec<Vec<String>> = Vec::new();

        for artist_id in artist_ids {
            if genre_cache.get(&artist_id).is_none() {
                let token = token_mgr.get_valid_token().await;
                let genres = match spotify::artists::artist_genres(&artist_id, &token).await {
                    Ok(genres) => genres,
                    Err(e) => {
                        pb.set_message(format!(
                            "Genre lookup failed for artist {}: {}",
                            artist_id, e
                        ));
                        Vec::new()
                    }
                };
                genre_cache.insert(artist_id.clone(), genres);
                sleep(Duration::from_millis(ARTIST_DELAY_MS)).await;
            }

            if let Some(genres) = genre_cache.get(&artist_id) {
                genre_lists.push(genres.clone());
            }
        }

        track.genres = utils::join_genres(&genre_lists);
        resolved.upsert(track);
    }

    pb.finish_and_clear();

    if let Err(e) = genre_cache.persist().await {
        warning!("Cannot cache artist genres. Err: {}", e);
    }

    match resolved.persist().await {
        Ok(_) => success!(
            "Saved {} tracks to {}",
            resolved.count(),
            CatalogManager::tracks_path().display()
        ),
        Err(e) => error!("Failed to save track catalog: {}", e),
    }
}

/// Lists the harvested catalog as a table, optionally filtered by a
/// case-insensitive substring on name or artist.
pub async fn list_tracks(search: Option<String>) {
    match CatalogManager::load().await {
        Ok(catalog) => {
            let mut tracks = catalog.all();
            tracks.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            if let Some(track_search) = search {
                let search_term = track_search.to_lowercase();
                tracks.retain(|t| {
                    t.name.to_lowercase().contains(&search_term)
                        || t.artist.to_lowercase().contains(&search_term)
                });
            }

            let table_rows: Vec<TrackTableRow> = tracks
                .into_iter()
                .map(|t| TrackTableRow {
                    name: t.name,
                    artist: t.artist,
                    album: t.album,
                    duration: utils::format_duration(t.duration_ms),
                    genres: utils::shorten_genres(&t.genres, 3),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!(
            "Failed to load tracks. Run vibecli tracks update first. Err: {}",
            e
        ),
    }
}

/// Flattens a Spotify track object into a catalog record plus the artist
/// ids needed for genre derivation. Local tracks and tracks without an id
/// are skipped.
fn extract_track_info(track: &TrackObject) -> Option<(TrackRecord, Vec<String>)> {
    if track.is_local {
        return None;
    }
    let id = track.id.clone()?;

    let artist_ids: Vec<String> = track
        .artists
        .iter()
        .filter_map(|a| a.id.clone())
        .collect();

    let record = TrackRecord {
        id,
        name: track.name.clone(),
        artist: utils::join_artist_names(&track.artists),
        album: track.album.name.clone(),
        release_date: track.album.release_date.clone().unwrap_or_default(),
        duration_ms: track.duration_ms,
        genres: String::new(),
        popularity: track.popularity.unwrap_or(0),
        explicit: track.explicit,
    };

    Some((record, artist_ids))
}
