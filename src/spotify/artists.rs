use crate::{config, spotify::tracks::fetch_with_retry, types::ArtistResponse};

/// Retrieves a single artist's genre list from the Spotify Web API.
///
/// Track objects carry no genre data, so the harvester derives per-track
/// genres by looking up every contributing artist via `GET /artists/{id}`
/// and unioning the results. Lookups share the retry behavior of the track
/// endpoints (502 delay-and-retry, 429 `retry-after`).
///
/// # Arguments
///
/// * `artist_id` - Spotify artist id to look up
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// The artist's genre list, possibly empty; Spotify omits the field for
/// artists it has not classified.
pub async fn artist_genres(artist_id: &str, token: &str) -> Result<Vec<String>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    let response = fetch_with_retry(&api_url, token).await?;
    let artist = response.json::<ArtistResponse>().await?;

    Ok(artist.genres)
}
