use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{PlaylistTracksResponse, SavedTracksResponse},
    warning,
};

/// Retrieves a page of the user's saved tracks from the Spotify Web API.
///
/// Fetches one offset-paginated page of `GET /me/tracks`. The response's
/// `next` field tells the caller whether another page follows; pagination
/// itself is driven by the harvest loop, which also inserts the fixed
/// inter-page delay.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of items in this page (1-50)
/// * `offset` - Zero-based index of the first item to return
///
/// # Retry Logic
///
/// 502 Bad Gateway is retried after a 10-second delay; 429 Too Many
/// Requests waits for the advertised `retry-after` before retrying. Other
/// errors are propagated immediately.
pub async fn saved_tracks_page(
    token: &str,
    limit: u32,
    offset: u32,
) -> Result<SavedTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/tracks?limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        limit = limit,
        offset = offset
    );

    let response = fetch_with_retry(&api_url, token).await?;
    response.json::<SavedTracksResponse>().await
}

/// Retrieves a page of a playlist's tracks from the Spotify Web API.
///
/// Fetches one offset-paginated page of `GET /playlists/{id}/tracks`.
/// Playlist pages allow up to 100 items per request. Retry behavior is the
/// same as [`saved_tracks_page`].
pub async fn playlist_tracks_page(
    playlist_id: &str,
    token: &str,
    limit: u32,
    offset: u32,
) -> Result<PlaylistTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = limit,
        offset = offset
    );

    let response = fetch_with_retry(&api_url, token).await?;
    response.json::<PlaylistTracksResponse>().await
}

pub(crate) async fn fetch_with_retry(
    api_url: &str,
    token: &str,
) -> Result<reqwest::Response, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = resp
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(0);
                    if retry_after <= 120 {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                        retry_after
                    );
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return Ok(response);
    }
}
