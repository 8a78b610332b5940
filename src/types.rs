use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One row of the harvested track catalog. Field order defines the CSV
/// column order: `id,name,artist,album,release_date,duration_ms,genres,
/// popularity,explicit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub duration_ms: u64,
    pub genres: String,
    pub popularity: u32,
    pub explicit: bool,
}

/// A catalog row enriched with an optional human-written description.
/// Serializes to the same nine columns plus a trailing `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribedTrack {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub duration_ms: u64,
    pub genres: String,
    pub popularity: u32,
    pub explicit: bool,
    pub description: Option<String>,
}

impl DescribedTrack {
    pub fn from_record(record: TrackRecord, description: Option<String>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            artist: record.artist,
            album: record.album,
            release_date: record.release_date,
            duration_ms: record.duration_ms,
            genres: record.genres,
            popularity: record.popularity,
            explicit: record.explicit,
            description,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub score: String,
    pub name: String,
    pub artist: String,
}

// --- Spotify Web API response shapes ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrackItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrackItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
    pub duration_ms: u64,
    pub popularity: Option<u32>,
    pub explicit: bool,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}
