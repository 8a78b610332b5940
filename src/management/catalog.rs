use std::path::PathBuf;

use crate::{
    config,
    types::{DescribedTrack, TrackRecord},
};

/// Owns the harvested track catalog and its flat-file representations in
/// the library directory: the raw nine-column CSV, the described ten-column
/// CSV and the tagged description corpus consumed by the search index.
pub struct CatalogManager {
    tracks: Vec<TrackRecord>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    pub async fn load() -> Result<Self, String> {
        let content = async_fs::read_to_string(Self::tracks_path())
            .await
            .map_err(|e| e.to_string())?;
        Ok(Self {
            tracks: read_tracks_csv(&content)?,
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::tracks_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let csv = write_tracks_csv(&self.tracks)?;
        async_fs::write(path, csv).await.map_err(|e| e.to_string())
    }

    /// Inserts a track, deduplicating by id: an existing row keeps its
    /// first-seen position but takes the new content (last write wins).
    pub fn upsert(&mut self, track: TrackRecord) {
        if let Some(existing) = self.tracks.iter_mut().find(|t| t.id == track.id) {
            *existing = track;
        } else {
            self.tracks.push(track);
        }
    }

    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    pub fn all(&self) -> Vec<TrackRecord> {
        self.tracks.clone()
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub async fn load_described() -> Result<Vec<DescribedTrack>, String> {
        let content = async_fs::read_to_string(Self::described_path())
            .await
            .map_err(|e| e.to_string())?;
        read_described_csv(&content)
    }

    pub async fn persist_described(rows: &[DescribedTrack]) -> Result<(), String> {
        let path = Self::described_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let csv = write_described_csv(rows)?;
        async_fs::write(path, csv).await.map_err(|e| e.to_string())
    }

    pub async fn load_tagged() -> Result<String, String> {
        async_fs::read_to_string(Self::tagged_path())
            .await
            .map_err(|e| e.to_string())
    }

    /// Writes the tagged description corpus: one `"<id>" <description>`
    /// line per described row. Rows without a description are left out.
    pub async fn persist_tagged(rows: &[DescribedTrack]) -> Result<usize, String> {
        let path = Self::tagged_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let lines: Vec<String> = rows.iter().filter_map(tagged_line).collect();
        let count = lines.len();
        async_fs::write(path, lines.join("\n"))
            .await
            .map_err(|e| e.to_string())?;
        Ok(count)
    }

    pub fn tracks_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("library/tracks.csv");
        path
    }

    pub fn described_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("library/tracks_described.csv");
        path
    }

    pub fn tagged_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("library/tagged_descriptions.txt");
        path
    }
}

pub fn read_tracks_csv(content: &str) -> Result<Vec<TrackRecord>, String> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<TrackRecord>, csv::Error>>()
        .map_err(|e| e.to_string())
}

pub fn write_tracks_csv(tracks: &[TrackRecord]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for track in tracks {
        writer.serialize(track).map_err(|e| e.to_string())?;
    }
    writer
        .into_inner()
        .map_err(|e| e.to_string())
}

pub fn read_described_csv(content: &str) -> Result<Vec<DescribedTrack>, String> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<DescribedTrack>, csv::Error>>()
        .map_err(|e| e.to_string())
}

pub fn write_described_csv(rows: &[DescribedTrack]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer
        .into_inner()
        .map_err(|e| e.to_string())
}

/// Formats one tagged corpus line, `"<id>" <description>`, or `None` for
/// rows without a description.
pub fn tagged_line(row: &DescribedTrack) -> Option<String> {
    row.description
        .as_ref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!("\"{}\" {}", row.id, d.trim()))
}
