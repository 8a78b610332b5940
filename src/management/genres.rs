use std::{collections::HashMap, path::PathBuf};

use crate::config;

/// Persistent artist-to-genres cache.
///
/// Genre derivation is the slow part of a harvest (one API call per
/// distinct artist), so lookups are cached across runs. Failed lookups
/// cache an empty list, mirroring the "skip this unit of work" failure
/// model of the harvester.
pub struct GenreCacheManager {
    genres: HashMap<String, Vec<String>>,
}

impl GenreCacheManager {
    pub fn new() -> Self {
        Self {
            genres: HashMap::new(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let content = async_fs::read_to_string(Self::cache_path())
            .await
            .map_err(|e| e.to_string())?;
        let genres: HashMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { genres })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.genres).map_err(|e| e.to_string())?;
        async_fs::write(Self::cache_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn get(&self, artist_id: &str) -> Option<&Vec<String>> {
        self.genres.get(artist_id)
    }

    pub fn insert(&mut self, artist_id: String, genres: Vec<String>) {
        self.genres.insert(artist_id, genres);
    }

    pub fn count(&self) -> usize {
        self.genres.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/artist-genres.json");
        path
    }
}

impl Default for GenreCacheManager {
    fn default() -> Self {
        Self::new()
    }
}
