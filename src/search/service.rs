use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::{Document, Embedder, EMBEDDING_DIM, SearchHit, VectorIndex},
    types::DescribedTrack,
};

const EMBED_BATCH_SIZE: usize = 32;

/// A recommendation: a catalog row plus its similarity to the query.
#[derive(Debug, Clone)]
pub struct ScoredTrack {
    pub track: DescribedTrack,
    pub score: f32,
}

/// The retrieval service: enriched catalog, embedded corpus and the
/// embedding model, built once at startup and passed to the CLI search
/// command or the web handlers.
pub struct SearchService {
    catalog: Vec<DescribedTrack>,
    index: VectorIndex,
    embedder: Embedder,
}

impl SearchService {
    /// Embeds the corpus documents and builds the similarity index.
    ///
    /// Documents are embedded in small batches behind a progress bar; the
    /// whole corpus is embedded on every startup, there is no vector
    /// persistence.
    pub fn build(
        catalog: Vec<DescribedTrack>,
        documents: Vec<Document>,
        embedder: Embedder,
    ) -> Result<Self, String> {
        let mut index = VectorIndex::new(EMBEDDING_DIM);

        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_message("Embedding description corpus...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        for batch in documents.chunks(EMBED_BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|d| d.text.clone()).collect();
            let vectors = embedder.embed(texts)?;

            for (document, vector) in batch.iter().zip(vectors) {
                index.add(document.id.clone(), vector)?;
            }
            pb.inc(batch.len() as u64);
        }

        pb.finish_and_clear();

        Ok(Self {
            catalog,
            index,
            embedder,
        })
    }

    /// Returns up to `count` catalog rows whose description embeddings are
    /// nearest to the query embedding, nearest first.
    pub fn recommend(&self, query: &str, count: usize) -> Result<Vec<ScoredTrack>, String> {
        let query_vector = self.embedder.embed_one(query)?;
        let hits = self.index.search(&query_vector, count)?;
        Ok(select_tracks(&self.catalog, &hits, count))
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn index_len(&self) -> usize {
        self.index.len()
    }
}

/// Maps index hits back to catalog rows, preserving rank order and capping
/// at the requested count. Hits whose id is missing from the catalog are
/// dropped, so every returned row is a real catalog row.
pub fn select_tracks(
    catalog: &[DescribedTrack],
    hits: &[SearchHit],
    count: usize,
) -> Vec<ScoredTrack> {
    hits.iter()
        .filter_map(|hit| {
            catalog
                .iter()
                .find(|track| track.id == hit.id)
                .map(|track| ScoredTrack {
                    track: track.clone(),
                    score: hit.score,
                })
        })
        .take(count)
        .collect()
}
