use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::config;

/// Wrapper around the pretrained sentence-embedding model.
///
/// The model is fixed: all-MiniLM-L6-v2, the same sentence-transformers
/// checkpoint the description corpus was curated against. Model and
/// tokenizer files are downloaded once into `<data_dir>/models` and reused
/// on subsequent runs.
pub struct Embedder {
    model: TextEmbedding,
}

impl Embedder {
    pub fn new() -> Result<Self, String> {
        let cache_dir = {
            let mut path = config::data_dir();
            path.push("models");
            path
        };

        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir)
                .with_show_download_progress(true),
        )
        .map_err(|e| e.to_string())?;

        Ok(Self { model })
    }

    /// Embeds a batch of texts into 384-dimensional vectors, one per input,
    /// in input order.
    pub fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, String> {
        self.model.embed(texts, None).map_err(|e| e.to_string())
    }

    /// Embeds a single query string.
    pub fn embed_one(&self, text: &str) -> Result<Vec<f32>, String> {
        let mut vectors = self.embed(vec![text.to_string()])?;
        vectors
            .pop()
            .ok_or_else(|| "embedding model returned no vector".to_string())
    }
}
