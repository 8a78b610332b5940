/// A single nearest-neighbor hit: the document's track id and its cosine
/// similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub score: f32,
}

/// In-memory vector index over the embedded description corpus.
///
/// Vectors are stored flat and scanned linearly on search; the catalog is a
/// personal library of at most a few thousand rows, which a brute-force
/// cosine scan handles comfortably.
pub struct VectorIndex {
    dim: usize,
    ids: Vec<String>,
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ids: Vec::new(),
            vectors: Vec::new(),
        }
    }

    /// Adds a vector under the given id. Rejects vectors whose dimension
    /// doesn't match the index.
    pub fn add(&mut self, id: String, vector: Vec<f32>) -> Result<(), String> {
        if vector.len() != self.dim {
            return Err(format!(
                "vector dimension mismatch: expected {}, got {}",
                self.dim,
                vector.len()
            ));
        }

        self.ids.push(id);
        self.vectors.push(vector);
        Ok(())
    }

    /// Returns the top-k entries by cosine similarity, best first.
    ///
    /// At most `k` hits are returned, fewer when the index is smaller.
    /// Ties keep insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, String> {
        if query.len() != self.dim {
            return Err(format!(
                "query dimension mismatch: expected {}, got {}",
                self.dim,
                query.len()
            ));
        }

        let mut hits: Vec<SearchHit> = self
            .ids
            .iter()
            .zip(self.vectors.iter())
            .map(|(id, vector)| SearchHit {
                id: id.clone(),
                score: cosine_similarity(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

/// Cosine similarity of two equal-length vectors; zero-norm vectors score
/// zero instead of dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    dot / denom
}
