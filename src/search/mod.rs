//! # Semantic Search Module
//!
//! This module implements the retrieval path of the recommendation demo:
//! splitting the tagged description corpus into documents, embedding them
//! with a fixed sentence-embedding model, holding the vectors in an
//! in-memory similarity index, and mapping nearest-neighbor hits back to
//! catalog rows.
//!
//! ## Core Modules
//!
//! - [`corpus`] - Newline-delimited tagged records (`"<id>" <text>`) parsed
//!   into documents.
//! - [`embedder`] - Wrapper around the pretrained all-MiniLM-L6-v2 sentence
//!   embedding model (384-dimensional vectors), with the model files cached
//!   in the local data directory.
//! - [`index`] - In-memory vector index with cosine-similarity top-k search.
//! - [`service`] - The [`SearchService`] tying catalog, index and embedder
//!   together behind a single `recommend` call. The service is constructed
//!   explicitly at startup and passed to whoever needs it; there is no
//!   process-wide index.
//!
//! ## Retrieval Contract
//!
//! Given a free-text query and a result count, `recommend` returns up to
//! that many catalog rows whose description embeddings are nearest (by
//! cosine similarity) to the query's embedding, nearest first. Every
//! returned id exists in the catalog; no tie-break or fallback logic is
//! applied beyond the index ordering.

pub mod corpus;
pub mod embedder;
pub mod index;
pub mod service;

pub use corpus::Document;
pub use embedder::Embedder;
pub use index::{SearchHit, VectorIndex};
pub use service::{ScoredTrack, SearchService};

/// Output dimension of the all-MiniLM-L6-v2 sentence embedding model.
pub const EMBEDDING_DIM: usize = 384;
