//! # CLI Module
//!
//! This module provides the command-line interface layer of the
//! recommendation pipeline. It implements all user-facing commands and
//! coordinates between the Spotify API layer, the file-backed managers,
//! the fuzzy matching step and the semantic search service.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates Spotify OAuth authentication flow with PKCE security
//!
//! ### Harvesting
//!
//! - [`update_tracks`] - Harvests saved tracks and configured playlists
//!   into the CSV catalog, deriving per-track genres from artist lookups
//! - [`list_tracks`] - Displays the harvested catalog with optional search
//!   filtering
//!
//! ### Descriptions
//!
//! - [`match_descriptions`] - Fuzzy-joins the hand-curated description
//!   flatfile onto the catalog
//! - [`tag_descriptions`] - Writes the tagged description corpus consumed
//!   by the search index
//!
//! ### Retrieval
//!
//! - [`search`] - Semantic search from the command line
//! - [`serve`] - Builds the search service and serves the web UI
//!
//! ### Information
//!
//! - [`info`] - Status information about tokens, catalog and corpus
//!
//! ## Data Flow
//!
//! The commands form a linear pipeline passing data through flat files in
//! the local data directory:
//!
//! ```text
//! auth → tracks update → descriptions match → descriptions tag → serve/search
//!          tracks.csv     tracks_described.csv  tagged_descriptions.txt
//! ```
//!
//! Each stage reads the previous stage's output and complains with a
//! pointer at the missing prerequisite command when it isn't there.
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful degradation**: a failed page fetch or playlist stops that
//!   unit of work with a warning, not the whole run
//! - **Helpful messages**: missing prerequisites name the command to run
//! - **Fatal exits**: only for unusable state (no token, unreadable files)
//!
//! Long-running operations show indicatif progress feedback; listing
//! commands print tabled tables.

mod auth;
mod descriptions;
mod info;
mod search;
mod serve;
mod tracks;

pub use auth::auth;
pub use descriptions::match_descriptions;
pub use descriptions::tag_descriptions;
pub use info::info;
pub use search::search;
pub use serve::serve;
pub use tracks::list_tracks;
pub use tracks::update_tracks;
