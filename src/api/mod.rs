//! # API Module
//!
//! HTTP handlers for the application's two local web surfaces: the OAuth
//! callback server used during authentication, and the recommendation UI
//! served by `vibecli serve`.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server, completing the PKCE flow by exchanging the
//!   authorization code for an access token.
//!
//! ### Recommendation UI
//!
//! - [`home`] - Renders the query form: a free-text description of the
//!   music being looked for and a result-count selector.
//! - [`search`] - Runs the semantic search and renders result cards with
//!   embedded Spotify players.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check returning application status and version.
//!
//! ## Architecture
//!
//! Handlers are async functions on the [Axum](https://docs.rs/axum) web
//! framework. Shared state (the PKCE exchange state during auth, the
//! [`crate::search::SearchService`] during serving) is injected through
//! `Extension` layers; there is no global state.

mod callback;
mod health;
mod search;

pub use callback::callback;
pub use health::health;
pub use search::home;
pub use search::search;
