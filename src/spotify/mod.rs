//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! harvesting pipeline. It handles the OAuth 2.0 PKCE authentication flow,
//! paginated retrieval of the user's saved tracks and of playlist tracks,
//! and per-artist genre lookups, abstracting the HTTP communication, retry
//! handling and response decoding behind a small set of async functions.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, local
//!   callback server coordination, code-for-token exchange and refresh.
//! - [`tracks`] - Offset-paginated saved-tracks and playlist-tracks
//!   endpoints, the raw material of the track catalog.
//! - [`artists`] - Single-artist lookups used to derive per-track genre
//!   sets, since track objects carry no genre data of their own.
//!
//! ## Error Handling
//!
//! Transient upstream failures are retried in place: 502 Bad Gateway waits
//! ten seconds and retries, 429 Too Many Requests honors the `retry-after`
//! header when it is reasonable. Everything else is propagated as a
//! `reqwest::Error` for the caller to treat as "stop or skip this unit of
//! work": the harvest loops warn and move on rather than abort the run.
//!
//! ## API Coverage
//!
//! - `GET /me/tracks` - the user's saved tracks, offset pagination
//! - `GET /playlists/{id}/tracks` - playlist contents, offset pagination
//! - `GET /artists/{id}` - artist metadata including genres
//! - `POST /api/token` - token exchange and refresh
//!
//! Endpoint base URLs and credentials come from [`crate::config`].

pub mod artists;
pub mod auth;
pub mod tracks;
