use chrono::Utc;

use crate::{
    config, info,
    management::{CatalogManager, TokenManager},
    search::corpus,
    warning,
};

/// Displays status information about the application state and data.
///
/// Without flags, prints an overview of the data directory and the token
/// state. The flags add pipeline-stage detail:
///
/// - `tracks` - catalog size and file location
/// - `descriptions` - described-row count and tagged corpus size
///
/// # Output Examples
///
/// ```text
/// [o] Data directory: /home/user/.local/share/vibecli
/// [o] Token: valid (expires in 2143s)
/// [o] Catalog: 1204 tracks
/// [o] Described: 312/1204 tracks
/// [o] Tagged corpus: 312 documents
/// ```
///
/// Missing files show up as warnings with a pointer at the command that
/// produces them, so `info` doubles as a pipeline checklist.
pub async fn info(tracks: bool, descriptions: bool) {
    info!("Data directory: {}", config::data_dir().display());

    match TokenManager::load().await {
        Ok(token_mgr) => {
            if token_mgr.is_expired() {
                info!("Token: expired (will refresh on next use)");
            } else {
                let token = token_mgr.current_token();
                let expires_at = token.obtained_at + token.expires_in;
                let remaining = expires_at.saturating_sub(Utc::now().timestamp() as u64);
                info!("Token: valid (expires in {}s)", remaining);
            }
        }
        Err(_) => warning!("No token cached. Run vibecli auth."),
    }

    if tracks {
        match CatalogManager::load().await {
            Ok(catalog) => info!(
                "Catalog: {} tracks ({})",
                catalog.count(),
                CatalogManager::tracks_path().display()
            ),
            Err(_) => warning!("No track catalog. Run vibecli tracks update."),
        }
    }

    if descriptions {
        match CatalogManager::load_described().await {
            Ok(rows) => {
                let described = rows.iter().filter(|r| r.description.is_some()).count();
                info!("Described: {}/{} tracks", described, rows.len());
            }
            Err(_) => warning!("No described catalog. Run vibecli descriptions match."),
        }

        match CatalogManager::load_tagged().await {
            Ok(tagged) => info!(
                "Tagged corpus: {} documents",
                corpus::split_documents(&tagged).len()
            ),
            Err(_) => warning!("No tagged corpus. Run vibecli descriptions tag."),
        }
    }
}
