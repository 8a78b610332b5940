use std::path::PathBuf;

use crate::{config, error, info, management::CatalogManager, matching, success, warning};

/// Fuzzy-joins the hand-curated description flatfile onto the catalog and
/// writes the enriched ten-column CSV.
///
/// A track without a good enough match keeps an empty description; misses
/// are counted, not errors.
///
/// # Arguments
///
/// * `source` - path of the description file, defaulting to the
///   `DESCRIPTIONS_FILE` configuration value
pub async fn match_descriptions(source: Option<String>) {
    let path = source
        .map(PathBuf::from)
        .unwrap_or_else(config::descriptions_file);

    let contents = match async_fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) => {
            error!("Cannot read description file {}: {}", path.display(), e);
        }
    };

    let entries = matching::parse_descriptions(&contents);
    if entries.is_empty() {
        warning!("No description entries parsed from {}", path.display());
    }

    let catalog = match CatalogManager::load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(
                "Failed to load track catalog. Run vibecli tracks update first.\n Error: {}",
                e
            );
        }
    };

    info!(
        "Matching {} descriptions against {} tracks...",
        entries.len(),
        catalog.count()
    );

    let described = matching::attach_descriptions(catalog.all(), &entries);
    let matched = described.iter().filter(|t| t.description.is_some()).count();

    match CatalogManager::persist_described(&described).await {
        Ok(_) => success!(
            "Matched {}/{} tracks. Saved to {}",
            matched,
            described.len(),
            CatalogManager::described_path().display()
        ),
        Err(e) => error!("Failed to save described catalog: {}", e),
    }
}

/// Writes the tagged description corpus, one `"<id>" <description>` line
/// per described track, for the search index to embed.
pub async fn tag_descriptions() {
    let rows = match CatalogManager::load_described().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                "Failed to load described catalog. Run vibecli descriptions match first.\n Error: {}",
                e
            );
        }
    };

    match CatalogManager::persist_tagged(&rows).await {
        Ok(count) => success!(
            "Wrote {} tagged descriptions to {}",
            count,
            CatalogManager::tagged_path().display()
        ),
        Err(e) => error!("Failed to write tagged descriptions: {}", e),
    }
}
