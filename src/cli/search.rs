use tabled::Table;

use crate::{error, types::RecommendationTableRow, warning};

use super::serve::load_service;

/// Runs a semantic search from the command line and prints the results as
/// a table, best match first.
pub async fn search(query: String, count: usize) {
    let service = load_service().await;

    let results = match service.recommend(&query, count) {
        Ok(results) => results,
        Err(e) => error!("Search failed: {}", e),
    };

    if results.is_empty() {
        warning!("Nothing matched '{}'.", query);
        return;
    }

    let table_rows: Vec<RecommendationTableRow> = results
        .into_iter()
        .map(|r| RecommendationTableRow {
            score: format!("{:.3}", r.score),
            name: r.track.name,
            artist: r.track.artist,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
