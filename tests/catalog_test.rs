use vibecli::management::{
    read_described_csv, read_tracks_csv, tagged_line, write_described_csv, write_tracks_csv,
};
use vibecli::types::{DescribedTrack, TrackRecord};

fn create_test_track(id: &str, name: &str, artist: &str) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        album: "Test Album".to_string(),
        release_date: "2023-10-01".to_string(),
        duration_ms: 210_000,
        genres: "dream pop, indie rock".to_string(),
        popularity: 40,
        explicit: false,
    }
}

#[test]
fn test_tracks_csv_column_order() {
    let tracks = vec![create_test_track("id1", "Maand", "Bayaan")];
    let bytes = write_tracks_csv(&tracks).unwrap();
    let csv = String::from_utf8(bytes).unwrap();

    // The header must carry the nine declared columns in order
    let header = csv.lines().next().unwrap();
    assert_eq!(
        header,
        "id,name,artist,album,release_date,duration_ms,genres,popularity,explicit"
    );
}

#[test]
fn test_tracks_csv_roundtrip() {
    let tracks = vec![
        create_test_track("id1", "Maand", "Bayaan, Hasan Raheem"),
        create_test_track("id2", "Afsos", "Anuv Jain"),
    ];

    let bytes = write_tracks_csv(&tracks).unwrap();
    let parsed = read_tracks_csv(&String::from_utf8(bytes).unwrap()).unwrap();

    assert_eq!(parsed, tracks);
}

#[test]
fn test_described_csv_appends_description_column() {
    let rows = vec![
        DescribedTrack::from_record(
            create_test_track("id1", "Maand", "Bayaan"),
            Some("A floaty late-night duet.".to_string()),
        ),
        DescribedTrack::from_record(create_test_track("id2", "Afsos", "Anuv Jain"), None),
    ];

    let bytes = write_described_csv(&rows).unwrap();
    let csv = String::from_utf8(bytes).unwrap();

    let header = csv.lines().next().unwrap();
    assert_eq!(
        header,
        "id,name,artist,album,release_date,duration_ms,genres,popularity,explicit,description"
    );

    // Roundtrip keeps the absent description absent
    let parsed = read_described_csv(&csv).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(
        parsed[0].description.as_deref(),
        Some("A floaty late-night duet.")
    );
    assert_eq!(parsed[1].description, None);
}

#[test]
fn test_upsert_deduplicates_by_id() {
    let mut catalog = vibecli::management::CatalogManager::new();

    catalog.upsert(create_test_track("id1", "Maand", "Bayaan"));
    catalog.upsert(create_test_track("id2", "Afsos", "Anuv Jain"));
    // Same id seen again from a playlist source
    catalog.upsert(create_test_track("id1", "Maand (Remaster)", "Bayaan"));

    let tracks = catalog.tracks();
    assert_eq!(tracks.len(), 2);

    // Ids stay unique, first-seen order is kept
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2"]);

    // Last write wins on content
    assert_eq!(tracks[0].name, "Maand (Remaster)");
}

#[test]
fn test_tagged_line() {
    let described = DescribedTrack::from_record(
        create_test_track("id1", "Maand", "Bayaan"),
        Some("A floaty late-night duet.".to_string()),
    );
    assert_eq!(
        tagged_line(&described).as_deref(),
        Some("\"id1\" A floaty late-night duet.")
    );

    // Rows without a description produce no corpus line
    let blank = DescribedTrack::from_record(create_test_track("id2", "Afsos", "Anuv Jain"), None);
    assert_eq!(tagged_line(&blank), None);

    // Whitespace-only descriptions count as absent
    let whitespace = DescribedTrack::from_record(
        create_test_track("id3", "Husn", "Anuv Jain"),
        Some("   ".to_string()),
    );
    assert_eq!(tagged_line(&whitespace), None);
}
