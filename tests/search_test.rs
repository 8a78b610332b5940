use vibecli::search::corpus::{parse_tagged_line, split_documents};
use vibecli::search::index::cosine_similarity;
use vibecli::search::service::select_tracks;
use vibecli::search::{SearchHit, VectorIndex};
use vibecli::types::{DescribedTrack, TrackRecord};

fn create_described_track(id: &str, name: &str) -> DescribedTrack {
    DescribedTrack::from_record(
        TrackRecord {
            id: id.to_string(),
            name: name.to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            release_date: "2023-10-01".to_string(),
            duration_ms: 210_000,
            genres: String::new(),
            popularity: 40,
            explicit: false,
        },
        Some(format!("Description of {}", name)),
    )
}

#[test]
fn test_parse_tagged_line() {
    let doc = parse_tagged_line("\"id1\" A floaty late-night duet.").unwrap();
    assert_eq!(doc.id, "id1");
    assert_eq!(doc.text, "A floaty late-night duet.");

    // Lines without a leading quoted id are rejected
    assert!(parse_tagged_line("no quoted id here").is_none());
    assert!(parse_tagged_line("\"id-only\"").is_none());
    assert!(parse_tagged_line("\"\" text without id").is_none());
}

#[test]
fn test_split_documents() {
    let contents = "\
\"id1\" First description.

\"id2\" Second description.
malformed line
\"id3\" Third description.
";
    let documents = split_documents(contents);

    assert_eq!(documents.len(), 3);
    assert_eq!(documents[0].id, "id1");
    assert_eq!(documents[2].text, "Third description.");

    assert!(split_documents("").is_empty());
}

#[test]
fn test_cosine_similarity() {
    let a = [1.0, 0.0, 0.0];
    let b = [0.0, 1.0, 0.0];
    let c = [2.0, 0.0, 0.0];

    // Orthogonal vectors score zero, parallel vectors score one
    assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    assert!((cosine_similarity(&a, &c) - 1.0).abs() < 1e-6);

    // Zero-norm vectors score zero instead of dividing by zero
    assert_eq!(cosine_similarity(&a, &[0.0, 0.0, 0.0]), 0.0);
}

#[test]
fn test_index_rejects_dimension_mismatch() {
    let mut index = VectorIndex::new(3);

    assert!(index.add("id1".to_string(), vec![1.0, 0.0]).is_err());
    assert!(index.add("id1".to_string(), vec![1.0, 0.0, 0.0]).is_ok());
    assert!(index.search(&[1.0, 0.0], 5).is_err());
}

#[test]
fn test_index_search_orders_by_similarity() {
    let mut index = VectorIndex::new(3);
    index.add("far".to_string(), vec![0.0, 1.0, 0.0]).unwrap();
    index.add("near".to_string(), vec![1.0, 0.1, 0.0]).unwrap();
    index.add("exact".to_string(), vec![1.0, 0.0, 0.0]).unwrap();

    let hits = index.search(&[1.0, 0.0, 0.0], 3).unwrap();

    let ids: Vec<&String> = hits.iter().map(|h| &h.id).collect();
    assert_eq!(ids, vec!["exact", "near", "far"]);

    // Scores are descending
    assert!(hits[0].score >= hits[1].score);
    assert!(hits[1].score >= hits[2].score);
}

#[test]
fn test_index_search_returns_at_most_k() {
    let mut index = VectorIndex::new(2);
    for i in 0..10 {
        index
            .add(format!("id{}", i), vec![i as f32, 1.0])
            .unwrap();
    }

    assert_eq!(index.search(&[1.0, 0.0], 3).unwrap().len(), 3);

    // Asking for more than the index holds returns everything
    assert_eq!(index.search(&[1.0, 0.0], 50).unwrap().len(), 10);

    // An empty index returns no hits
    let empty = VectorIndex::new(2);
    assert!(empty.search(&[1.0, 0.0], 5).unwrap().is_empty());
}

#[test]
fn test_select_tracks_maps_hits_to_catalog_rows() {
    let catalog = vec![
        create_described_track("id1", "Maand"),
        create_described_track("id2", "Afsos"),
        create_described_track("id3", "Husn"),
    ];
    let hits = vec![
        SearchHit {
            id: "id3".to_string(),
            score: 0.9,
        },
        SearchHit {
            id: "ghost".to_string(),
            score: 0.8,
        },
        SearchHit {
            id: "id1".to_string(),
            score: 0.7,
        },
    ];

    let results = select_tracks(&catalog, &hits, 10);

    // Unknown ids are dropped; every returned row is a real catalog row
    assert_eq!(results.len(), 2);

    // Rank order is preserved
    assert_eq!(results[0].track.id, "id3");
    assert_eq!(results[1].track.id, "id1");

    // The request cap is honored
    let capped = select_tracks(&catalog, &hits, 1);
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].track.id, "id3");
}
