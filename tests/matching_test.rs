use vibecli::matching::*;
use vibecli::types::TrackRecord;

fn create_test_track(id: &str, name: &str, artist: &str) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        album: "Test Album".to_string(),
        release_date: "2023-10-01".to_string(),
        duration_ms: 210_000,
        genres: "indie rock".to_string(),
        popularity: 40,
        explicit: false,
    }
}

const DESCRIPTIONS: &str = "\
1. Maand – Bayaan, Hasan Raheem, Rovalio
A floaty late-night duet that drifts between longing and calm.

2. Afsos – Anuv Jain
Sparse guitar and a voice that sounds like an apology.
";

#[test]
fn test_parse_descriptions() {
    let entries = parse_descriptions(DESCRIPTIONS);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "maand - bayaan, hasan raheem, rovalio");
    assert_eq!(
        entries[0].description,
        "A floaty late-night duet that drifts between longing and calm."
    );
    assert_eq!(entries[1].key, "afsos - anuv jain");
}

#[test]
fn test_parse_descriptions_first_key_wins() {
    let contents = "\
1. Maand – Bayaan
First description.
2. Maand – Bayaan
Second description.
";
    let entries = parse_descriptions(contents);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, "First description.");
}

#[test]
fn test_parse_descriptions_skips_malformed_headers() {
    // The second pair has no ordinal and no dash; both of its lines are
    // consumed without producing an entry.
    let contents = "\
1. Maand – Bayaan
A description.
not a header line
stray description line
3. Afsos – Anuv Jain
Another description.
";
    let entries = parse_descriptions(contents);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "maand - bayaan");
    assert_eq!(entries[1].key, "afsos - anuv jain");
}

#[test]
fn test_parse_descriptions_accepts_plain_hyphen() {
    let contents = "\
1. Maand - Bayaan
A description.
";
    let entries = parse_descriptions(contents);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "maand - bayaan");
}

#[test]
fn test_parse_descriptions_trailing_header_without_description() {
    let contents = "\
1. Maand – Bayaan
A description.
2. Afsos – Anuv Jain
";
    // The trailing header has no paired description line and is dropped.
    let entries = parse_descriptions(contents);
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_token_sort_ratio_identical() {
    assert_eq!(token_sort_ratio("maand - bayaan", "maand - bayaan"), 100.0);
}

#[test]
fn test_token_sort_ratio_is_order_insensitive() {
    let a = "maand - bayaan, hasan raheem";
    let b = "maand - hasan raheem, bayaan,";

    // Token order alone should not matter
    assert!(token_sort_ratio("world hello", "hello world") >= 99.9);

    // Reordered artist lists still score high
    assert!(token_sort_ratio(a, b) >= MATCH_THRESHOLD);
}

#[test]
fn test_token_sort_ratio_unrelated_strings_score_low() {
    let score = token_sort_ratio(
        "maand - bayaan, hasan raheem, rovalio",
        "completely different song - nobody at all",
    );
    assert!(score < MATCH_THRESHOLD);
}

#[test]
fn test_find_best_description_threshold() {
    let entries = parse_descriptions(DESCRIPTIONS);

    // Exact key matches
    let best = find_best_description("maand - bayaan, hasan raheem, rovalio", &entries);
    assert!(best.is_some());

    // Near key (one artist reordered) still matches
    let best = find_best_description("maand - hasan raheem, bayaan, rovalio", &entries);
    assert!(best.is_some());

    // Unrelated key misses
    let best = find_best_description("some other song - some other artist", &entries);
    assert!(best.is_none());

    // Empty entry list never matches
    let best = find_best_description("maand - bayaan", &[]);
    assert!(best.is_none());
}

#[test]
fn test_attach_descriptions() {
    let entries = parse_descriptions(DESCRIPTIONS);
    let tracks = vec![
        create_test_track("id1", "Maand", "Bayaan, Hasan Raheem, Rovalio"),
        create_test_track("id2", "Unknown Song", "Unknown Artist"),
    ];

    let described = attach_descriptions(tracks, &entries);

    // A miss never raises; the description is simply absent
    assert_eq!(described.len(), 2);
    assert!(described[0].description.is_some());
    assert!(described[1].description.is_none());

    // The matched row keeps its catalog fields
    assert_eq!(described[0].id, "id1");
    assert_eq!(described[0].name, "Maand");
}
