use vibecli::types::ArtistRef;
use vibecli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_match_key_lowercases_both_sides() {
    let key = match_key("Maand", "Bayaan, Hasan Raheem, Rovalio");
    assert_eq!(key, "maand - bayaan, hasan raheem, rovalio");

    // No normalization beyond lowercasing
    let key = match_key("  Spaced  ", "Artist");
    assert_eq!(key, "  spaced   - artist");
}

#[test]
fn test_join_artist_names() {
    let artists = vec![
        ArtistRef {
            id: Some("a1".to_string()),
            name: "Bayaan".to_string(),
        },
        ArtistRef {
            id: None,
            name: "Hasan Raheem".to_string(),
        },
    ];

    assert_eq!(join_artist_names(&artists), "Bayaan, Hasan Raheem");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_join_genres_unions_and_sorts() {
    let lists = vec![
        vec!["indie rock".to_string(), "dream pop".to_string()],
        vec!["dream pop".to_string(), "shoegaze".to_string()],
    ];

    // Union, sorted, comma-joined
    assert_eq!(join_genres(&lists), "dream pop, indie rock, shoegaze");

    // Empty input yields an empty string
    assert_eq!(join_genres(&[]), "");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(225_000), "3:45");
}

#[test]
fn test_shorten_genres() {
    let genres = "dream pop, indie rock, shoegaze, slowcore";

    assert_eq!(shorten_genres(genres, 3), "dream pop, indie rock, shoegaze");
    assert_eq!(shorten_genres(genres, 10), genres);
    assert_eq!(shorten_genres("", 3), "");
}
