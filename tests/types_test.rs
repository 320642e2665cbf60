use chrono::Utc;
use serde_json::json;
use toptracks::types::*;

// Helper function to create a provider track item
fn create_test_item(id: &str, name: &str, artists: &[&str]) -> TrackItem {
    TrackItem {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|name| TrackArtist {
                name: name.to_string(),
            })
            .collect(),
    }
}

fn create_test_token(access_token: &str, expires_in: u64, obtained_at: u64) -> Token {
    Token {
        access_token: access_token.to_string(),
        token_type: "Bearer".to_string(),
        refresh_token: None,
        scope: "user-top-read".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_track_from_item_keeps_first_artist() {
    let track = Track::from(create_test_item("1", "Song", &["A", "B"]));
    assert_eq!(track, Track::new("1", "Song", "A"));
}

#[test]
fn test_track_from_item_without_artists() {
    let track = Track::from(create_test_item("1", "Song", &[]));
    assert_eq!(track.artist, "");
}

#[test]
fn test_top_tracks_response_decoding() {
    let body = json!({
        "href": "https://api.spotify.com/v1/me/top/tracks",
        "items": [
            { "id": "1", "name": "Song", "artists": [{ "id": "x", "name": "Band" }], "popularity": 80 },
            { "id": "2", "name": "No Artists Field" }
        ],
        "limit": 10,
        "total": 2
    });

    let page: TopTracksResponse = serde_json::from_value(body).unwrap();
    let tracks: Vec<Track> = page.items.into_iter().map(Track::from).collect();

    // Provider order is preserved
    assert_eq!(
        tracks,
        vec![
            Track::new("1", "Song", "Band"),
            Track::new("2", "No Artists Field", ""),
        ]
    );
}

#[test]
fn test_top_tracks_response_with_null_and_missing_fields() {
    let body = r#"{"items":[
        {"id":null,"name":"Local File","artists":null},
        {"name":"No Id"},
        {"id":"3","name":null,"artists":[{"name":null},{"name":"Second"}]}
    ]}"#;

    let page: TopTracksResponse = serde_json::from_str(body).unwrap();
    let tracks: Vec<Track> = page.items.into_iter().map(Track::from).collect();

    assert_eq!(
        tracks,
        vec![
            Track::new("", "Local File", ""),
            Track::new("", "No Id", ""),
            Track::new("3", "", ""),
        ]
    );
}

#[test]
fn test_top_tracks_response_with_null_items() {
    let page: TopTracksResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
    assert!(page.items.is_empty());
}

#[test]
fn test_track_json_shape() {
    let track = Track::new("1", "Song", "Band");
    let value = serde_json::to_value(&track).unwrap();
    assert_eq!(value, json!({ "id": "1", "name": "Song", "artist": "Band" }));

    let decoded: Track = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, track);
}

#[test]
fn test_token_expiry() {
    let token = create_test_token("abc", 3600, 1_000);

    assert!(!token.is_expired_at(1_000));
    assert!(!token.is_expired_at(1_000 + 3600 - TOKEN_EXPIRY_DELTA_SECS - 1));
    assert!(token.is_expired_at(1_000 + 3600 - TOKEN_EXPIRY_DELTA_SECS));
    assert!(token.is_expired_at(1_000 + 3600));
}

#[test]
fn test_token_without_lifetime_never_expires() {
    let token = create_test_token("abc", 0, 0);
    assert!(!token.is_expired_at(u32::MAX as u64));
    assert!(token.is_valid());
}

#[test]
fn test_token_with_huge_lifetime_does_not_overflow() {
    let now = Utc::now().timestamp() as u64;
    let token = create_test_token("abc", u64::MAX, now);

    assert!(!token.is_expired_at(now));
    assert!(token.is_valid());
}

#[test]
fn test_token_validity() {
    let now = Utc::now().timestamp() as u64;

    assert!(create_test_token("abc", 3600, now).is_valid());
    assert!(!create_test_token("", 3600, now).is_valid());
    assert!(!create_test_token("abc", 3600, now - 7200).is_valid());
}

#[test]
fn test_token_from_response_defaults() {
    let response: TokenResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    let token = Token::from_response("abc".to_string(), response);

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 0);
    assert_eq!(token.scope, "");
    assert!(token.refresh_token.is_none());
}

#[test]
fn test_time_range_parsing() {
    assert_eq!("short_term".parse::<TimeRange>(), Ok(TimeRange::ShortTerm));
    assert_eq!("Medium_Term".parse::<TimeRange>(), Ok(TimeRange::MediumTerm));
    assert_eq!(" long_term ".parse::<TimeRange>(), Ok(TimeRange::LongTerm));
    assert!("forever".parse::<TimeRange>().is_err());
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::default().to_string(), "short_term");
    assert_eq!(TimeRange::MediumTerm.to_string(), "medium_term");
    assert_eq!(TimeRange::LongTerm.to_string(), "long_term");
}
