use lidarrify::musicbrainz::{recording_query, release_group_query};

#[test]
fn test_recording_query_quotes_every_clause() {
    let query = recording_query("The Beatles", "Come Together", Some("Abbey Road"));
    assert_eq!(
        query,
        r#"recording:"Come Together" AND artist:"The Beatles" AND release:"Abbey Road""#
    );
}

#[test]
fn test_recording_query_without_album_omits_release_clause() {
    let query = recording_query("The Beatles", "Come Together", None);
    assert_eq!(query, r#"recording:"Come Together" AND artist:"The Beatles""#);
}

#[test]
fn test_recording_query_normalizes_title_and_album() {
    let query = recording_query(
        "Bruce Springsteen",
        "Born to Run (Remastered) - Single",
        Some("Greatest Hits (Deluxe Edition)"),
    );
    assert_eq!(
        query,
        r#"recording:"Born to Run" AND artist:"Bruce Springsteen" AND release:"Greatest Hits""#
    );
}

#[test]
fn test_recording_query_keeps_artist_verbatim() {
    // artist names are not run through the normalizer
    let query = recording_query("Sunset (1984)", "Some Song", None);
    assert_eq!(query, r#"recording:"Some Song" AND artist:"Sunset (1984)""#);
}

#[test]
fn test_release_group_query_normalizes_album() {
    let query = release_group_query("Taylor Swift", "1989 (Taylor's Version)");
    assert_eq!(query, r#"releasegroup:"1989" AND artist:"Taylor Swift""#);
}
