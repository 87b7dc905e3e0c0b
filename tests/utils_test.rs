use lidarrify::utils::clean_name_for_search;

// Helper to run a table of (input, expected) cases
fn assert_cleans(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(
            clean_name_for_search(input),
            *expected,
            "input: {:?}",
            input
        );
    }
}

#[test]
fn test_parenthetical_content_removal() {
    assert_cleans(&[
        ("Abbey Road (Remastered)", "Abbey Road"),
        ("Greatest Hits (Deluxe Edition)", "Greatest Hits"),
        ("Live Album (Live)", "Live Album"),
        ("Song Title (feat. Artist)", "Song Title"),
        ("Album (2023 Reissue)", "Album"),
    ]);
}

#[test]
fn test_suffix_removal() {
    assert_cleans(&[
        ("Love Song - Single", "Love Song"),
        ("EP Title - EP", "EP Title"),
        // case-insensitive
        ("love song - single", "love song"),
        ("ep title - ep", "ep title"),
    ]);
}

#[test]
fn test_combined_removal() {
    // parentheses and suffix stripped in the same pass
    assert_cleans(&[
        ("Hit Song (Radio Edit) - Single", "Hit Song"),
        ("EP Name (Deluxe) - EP", "EP Name"),
    ]);
}

#[test]
fn test_names_without_annotations_are_unchanged() {
    assert_cleans(&[("", ""), ("Simple Title", "Simple Title")]);
}

#[test]
fn test_parentheses_in_the_middle_of_a_name() {
    assert_cleans(&[
        ("Title with (brackets) in middle", "Title with in middle"),
        ("Multiple (First) (Second) Parentheses", "Multiple Parentheses"),
    ]);
}

#[test]
fn test_whitespace_handling() {
    assert_cleans(&[
        ("  Spaced Title (Edition)  ", "Spaced Title"),
        ("Title ( With Spaces ) - Single", "Title"),
    ]);
}

#[test]
fn test_nested_parentheses_unwrap_completely() {
    assert_cleans(&[("Title (Contains (Nested) Text)", "Title")]);
}

#[test]
fn test_realistic_library_names() {
    // album and track names as Apple Music actually exports them
    assert_cleans(&[
        ("1989 (Taylor's Version)", "1989"),
        (
            "Sgt. Pepper's Lonely Hearts Club Band (Remastered)",
            "Sgt. Pepper's Lonely Hearts Club Band",
        ),
        (
            "The Dark Side of the Moon (Remastered)",
            "The Dark Side of the Moon",
        ),
        ("Thriller (Special Edition)", "Thriller"),
        ("Born to Run (Remastered) - Single", "Born to Run"),
        ("Christmas Songs - EP", "Christmas Songs"),
        ("Greatest Hits (Deluxe Edition) - EP", "Greatest Hits"),
    ]);
}
