use super::*;

#[test]
fn roll_is_trimmed_and_uppercased() {
    assert_eq!(normalize_roll("  21cs042 "), Ok("21CS042".to_owned()));
    assert_eq!(normalize_roll("21-cs_042"), Ok("21-CS_042".to_owned()));
}

#[test]
fn blank_roll_is_rejected() {
    assert_eq!(normalize_roll(""), Err(EMPTY_ROLL_MESSAGE));
    assert_eq!(normalize_roll("   "), Err(EMPTY_ROLL_MESSAGE));
}

#[test]
fn roll_with_path_characters_is_refused_not_rewritten() {
    assert_eq!(normalize_roll("21/CS/001"), Err(INVALID_ROLL_MESSAGE));
    assert_eq!(normalize_roll("21CS?001"), Err(INVALID_ROLL_MESSAGE));
    assert_eq!(normalize_roll("21 CS 001"), Err(INVALID_ROLL_MESSAGE));
}

#[test]
fn signed_out_search_never_starts() {
    assert_eq!(start_search("21cs042", None), SearchStart::SignedOut);
}

#[test]
fn invalid_roll_is_reported_before_credential_check() {
    assert_eq!(start_search("21/CS/001", None), SearchStart::Invalid(INVALID_ROLL_MESSAGE));
}

#[test]
fn signed_in_search_carries_roll_and_token() {
    assert_eq!(
        start_search(" 21cs042 ", Some("jwt".to_owned())),
        SearchStart::Request { roll: "21CS042".to_owned(), token: "jwt".to_owned() }
    );
}
