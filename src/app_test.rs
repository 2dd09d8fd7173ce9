use leptos_router::PossibleRouteMatch;

use super::*;

#[test]
fn callback_route_matches_api_redirect() {
    let matched = AUTH_CALLBACK_PATH.test("/auth/callback.html");
    assert_eq!(matched.map(|m| m.remaining()), Some(""));
}

#[test]
fn callback_route_needs_html_suffix() {
    assert!(AUTH_CALLBACK_PATH.test("/auth/callback").is_none());
    assert!(AUTH_CALLBACK_PATH.test("/profile").is_none());
}
