use super::*;

#[test]
fn signed_out_visitor_is_redirected() {
    assert!(should_redirect(None, Role::Student));
    assert!(should_redirect(None, Role::Admin));
}

#[test]
fn wrong_role_is_redirected() {
    assert!(should_redirect(Some(Role::Student), Role::Admin));
    assert!(should_redirect(Some(Role::Admin), Role::Student));
}

#[test]
fn matching_role_stays() {
    assert!(!should_redirect(Some(Role::Admin), Role::Admin));
    assert!(!should_redirect(Some(Role::Student), Role::Student));
}
