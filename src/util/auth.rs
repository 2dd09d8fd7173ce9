//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Student and admin pages apply identical redirect behavior when the stored
//! session is missing or belongs to the other role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::reconciler::LOGIN_ROUTE;
use crate::state::session::{Role, Session};
use crate::util::storage::KeyValueStore;

/// Whether a visitor signed in as `current` must leave a page for `required`.
pub fn should_redirect(current: Option<Role>, required: Role) -> bool {
    current != Some(required)
}

/// Redirect to the login route unless the session holds `required`.
pub fn install_role_guard<S, F>(session: Session<S>, required: Role, navigate: F)
where
    S: KeyValueStore + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let current = session.role();
        if should_redirect(current, required) {
            log::info!("redirecting {current:?} away from {} page", required.as_str());
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
