//! Admin search for a single student's profile by roll number.

#[cfg(test)]
#[path = "admin_lookup_test.rs"]
mod admin_lookup_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::app::PortalReconciler;
use crate::components::profile_sections::ProfileSections;
use crate::components::top_bar::TopBar;
#[cfg(feature = "csr")]
use crate::net::api::{ApiError, HttpApi};
use crate::net::types::Profile;
use crate::pages::ADMIN_LINKS;
#[cfg(feature = "csr")]
use crate::state::reconciler::LOGIN_ROUTE;
use crate::state::session::Role;
use crate::util::auth::install_role_guard;
#[cfg(feature = "csr")]
use crate::util::shell::Shell;

#[derive(Clone, Debug, PartialEq)]
enum LookupState {
    Idle,
    Searching,
    Found(Profile),
    Missing(String),
    Failed(String),
}

const EMPTY_ROLL_MESSAGE: &str = "Enter a roll number.";
const INVALID_ROLL_MESSAGE: &str = "Roll numbers may only contain letters, digits, '-' and '_'.";

/// Roll numbers are matched case-insensitively; stored uppercase.
///
/// Input that would not survive as a single path segment is refused rather
/// than rewritten.
fn normalize_roll(input: &str) -> Result<String, &'static str> {
    let roll = input.trim().to_ascii_uppercase();
    if roll.is_empty() {
        return Err(EMPTY_ROLL_MESSAGE);
    }
    if !roll.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) {
        return Err(INVALID_ROLL_MESSAGE);
    }
    Ok(roll)
}

/// What a search submission leads to before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SearchStart {
    Request { roll: String, token: String },
    Invalid(&'static str),
    SignedOut,
}

fn start_search(input: &str, credential: Option<String>) -> SearchStart {
    let roll = match normalize_roll(input) {
        Ok(roll) => roll,
        Err(message) => return SearchStart::Invalid(message),
    };
    match credential {
        Some(token) => SearchStart::Request { roll, token },
        None => SearchStart::SignedOut,
    }
}

#[component]
pub fn AdminLookupPage() -> impl IntoView {
    let reconciler = expect_context::<PortalReconciler>();
    install_role_guard(reconciler.session().clone(), Role::Admin, use_navigate());

    #[cfg(feature = "csr")]
    let api = expect_context::<HttpApi>();
    let roll_input = RwSignal::new(String::new());
    let state = RwSignal::new(LookupState::Idle);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == LookupState::Searching {
            return;
        }
        let (roll, token) = match start_search(&roll_input.get_untracked(), reconciler.session().credential()) {
            SearchStart::Request { roll, token } => (roll, token),
            SearchStart::Invalid(message) => {
                state.set(LookupState::Failed(message.to_owned()));
                return;
            }
            SearchStart::SignedOut => {
                #[cfg(feature = "csr")]
                reconciler.shell().navigate(LOGIN_ROUTE);
                return;
            }
        };
        state.set(LookupState::Searching);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let reconciler = reconciler.clone();
            leptos::task::spawn_local(async move {
                let next = match api.fetch_student_by_roll(&token, &roll).await {
                    Ok(found) => LookupState::Found(found),
                    Err(ApiError::Status(404)) => LookupState::Missing(roll),
                    Err(ApiError::Unauthorized) => {
                        reconciler.session().clear();
                        reconciler.shell().navigate(LOGIN_ROUTE);
                        return;
                    }
                    Err(e) => {
                        log::error!("roll lookup for {roll} failed: {e}");
                        LookupState::Failed(format!("Lookup failed: {e}"))
                    }
                };
                state.set(next);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (roll, token);
        }
    };

    view! {
        <TopBar title="Admin" links=ADMIN_LINKS/>
        <div class="lookup-page">
            <h1 class="lookup-page__title">"Student Lookup"</h1>
            <form class="lookup-form" on:submit=on_search>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Roll number"
                    prop:value=move || roll_input.get()
                    on:input=move |ev| roll_input.set(event_target_value(&ev))
                />
                <button class="form-button" type="submit" disabled=move || state.get() == LookupState::Searching>
                    "Search"
                </button>
            </form>
            {move || match state.get() {
                LookupState::Idle => ().into_any(),
                LookupState::Searching => view! { <p class="lookup-page__status">"Searching..."</p> }.into_any(),
                LookupState::Found(found) => view! { <ProfileSections profile=found/> }.into_any(),
                LookupState::Missing(roll) => {
                    view! { <p class="lookup-page__status">{format!("No student found with roll number {roll}.")}</p> }
                        .into_any()
                }
                LookupState::Failed(message) => view! { <p class="lookup-page__error">{message}</p> }.into_any(),
            }}
        </div>
    }
}
