//! Login page and OAuth callback landing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in happens on the API: the buttons here send the browser to its
//! login URL, and the API redirects back to `/auth/callback.html` with either
//! `token` + `role` or `error` in the query string.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::PortalReconciler;
use crate::config::PortalConfig;
use crate::state::notices::NoticeLevel;
use crate::state::session::{AuthCallback, Role, login_url};
use crate::util::shell::Shell;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let reconciler = expect_context::<PortalReconciler>();
    let query = use_query_map();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let params = query.get();
        let session = reconciler.session();
        match AuthCallback::from_params(params.get_str("token"), params.get_str("role"), params.get_str("error")) {
            AuthCallback::SignedIn { token, role } => {
                match reconciler.sign_in(&token, role) {
                    Ok(()) => {
                        log::info!("signed in as {}", role.as_str());
                        navigate(role.landing_route(), NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(e) => {
                        log::error!("failed to store session: {e}");
                        reconciler.shell().notify(NoticeLevel::Error, "Could not save your sign-in in this browser.");
                    }
                }
            }
            AuthCallback::Failed(message) => {
                log::warn!("login callback failed: {message}");
                error.set(Some(message));
            }
            AuthCallback::Absent => {
                if let Some(role) = session.role() {
                    navigate(role.landing_route(), NavigateOptions { replace: true, ..Default::default() });
                }
            }
        }
    });

    let student_url = login_url(&config.api_base_url, Role::Student);
    let admin_url = login_url(&config.api_base_url, Role::Admin);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Placement Portal"</h1>
                <p class="login-card__subtitle">"Sign in with your college account"</p>
                {move || error.get().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
                <a href=student_url class="login-button">
                    "Sign in as Student"
                </a>
                <a href=admin_url class="login-button login-button--secondary">
                    "Sign in as Admin"
                </a>
            </div>
        </div>
    }
}
